//! This module contains the index entity.

use candid::CandidType;
use serde::{Deserialize, Serialize};

mod key;

pub use self::key::{IndexKey, KeyType};

vocabulary! {
    /// The kind of an index.
    #[derive(Default)]
    pub enum IndexType: UnknownIndexType {
        #[default]
        Key => "key",
        Primary => "primary",
        Unique => "unique",
    }
}

/// A named index over an ordered list of keys.
///
/// `index_type` and `unique` are independent: a primary index is not forced unique here,
/// reconciling them is up to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    /// Keys in index column order.
    pub keys: Vec<IndexKey>,
    #[serde(default, rename = "type")]
    pub index_type: IndexType,
    #[serde(default)]
    pub unique: bool,
}

/// Optional attributes of an [`Index`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexInit {
    #[serde(rename = "type")]
    pub index_type: Option<IndexType>,
    pub unique: Option<bool>,
}

impl Index {
    /// Creates a plain, non unique index.
    pub fn new(name: impl Into<String>, keys: Vec<IndexKey>) -> Self {
        Self::with_init(name, keys, IndexInit::default())
    }

    pub fn with_init(name: impl Into<String>, keys: Vec<IndexKey>, init: IndexInit) -> Self {
        let index = Self {
            name: name.into(),
            keys,
            index_type: init.index_type.unwrap_or_default(),
            unique: init.unique.unwrap_or(false),
        };
        tracing::trace!(name = %index.name, keys = index.keys.len(), "created index");

        index
    }
}
