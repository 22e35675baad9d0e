//! This module contains the table entity.

use candid::CandidType;
use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::foreign_key::ForeignKey;
use crate::index::Index;

/// A table: its columns, indexes and foreign keys, in declaration order.
///
/// Names are not required to be unique within a table; checking that is up to the consumer.
#[derive(Clone, Debug, PartialEq, CandidType, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Collation, e.g. `utf8mb4_general_ci`; empty when not specified.
    #[serde(default)]
    pub collation: String,
    /// Storage engine; empty when not specified.
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub indexes: Vec<Index>,
    #[serde(default, rename = "foreignKeys")]
    pub foreign_keys: Vec<ForeignKey>,
}

/// Optional attributes of a [`Table`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableInit {
    pub collation: Option<String>,
    pub columns: Option<Vec<Column>>,
    pub engine: Option<String>,
    pub foreign_keys: Option<Vec<ForeignKey>>,
    pub indexes: Option<Vec<Index>>,
}

impl Table {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_init(name, TableInit::default())
    }

    pub fn with_init(name: impl Into<String>, init: TableInit) -> Self {
        let table = Self {
            name: name.into(),
            collation: init.collation.unwrap_or_default(),
            engine: init.engine.unwrap_or_default(),
            columns: init.columns.unwrap_or_default(),
            indexes: init.indexes.unwrap_or_default(),
            foreign_keys: init.foreign_keys.unwrap_or_default(),
        };
        tracing::trace!(
            name = %table.name,
            columns = table.columns.len(),
            indexes = table.indexes.len(),
            foreign_keys = table.foreign_keys.len(),
            "created table"
        );

        table
    }

    /// Returns the character set, which is the collation up to its first `_`.
    ///
    /// Empty when the collation is empty or has no `_`. Computed on every call.
    pub fn charset(&self) -> &str {
        self.collation
            .split_once('_')
            .map_or("", |(charset, _)| charset)
    }

    /// Returns the first column with the given name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Returns the first index with the given name.
    pub fn index(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|index| index.name == name)
    }

    /// Returns the first foreign key with the given name.
    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKey> {
        self.foreign_keys.iter().find(|fk| fk.name == name)
    }
}
