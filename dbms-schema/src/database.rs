//! This module contains the database entity.

use candid::CandidType;
use serde::{Deserialize, Serialize};

/// A database.
///
/// Tables are not attached to it; a table without collation inherits `collate`.
#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct Database {
    pub name: String,
    /// Default collation; `None` means the engine default.
    pub collate: Option<String>,
}

/// Optional attributes of a [`Database`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseInit {
    pub collate: Option<String>,
}

impl Database {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_init(name, DatabaseInit::default())
    }

    pub fn with_init(name: impl Into<String>, init: DatabaseInit) -> Self {
        Self {
            name: name.into(),
            collate: init.collate,
        }
    }
}
