//! This module contains the foreign key entity.

use candid::CandidType;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Referential action taken `ON DELETE` or `ON UPDATE`.
    #[derive(Default)]
    pub enum Constraint: UnknownConstraint {
        /// No action specified.
        #[default]
        None => "",
        Cascade => "cascade",
        /// Set the referencing columns to NULL.
        Null => "null",
        Restrict => "restrict",
    }
}

/// A pair of columns linked by a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub struct ForeignKeyField {
    /// Name of the column in the referenced table (e.g., "id")
    pub foreign: String,
    /// Name of the local column that holds the reference (e.g., "user_id")
    pub main: String,
}

impl ForeignKeyField {
    pub fn new(foreign: impl Into<String>, main: impl Into<String>) -> Self {
        Self {
            foreign: foreign.into(),
            main: main.into(),
        }
    }
}

/// A named referential constraint towards another table.
///
/// Tables and columns are referenced by name.
#[derive(Clone, Debug, PartialEq, Eq, CandidType, Serialize, Deserialize)]
pub struct ForeignKey {
    pub name: String,
    /// Column pairs, in composite key order.
    pub fields: Vec<ForeignKeyField>,
    /// Name of the referenced table (e.g., "users")
    #[serde(rename = "foreignTableName")]
    pub foreign_table_name: String,
    #[serde(default, rename = "onDelete")]
    pub on_delete: Constraint,
    #[serde(default, rename = "onUpdate")]
    pub on_update: Constraint,
}

/// Optional attributes of a [`ForeignKey`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForeignKeyInit {
    pub on_delete: Option<Constraint>,
    pub on_update: Option<Constraint>,
}

impl ForeignKey {
    /// Creates a foreign key without referential actions.
    pub fn new(
        name: impl Into<String>,
        fields: Vec<ForeignKeyField>,
        foreign_table_name: impl Into<String>,
    ) -> Self {
        Self::with_init(name, fields, foreign_table_name, ForeignKeyInit::default())
    }

    pub fn with_init(
        name: impl Into<String>,
        fields: Vec<ForeignKeyField>,
        foreign_table_name: impl Into<String>,
        init: ForeignKeyInit,
    ) -> Self {
        let foreign_key = Self {
            name: name.into(),
            fields,
            foreign_table_name: foreign_table_name.into(),
            on_delete: init.on_delete.unwrap_or_default(),
            on_update: init.on_update.unwrap_or_default(),
        };
        tracing::trace!(
            name = %foreign_key.name,
            foreign_table = %foreign_key.foreign_table_name,
            "created foreign key"
        );

        foreign_key
    }
}
