use candid::CandidType;
use serde::{Deserialize, Serialize};

vocabulary! {
    /// Kind tag of an index key, informational for downstream tooling.
    #[derive(Default)]
    pub enum KeyType: UnknownKeyType {
        #[default]
        Key => "key",
        Btree => "btree",
        Fulltext => "fulltext",
        Spatial => "spatial",
        Unique => "unique",
    }
}

/// A column reference within an index.
///
/// The column is referenced by name; resolving it against the table is up to the consumer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, CandidType, Serialize, Deserialize)]
pub struct IndexKey {
    /// Name of the indexed column.
    #[serde(rename = "columnName")]
    pub column_name: String,
    /// Prefix length, for partial indexes on long values.
    pub length: Option<u32>,
}

impl IndexKey {
    /// A key on the whole column value.
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            length: None,
        }
    }

    /// A key on the first `length` characters or bytes of the column value.
    pub fn with_length(column_name: impl Into<String>, length: u32) -> Self {
        Self {
            column_name: column_name.into(),
            length: Some(length),
        }
    }
}
