use thiserror::Error;

/// Schema Error type
///
/// Building the schema graph never fails; errors only arise when a vocabulary token
/// (type name, index type, key type, constraint action) is parsed from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The given text is not a known column type name.
    #[error("Unknown type name: '{0}'")]
    UnknownTypeName(String),
    /// The given text is not a known index type.
    #[error("Unknown index type: '{0}'")]
    UnknownIndexType(String),
    /// The given text is not a known index key type.
    #[error("Unknown key type: '{0}'")]
    UnknownKeyType(String),
    /// The given text is not a known foreign key constraint action.
    #[error("Unknown constraint action: '{0}'")]
    UnknownConstraint(String),
}

/// Schema Result type
pub type SchemaResult<T> = Result<T, SchemaError>;
