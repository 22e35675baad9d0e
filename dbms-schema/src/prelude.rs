//! Prelude exposes all the types for `dbms-schema` crate.

pub use crate::column::{Column, ColumnInit, normalize_default};
pub use crate::database::{Database, DatabaseInit};
pub use crate::error::{SchemaError, SchemaResult};
pub use crate::foreign_key::{Constraint, ForeignKey, ForeignKeyField, ForeignKeyInit};
pub use crate::index::{Index, IndexInit, IndexKey, IndexType, KeyType};
pub use crate::table::{Table, TableInit};
pub use crate::types::{DateValue, MaxValue, Type, TypeInit, TypeName};
pub use crate::value::DefaultValue;
