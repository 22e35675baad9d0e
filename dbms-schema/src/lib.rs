#![crate_name = "dbms_schema"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # DBMS Schema
//!
//! An in-memory description of relational database structures: databases, tables, columns,
//! indexes, foreign keys and column types.
//!
//! The object graph is built by schema authors and handed as-is to downstream tooling
//! (SQL generators, migration planners, diffing tools). Nothing here connects to a database.
//!
//! Every entity is built from a required identity (a name, or a name and a [`Type`]) plus an
//! optional `*Init` configuration whose fields override the entity defaults one by one.
//! The only construction step with real logic is the [`Column`] default normalization,
//! which reconciles the declared default with the column [`TypeName`].
//!
//! ```rust
//! use dbms_schema::prelude::*;
//!
//! let column = Column::with_init(
//!     "views",
//!     Type::integer(None, false),
//!     ColumnInit {
//!         default: Some("5".into()),
//!         ..Default::default()
//!     },
//! );
//! assert_eq!(column.default, Some(DefaultValue::Number(5.0)));
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

#[macro_use]
mod vocabulary;

mod column;
mod database;
mod error;
mod foreign_key;
mod index;
pub mod prelude;
mod table;
mod types;
mod value;

pub use self::column::{Column, ColumnInit, normalize_default};
pub use self::database::{Database, DatabaseInit};
pub use self::error::{SchemaError, SchemaResult};
pub use self::foreign_key::{Constraint, ForeignKey, ForeignKeyField, ForeignKeyInit};
pub use self::index::{Index, IndexInit, IndexKey, IndexType, KeyType};
pub use self::table::{Table, TableInit};
pub use self::types::{DateValue, MaxValue, Type, TypeInit, TypeName};
pub use self::value::DefaultValue;
