//! Builds a small blog schema and prints it as JSON, as a downstream tool would receive it.
//!
//! Set `RUST_LOG=dbms_schema=trace` to follow the construction.

use dbms_schema::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn users_table(collation: &str) -> Table {
    Table::with_init(
        "users",
        TableInit {
            collation: Some(collation.to_string()),
            engine: Some("InnoDB".to_string()),
            columns: Some(vec![
                Column::with_init(
                    "id",
                    Type::integer(None, false),
                    ColumnInit {
                        auto_increment: Some(true),
                        ..Default::default()
                    },
                ),
                Column::with_init(
                    "email",
                    Type::string(255, true, None),
                    ColumnInit {
                        former_names: Some(vec!["mail".to_string()]),
                        ..Default::default()
                    },
                ),
                Column::with_init(
                    "signed_up",
                    Type::date(),
                    ColumnInit {
                        default: Some("2024-01-01".into()),
                        ..Default::default()
                    },
                ),
            ]),
            indexes: Some(vec![Index::with_init(
                "PRIMARY",
                vec![IndexKey::new("id")],
                IndexInit {
                    index_type: Some(IndexType::Primary),
                    unique: Some(true),
                },
            )]),
            ..Default::default()
        },
    )
}

fn posts_table(collation: &str) -> Table {
    Table::with_init(
        "posts",
        TableInit {
            collation: Some(collation.to_string()),
            engine: Some("InnoDB".to_string()),
            columns: Some(vec![
                Column::with_init(
                    "id",
                    Type::integer(None, false),
                    ColumnInit {
                        auto_increment: Some(true),
                        ..Default::default()
                    },
                ),
                Column::new("author_id", Type::integer(None, false)),
                Column::with_init(
                    "status",
                    Type::enumeration(["draft", "published"]),
                    ColumnInit {
                        default: Some("draft".into()),
                        ..Default::default()
                    },
                ),
                Column::with_init(
                    "views",
                    Type::integer(None, false),
                    ColumnInit {
                        default: Some("0".into()),
                        ..Default::default()
                    },
                ),
            ]),
            indexes: Some(vec![Index::new(
                "idx_author",
                vec![IndexKey::new("author_id")],
            )]),
            foreign_keys: Some(vec![ForeignKey::with_init(
                "fk_posts_author",
                vec![ForeignKeyField::new("id", "author_id")],
                "users",
                ForeignKeyInit {
                    on_delete: Some(Constraint::Cascade),
                    ..Default::default()
                },
            )]),
        },
    )
}

fn main() -> Result<(), serde_json::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database = Database::with_init(
        "blog",
        DatabaseInit {
            collate: Some("utf8mb4_general_ci".to_string()),
        },
    );
    let collation = database.collate.clone().unwrap_or_default();
    let tables = vec![users_table(&collation), posts_table(&collation)];

    for table in &tables {
        info!(
            table = %table.name,
            charset = table.charset(),
            columns = table.columns.len(),
            "table ready"
        );
    }

    let schema = serde_json::json!({
        "database": database,
        "tables": tables,
    });
    println!("{}", serde_json::to_string_pretty(&schema)?);

    Ok(())
}
