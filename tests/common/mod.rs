//! Shared fixtures: a two-entity schema (suppliers and their products) and
//! a single-connection in-memory SQLite connector.

use dbaccess::{DbSettings, SqlConnector, SupportedProvider};
use sea_orm::{ConnectionTrait, Set, Statement};

pub mod supplier {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "suppliers")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub active: bool,
        pub created_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(has_many = "super::product::Entity")]
        Products,
    }

    impl Related<super::product::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Products.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod product {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "products")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub supplier_id: i32,
        pub name: String,
        pub unit_price_cents: i64,
        pub created_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::supplier::Entity",
            from = "Column::SupplierId",
            to = "super::supplier::Column::Id"
        )]
        Supplier,
    }

    impl Related<super::supplier::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Supplier.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Connector over a fresh in-memory database with the schema applied. The
/// pool is pinned to one connection so every unit of work sees the same
/// in-memory database.
pub async fn connector() -> SqlConnector {
    let settings = DbSettings::new("sqlite::memory:", SupportedProvider::Sqlite)
        .expect("valid settings")
        .with_max_connections(1);
    let connector = SqlConnector::new(settings);

    let db = connector.connection().await.expect("Failed to connect");
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            created_at TEXT NOT NULL
        )
        "#,
    ))
    .await
    .expect("Failed to create suppliers table");

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            supplier_id INTEGER NOT NULL,
            name TEXT NOT NULL,
            unit_price_cents INTEGER NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    ))
    .await
    .expect("Failed to create products table");

    connector
}

pub fn supplier_record(name: &str, active: bool) -> supplier::ActiveModel {
    supplier::ActiveModel {
        name: Set(name.to_string()),
        active: Set(active),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    }
}

pub fn product_record(supplier_id: i32, name: &str, unit_price_cents: i64) -> product::ActiveModel {
    product::ActiveModel {
        supplier_id: Set(supplier_id),
        name: Set(name.to_string()),
        unit_price_cents: Set(unit_price_cents),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    }
}
