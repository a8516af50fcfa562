// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod records;

use chrono::{DateTime, TimeZone, Utc};
use dalkit::config::settings::DatabaseSettings;
use dalkit::domain::context::{ExecutionContext, FixedUserContext, UserContext};
use dalkit::infrastructure::database::{
    DbContextFactory, Dialect, PooledConnectionFactory, SeaOrmContextFactory,
};
use sea_orm::{ConnectionTrait, Schema};
use sqlx::any::AnyPoolOptions;
use std::collections::HashMap;
use std::sync::Arc;

const CREATE_PRODUCTS: &str = "CREATE TABLE products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL,
    created_at TEXT,
    created_by TEXT,
    updated_at TEXT,
    updated_by TEXT
)";

const CREATE_CURRENCIES: &str = "CREATE TABLE currencies (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL
)";

/// 固定时间的执行上下文
pub struct FixedClock(pub DateTime<Utc>);

impl ExecutionContext for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
}

pub fn user_context(user_id: &str) -> Arc<dyn UserContext> {
    Arc::new(FixedUserContext::new(user_id))
}

pub fn clock(at: DateTime<Utc>) -> Arc<dyn ExecutionContext> {
    Arc::new(FixedClock(at))
}

/// 创建单一连接的内存 SQLite 连接池并创建测试数据表
///
/// 连接池只保留一条连接，避免每条连接各自拥有独立的内存数据库
pub async fn sqlx_factory() -> PooledConnectionFactory {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    for ddl in [CREATE_PRODUCTS, CREATE_CURRENCIES] {
        sqlx::query(ddl).execute(&pool).await.unwrap();
    }

    PooledConnectionFactory::from_pool(pool, Dialect::Sqlite)
}

/// 创建内存 SQLite 的 ORM 上下文并按实体创建数据表
pub async fn sea_orm_factory() -> SeaOrmContextFactory {
    let settings = DatabaseSettings {
        connection_strings: HashMap::from([("Main".to_string(), "sqlite::memory:".to_string())]),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
    };
    let factory = SeaOrmContextFactory::connect(&settings, "Main").await.unwrap();

    let db = factory.db_context();
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);
    db.execute(backend.build(&schema.create_table_from_entity(entities::author::Entity)))
        .await
        .unwrap();
    db.execute(backend.build(&schema.create_table_from_entity(entities::post::Entity)))
        .await
        .unwrap();

    factory
}
