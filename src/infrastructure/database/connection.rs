// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::{DatabaseSettings, SettingsError};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// 连接工厂错误
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("Unsupported database scheme: {0}")]
    UnsupportedScheme(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 连接字符串对应的 SQL 方言，仅用于决定绑定占位符的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    /// 依据连接字符串的 scheme 判断方言
    pub fn from_url(url: &str) -> Result<Self, ConnectionError> {
        let scheme = url.split(':').next().unwrap_or_default().to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "mysql" | "mariadb" => Ok(Self::MySql),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(ConnectionError::UnsupportedScheme(scheme)),
        }
    }

    /// 第 `index` 个（从 1 开始）绑定参数的占位符
    pub fn placeholder(&self, index: usize) -> String {
        match self {
            Self::Postgres => format!("${}", index),
            Self::MySql | Self::Sqlite => "?".to_string(),
        }
    }
}

/// 提供 sqlx 连接池的工厂
pub trait ConnectionFactory: Send + Sync {
    fn connection(&self) -> &AnyPool;
    fn dialect(&self) -> Dialect;
}

/// 提供 ORM 上下文的工厂
pub trait DbContextFactory: Send + Sync {
    fn db_context(&self) -> &DatabaseConnection;
}

/// 以命名连接字符串创建的 sqlx 连接池工厂
#[derive(Debug, Clone)]
pub struct PooledConnectionFactory {
    pool: AnyPool,
    dialect: Dialect,
}

impl PooledConnectionFactory {
    /// 创建延迟连接的连接池
    ///
    /// 连接在第一次使用时才会创建，因此本函数不需要在异步上下文中调用，
    /// 但连接池本身需要 tokio 执行环境
    pub fn new(settings: &DatabaseSettings, key: &str) -> Result<Self, ConnectionError> {
        let url = settings.connection_string(key)?;
        let dialect = Dialect::from_url(url)?;

        sqlx::any::install_default_drivers();

        let mut options = AnyPoolOptions::new();
        if let Some(max) = settings.max_connections {
            options = options.max_connections(max);
        }
        if let Some(min) = settings.min_connections {
            options = options.min_connections(min);
        }
        if let Some(timeout) = settings.connect_timeout {
            options = options.acquire_timeout(Duration::from_secs(timeout));
        }
        if let Some(idle) = settings.idle_timeout {
            options = options.idle_timeout(Duration::from_secs(idle));
        }

        let pool = options.connect_lazy(url)?;
        info!(key, ?dialect, "Created pooled connection factory");

        Ok(Self { pool, dialect })
    }

    /// 包装既有的连接池
    pub fn from_pool(pool: AnyPool, dialect: Dialect) -> Self {
        Self { pool, dialect }
    }
}

impl ConnectionFactory for PooledConnectionFactory {
    fn connection(&self) -> &AnyPool {
        &self.pool
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

/// 以命名连接字符串创建的 sea-orm 上下文工厂
#[derive(Debug, Clone)]
pub struct SeaOrmContextFactory {
    db: DatabaseConnection,
}

impl SeaOrmContextFactory {
    /// 创建数据库连接池
    ///
    /// # 参数
    ///
    /// * `settings` - 数据库配置
    /// * `key` - 连接字符串名称
    ///
    /// # 返回值
    ///
    /// * `Ok(SeaOrmContextFactory)` - 上下文工厂
    /// * `Err(ConnectionError)` - 找不到连接字符串或连接失败
    pub async fn connect(settings: &DatabaseSettings, key: &str) -> Result<Self, ConnectionError> {
        let mut opt = ConnectOptions::new(settings.connection_string(key)?.to_owned());

        if let Some(max) = settings.max_connections {
            opt.max_connections(max);
        }

        if let Some(min) = settings.min_connections {
            opt.min_connections(min);
        }

        if let Some(timeout) = settings.connect_timeout {
            opt.connect_timeout(Duration::from_secs(timeout));
            opt.acquire_timeout(Duration::from_secs(timeout));
        }

        if let Some(idle) = settings.idle_timeout {
            opt.idle_timeout(Duration::from_secs(idle));
        }

        opt.max_lifetime(Duration::from_secs(3600)).sqlx_logging(true);

        let db = Database::connect(opt).await?;
        info!(key, "Created ORM context factory");

        Ok(Self { db })
    }

    /// 包装既有的连接
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DbContextFactory for SeaOrmContextFactory {
    fn db_context(&self) -> &DatabaseConnection {
        &self.db
    }
}
