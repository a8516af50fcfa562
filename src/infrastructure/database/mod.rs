// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供连接工厂与 ORM 上下文工厂
pub mod connection;

pub use connection::{
    ConnectionError, ConnectionFactory, DbContextFactory, Dialect, PooledConnectionFactory,
    SeaOrmContextFactory,
};
