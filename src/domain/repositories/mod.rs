// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义两种通用仓库的抽象契约：
/// - 通用仓库（generic_repository）：基于连接工厂的微型 ORM 仓库
/// - 上下文仓库（context_repository）：基于 ORM 上下文的仓库，支持预先加载关联数据
///
/// 具体实现与审计装饰器由基础设施层提供。
pub mod context_repository;
pub mod generic_repository;

use crate::sql::SqlStatementError;
use sea_orm::DbErr;
use thiserror::Error;

pub use context_repository::{ContextRepository, Include, Loaded, ModelOf};
pub use generic_repository::{AnyTransaction, Filter, GenericRepository, Record};

/// 仓库错误类型
///
/// 底层数据访问库的错误原样包装后传递给调用方，不做重试
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 传入的实体为空
    #[error("Argument null: {0}")]
    NullEntity(&'static str),
    /// SQL 语句渲染失败
    #[error("Statement error: {0}")]
    Statement(#[from] SqlStatementError),
    /// ORM 错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// sqlx 错误
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// 取出实体参数，为空时返回 [`RepositoryError::NullEntity`]
pub(crate) fn require_entity<T>(entity: Option<T>) -> Result<T, RepositoryError> {
    entity.ok_or(RepositoryError::NullEntity("entity"))
}
