// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现：
/// - sqlx 通用仓库与其审计装饰器
/// - sea-orm 上下文仓库、其同步版本与审计装饰器
pub mod audited_context_repository;
pub mod audited_repository;
pub mod blocking_repository;
pub mod sea_orm_repository;
pub mod sqlx_repository;

pub use audited_context_repository::AuditedContextRepository;
pub use audited_repository::AuditedRepository;
pub use blocking_repository::BlockingRepository;
pub use sea_orm_repository::SeaOrmRepository;
pub use sqlx_repository::SqlxRepository;
