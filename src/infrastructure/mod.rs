// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含数据访问的具体实现：
/// - 数据库（database）：连接工厂与 ORM 上下文工厂
/// - 仓库实现（repositories）：领域仓库接口的 sqlx 与 sea-orm 实现及审计装饰器
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod database;
pub mod repositories;
