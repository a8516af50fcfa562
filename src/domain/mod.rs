// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含数据访问的抽象，包括：
/// - 上下文（context）：当前用户与执行时间的来源
/// - 领域模型（models）：审计字段与用户信息
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 验证（validation）：按优先级执行的模型验证规则
///
/// 领域层不依赖于任何具体的连接或 ORM 上下文实现。
pub mod context;
pub mod models;
pub mod repositories;
pub mod validation;
