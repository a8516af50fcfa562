// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理连接字符串与日志的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含审计模型、执行上下文、验证规则和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供连接工厂与仓库实现
pub mod infrastructure;

/// SQL 语句模块
///
/// 以流式方法累积子句并渲染 SELECT、UPDATE、DELETE 与分页语句
pub mod sql;

/// 工具模块
///
/// 提供日志初始化与错误处理器登记
pub mod utils;
