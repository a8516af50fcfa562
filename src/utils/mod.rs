// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工具模块
///
/// 提供日志初始化与错误处理器注册表等通用功能
pub mod error_handler;
pub mod telemetry;
