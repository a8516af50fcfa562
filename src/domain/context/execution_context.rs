// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};

/// 执行上下文
///
/// 提供当前时间。以注入方式获取，使审计行为可预期、可测试。
pub trait ExecutionContext: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 系统时钟执行上下文
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemExecutionContext;

impl ExecutionContext for SystemExecutionContext {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
