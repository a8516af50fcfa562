// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 上下文模块
///
/// 审计仓库依赖的两个外部协作者：用户上下文与执行上下文
pub mod execution_context;
pub mod user_context;

pub use execution_context::{ExecutionContext, SystemExecutionContext};
pub use user_context::{FixedUserContext, UserContext};
