// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 审计（audit）：可审计实体特质与审计盖章
/// - 用户（user）：当前操作者信息
pub mod audit;
pub mod user;

pub use audit::{AuditStamp, Auditable};
pub use user::UserInfo;
