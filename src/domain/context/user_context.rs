// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::UserInfo;

/// 用户上下文
///
/// 提供当前操作者身份，由外部（例如请求处理层）注入
pub trait UserContext: Send + Sync {
    fn current_user(&self) -> UserInfo;
}

/// 固定用户上下文
///
/// 适用于后台作业等没有请求用户的场景
#[derive(Debug, Clone)]
pub struct FixedUserContext {
    user: UserInfo,
}

impl FixedUserContext {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user: UserInfo::new(user_id),
        }
    }
}

impl UserContext for FixedUserContext {
    fn current_user(&self) -> UserInfo {
        self.user.clone()
    }
}
