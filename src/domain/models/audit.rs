// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::context::{ExecutionContext, UserContext};
use chrono::{DateTime, Utc};

/// 可审计实体
///
/// 实现此特质的实体由审计仓库在新增与更新时自动填入操作者与时间，
/// 调用方自行设置的值会被覆盖。
pub trait Auditable {
    /// 设置创建时间
    fn set_created_at(&mut self, at: DateTime<Utc>);
    /// 设置创建者
    fn set_created_by(&mut self, user_id: String);
    /// 设置更新时间
    fn set_updated_at(&mut self, at: DateTime<Utc>);
    /// 设置更新者
    fn set_updated_by(&mut self, user_id: String);
}

/// 一次审计盖章：当前时间与当前操作者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditStamp {
    pub at: DateTime<Utc>,
    pub by: String,
}

impl AuditStamp {
    /// 从注入的上下文获取当前时间与用户
    pub fn capture(user_context: &dyn UserContext, execution_context: &dyn ExecutionContext) -> Self {
        Self {
            at: execution_context.now(),
            by: user_context.current_user().user_id,
        }
    }

    /// 写入创建字段
    pub fn apply_created<A: Auditable + ?Sized>(&self, entity: &mut A) {
        entity.set_created_at(self.at);
        entity.set_created_by(self.by.clone());
    }

    /// 写入更新字段
    pub fn apply_updated<A: Auditable + ?Sized>(&self, entity: &mut A) {
        entity.set_updated_at(self.at);
        entity.set_updated_by(self.by.clone());
    }
}
