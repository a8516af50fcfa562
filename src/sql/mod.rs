// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! SQL 语句构建模块
//!
//! 以流式接口累积子句（字段、数据表、JOIN、WHERE、ORDER BY 等），
//! 在需要时渲染为 SQL 文字。各子句均为原始 SQL 片段，本层不做参数化或转义，
//! 调用方需自行保证片段内容不存在注入风险。
//!
//! 各类语句（SELECT / UPDATE / DELETE / 分页）互相独立，
//! 只共享 [`SqlStatement`] 所定义的“渲染 + 清除”能力。

pub mod builder;
pub mod delete;
pub mod error;
pub mod paged;
pub mod select;
pub mod update;
pub mod value;

pub use builder::{BuildQuery, QueryBuilder};
pub use delete::SqlDeleteStatement;
pub use error::SqlStatementError;
pub use paged::SqlPagedStatement;
pub use select::SqlSelectStatement;
pub use update::SqlUpdateStatement;
pub use value::SqlValue;

/// SQL 语句的最小能力契约
pub trait SqlStatement {
    /// 渲染为 SQL 文字
    ///
    /// 渲染不改变语句状态，可重复调用
    fn content(&self) -> Result<String, SqlStatementError>;

    /// 重置全部子句，以便重复使用
    fn clear(&mut self);
}

/// 以 `keyword` 开头追加一行语句
pub(crate) fn push_section(sql: &mut String, keyword: &str, body: &str) {
    if !sql.is_empty() {
        sql.push('\n');
    }
    sql.push_str(keyword);
    sql.push(' ');
    sql.push_str(body);
}
