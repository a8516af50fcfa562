// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{push_section, SqlStatement, SqlStatementError, SqlValue};

/// UPDATE 语句
///
/// 渲染格式为 `UPDATE <table>` / `SET <a1, a2>` / `[WHERE ...]`。
/// 未指定数据表或没有任何 SET 字段时，渲染失败。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlUpdateStatement {
    table: String,
    assignments: Vec<String>,
    filters: Vec<String>,
}

impl SqlUpdateStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定更新的数据表
    pub fn update_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// 设置字段值
    ///
    /// 文字值以单引号包裹，其余类型使用默认的文字表示
    pub fn set(&mut self, column: &str, value: impl Into<SqlValue>) -> &mut Self {
        let value = value.into();
        self.assignments
            .push(format!("{} = {}", column, value.to_literal()));
        self
    }

    /// 以原始表达式设置字段，例如绑定占位符 `?` 或 `Counter + 1`
    pub fn set_expr(&mut self, column: &str, expression: &str) -> &mut Self {
        self.assignments.push(format!("{} = {}", column, expression));
        self
    }

    /// 追加 WHERE 条件
    pub fn filter(&mut self, condition: impl Into<String>) -> &mut Self {
        self.filters.push(condition.into());
        self
    }
}

impl SqlStatement for SqlUpdateStatement {
    fn content(&self) -> Result<String, SqlStatementError> {
        if self.table.is_empty() {
            return Err(SqlStatementError::TableNotSpecified);
        }
        if self.assignments.is_empty() {
            return Err(SqlStatementError::NoColumnSpecified);
        }

        let mut sql = String::new();
        push_section(&mut sql, "UPDATE", &self.table);
        push_section(&mut sql, "SET", &self.assignments.join(", "));
        if !self.filters.is_empty() {
            push_section(&mut sql, "WHERE", &self.filters.join(" AND "));
        }
        Ok(sql)
    }

    fn clear(&mut self) {
        self.table.clear();
        self.assignments.clear();
        self.filters.clear();
    }
}
