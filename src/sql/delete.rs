// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{push_section, SqlStatement, SqlStatementError};

/// DELETE 语句
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlDeleteStatement {
    table: String,
    filters: Vec<String>,
}

impl SqlDeleteStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定删除的数据表
    pub fn from_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    /// 追加 WHERE 条件
    pub fn filter(&mut self, condition: impl Into<String>) -> &mut Self {
        self.filters.push(condition.into());
        self
    }
}

impl SqlStatement for SqlDeleteStatement {
    fn content(&self) -> Result<String, SqlStatementError> {
        if self.table.is_empty() {
            return Err(SqlStatementError::TableNotSpecified);
        }

        let mut sql = String::new();
        push_section(&mut sql, "DELETE FROM", &self.table);
        if !self.filters.is_empty() {
            push_section(&mut sql, "WHERE", &self.filters.join(" AND "));
        }
        Ok(sql)
    }

    fn clear(&mut self) {
        self.table.clear();
        self.filters.clear();
    }
}
