// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{push_section, SqlStatement, SqlStatementError};

/// SELECT 语句
///
/// 每个子句方法都会把片段追加到对应的有序集合并返回自身，
/// 渲染时各段落仅在对应集合非空时出现：
///
/// ```text
/// SELECT [DISTINCT] [TOP ...] <columns | *>
/// FROM <tables>
/// JOIN ... / LEFT JOIN ... / ON ... / AND ...
/// WHERE <f1 AND f2 ...>
/// GROUP BY <c1,c2>
/// HAVING ...
/// ORDER BY <o1,o2>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlSelectStatement {
    distinct: bool,
    top: Option<String>,
    columns: Vec<String>,
    tables: Vec<String>,
    joins: Vec<String>,
    left_joins: Vec<String>,
    on_clauses: Vec<String>,
    and_clauses: Vec<String>,
    filters: Vec<String>,
    group_by: Vec<String>,
    having: Vec<String>,
    order_by: Vec<String>,
}

impl SqlSelectStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 DISTINCT
    pub fn distinct(&mut self, value: bool) -> &mut Self {
        self.distinct = value;
        self
    }

    /// 设置 TOP 子句，例如 `TOP 10`，重复调用以最后一次为准
    pub fn select_top(&mut self, clause: impl Into<String>) -> &mut Self {
        self.top = Some(clause.into());
        self
    }

    /// 追加选择字段
    pub fn select(&mut self, columns: impl Into<String>) -> &mut Self {
        self.columns.push(columns.into());
        self
    }

    /// 追加数据表
    pub fn from(&mut self, tables: impl Into<String>) -> &mut Self {
        self.tables.push(tables.into());
        self
    }

    /// 追加 JOIN 子句
    pub fn join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.joins.push(clause.into());
        self
    }

    /// 追加 LEFT JOIN 子句
    pub fn left_join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.left_joins.push(clause.into());
        self
    }

    /// 追加 ON 子句
    pub fn on(&mut self, clause: impl Into<String>) -> &mut Self {
        self.on_clauses.push(clause.into());
        self
    }

    /// 追加紧随 ON 之后的 AND 子句
    pub fn and(&mut self, clause: impl Into<String>) -> &mut Self {
        self.and_clauses.push(clause.into());
        self
    }

    /// 追加 WHERE 条件，渲染时以 AND 连接
    pub fn filter(&mut self, clause: impl Into<String>) -> &mut Self {
        self.filters.push(clause.into());
        self
    }

    /// 追加 GROUP BY 字段
    pub fn group_by(&mut self, columns: impl Into<String>) -> &mut Self {
        self.group_by.push(columns.into());
        self
    }

    /// 追加 HAVING 语句
    pub fn having(&mut self, statement: impl Into<String>) -> &mut Self {
        self.having.push(statement.into());
        self
    }

    /// 追加 ORDER BY 子句
    pub fn order_by(&mut self, clause: impl Into<String>) -> &mut Self {
        self.order_by.push(clause.into());
        self
    }

    fn render(&self) -> String {
        let mut head = String::from("SELECT");
        if self.distinct {
            head.push_str(" DISTINCT");
        }
        if let Some(top) = self.top.as_deref().filter(|t| !t.is_empty()) {
            head.push(' ');
            head.push_str(top);
        }
        head.push(' ');
        if self.columns.is_empty() {
            head.push('*');
        } else {
            head.push_str(&self.columns.join(","));
        }

        let mut sql = head;
        if !self.tables.is_empty() {
            push_section(&mut sql, "FROM", &self.tables.join(", "));
        }
        for join in &self.joins {
            push_section(&mut sql, "JOIN", join);
        }
        for join in &self.left_joins {
            push_section(&mut sql, "LEFT JOIN", join);
        }
        if !self.on_clauses.is_empty() {
            push_section(&mut sql, "ON", &self.on_clauses.join("\n"));
        }
        for clause in &self.and_clauses {
            push_section(&mut sql, "AND", clause);
        }
        if !self.filters.is_empty() {
            push_section(&mut sql, "WHERE", &self.filters.join(" AND "));
        }
        if !self.group_by.is_empty() {
            push_section(&mut sql, "GROUP BY", &self.group_by.join(","));
        }
        if !self.having.is_empty() {
            push_section(&mut sql, "HAVING", &self.having.join("\n"));
        }
        if !self.order_by.is_empty() {
            push_section(&mut sql, "ORDER BY", &self.order_by.join(","));
        }
        sql
    }
}

impl SqlStatement for SqlSelectStatement {
    fn content(&self) -> Result<String, SqlStatementError> {
        Ok(self.render())
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
