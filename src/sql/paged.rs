// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{SqlSelectStatement, SqlStatement, SqlStatementError};

/// 分页查询中行号字段的名称
pub const PAGED_NUMBER_COLUMN: &str = "PagedNumber";

/// 分页 SELECT 语句
///
/// 渲染时组合两层 SELECT：
///
/// 1. 内层以 `ROW_NUMBER() OVER (ORDER BY ...)` 产生 `PagedNumber`，
///    并带上原本的字段、JOIN 与 WHERE 条件；
/// 2. 外层从内层子查询中按行号区间取出一页，或计算总笔数。
///
/// 渲染前必须指定 ORDER BY 与数据表。页码从 1 开始；
/// 页码与每页笔数须同时设置才会套用行号区间。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SqlPagedStatement {
    table: String,
    columns: Vec<String>,
    joins: Vec<String>,
    left_joins: Vec<String>,
    on_clauses: Vec<String>,
    and_clauses: Vec<String>,
    filters: Vec<String>,
    order_by: Vec<String>,
    count: bool,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl SqlPagedStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// 改为计算符合条件的总笔数
    pub fn count(&mut self) -> &mut Self {
        self.count = true;
        self
    }

    /// 指定来源数据表，重复调用以最后一次为准
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = table.into();
        self
    }

    pub fn select(&mut self, columns: impl Into<String>) -> &mut Self {
        self.columns.push(columns.into());
        self
    }

    pub fn join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.joins.push(clause.into());
        self
    }

    pub fn left_join(&mut self, clause: impl Into<String>) -> &mut Self {
        self.left_joins.push(clause.into());
        self
    }

    pub fn on(&mut self, clause: impl Into<String>) -> &mut Self {
        self.on_clauses.push(clause.into());
        self
    }

    pub fn and(&mut self, clause: impl Into<String>) -> &mut Self {
        self.and_clauses.push(clause.into());
        self
    }

    pub fn filter(&mut self, clause: impl Into<String>) -> &mut Self {
        self.filters.push(clause.into());
        self
    }

    /// 追加排序子句，同时作为行号的排序键
    pub fn order_by(&mut self, clause: impl Into<String>) -> &mut Self {
        self.order_by.push(clause.into());
        self
    }

    /// 设置页码（从 1 开始）
    pub fn page(&mut self, value: u32) -> &mut Self {
        self.page = Some(value);
        self
    }

    /// 设置每页笔数
    pub fn page_size(&mut self, value: u32) -> &mut Self {
        self.page_size = Some(value);
        self
    }

    fn check(&self) -> Result<(), SqlStatementError> {
        if self.order_by.is_empty() {
            return Err(SqlStatementError::OrderByNotSpecified);
        }
        if self.table.is_empty() {
            return Err(SqlStatementError::TableNotSpecified);
        }
        Ok(())
    }

    fn inner_statement(&self) -> SqlSelectStatement {
        let mut inner = SqlSelectStatement::new();
        inner.select(format!(
            "ROW_NUMBER() OVER (ORDER BY {}) AS {}",
            self.order_by.join(","),
            PAGED_NUMBER_COLUMN
        ));
        if self.columns.is_empty() {
            inner.select(format!("{}.*", self.table));
        } else {
            for column in &self.columns {
                inner.select(column.as_str());
            }
        }
        for join in &self.joins {
            inner.join(join.as_str());
        }
        for join in &self.left_joins {
            inner.left_join(join.as_str());
        }
        for clause in &self.on_clauses {
            inner.on(clause.as_str());
        }
        for clause in &self.and_clauses {
            inner.and(clause.as_str());
        }
        inner.from(self.table.as_str());
        // Always-true head of the AND chain.
        inner.filter("1=1");
        for clause in &self.filters {
            inner.filter(clause.as_str());
        }
        inner
    }
}

impl SqlStatement for SqlPagedStatement {
    fn content(&self) -> Result<String, SqlStatementError> {
        self.check()?;

        let inner = self.inner_statement().content()?;

        let mut outer = SqlSelectStatement::new();
        outer.from(format!("({}) t", inner));
        if self.count {
            outer.select("COUNT(1)");
        }
        if let (Some(page), Some(size)) = (self.page, self.page_size) {
            outer.filter(format!(
                "{} BETWEEN (({}-1)*{}+1) AND ({}*{})",
                PAGED_NUMBER_COLUMN, page, size, page, size
            ));
        }
        outer.content()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
