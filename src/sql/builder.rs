// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::{SqlStatement, SqlStatementError};

/// 构建 SQL 文字的能力
pub trait BuildQuery {
    fn build(&self) -> Result<String, SqlStatementError>;
}

/// 通用查询构建器
///
/// 持有一个默认构造的语句实例。具体的领域查询构建器将其作为私有字段，
/// 在自身的构造函数或方法中通过 [`QueryBuilder::statement_mut`] 预先填入子句，
/// 对外只暴露更窄的流式接口与 [`BuildQuery::build`]。
///
/// ```
/// use dalkit::sql::{BuildQuery, QueryBuilder, SqlSelectStatement};
///
/// struct ActiveUsers(QueryBuilder<SqlSelectStatement>);
///
/// impl ActiveUsers {
///     fn new() -> Self {
///         let mut builder: QueryBuilder<SqlSelectStatement> = QueryBuilder::new();
///         builder.statement_mut().from("Users").filter("Active = 1");
///         Self(builder)
///     }
///
///     fn older_than(mut self, age: u32) -> Self {
///         self.0.statement_mut().filter(format!("Age > {}", age));
///         self
///     }
/// }
///
/// impl BuildQuery for ActiveUsers {
///     fn build(&self) -> Result<String, dalkit::sql::SqlStatementError> {
///         self.0.build()
///     }
/// }
///
/// let sql = ActiveUsers::new().older_than(18).build().unwrap();
/// assert!(sql.ends_with("WHERE Active = 1 AND Age > 18"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder<S> {
    statement: S,
}

impl<S: SqlStatement + Default> QueryBuilder<S> {
    pub fn new() -> Self {
        Self {
            statement: S::default(),
        }
    }

    /// 获取底层语句以预先填入子句
    pub fn statement_mut(&mut self) -> &mut S {
        &mut self.statement
    }

    /// 只读存取底层语句
    pub fn statement(&self) -> &S {
        &self.statement
    }
}

impl<S: SqlStatement> BuildQuery for QueryBuilder<S> {
    fn build(&self) -> Result<String, SqlStatementError> {
        self.statement.content()
    }
}
