// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sqlx::any::{AnyArguments, AnyQueryResult, AnyRow};
use sqlx::AnyPool;
use sqlx::query::Query;
use sqlx::{Any, Row};
use std::marker::PhantomData;
use tracing::debug;

use crate::domain::repositories::{
    generic_repository::{AnyTransaction, Filter, GenericRepository, Record},
    require_entity, RepositoryError,
};
use crate::infrastructure::database::{ConnectionFactory, Dialect};
use crate::sql::{
    BuildQuery, QueryBuilder, SqlDeleteStatement, SqlPagedStatement, SqlSelectStatement,
    SqlStatement, SqlUpdateStatement, SqlValue,
};

type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

/// 基于 sqlx 的通用仓库实现
///
/// 持有从连接工厂获取的连接池，所有 SQL 由语句构建器渲染，参数以绑定方式传递
pub struct SqlxRepository<E: Record> {
    pool: AnyPool,
    dialect: Dialect,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Record> SqlxRepository<E> {
    pub fn new<F: ConnectionFactory + ?Sized>(factory: &F) -> Self {
        Self {
            pool: factory.connection().clone(),
            dialect: factory.dialect(),
            _entity: PhantomData,
        }
    }

    /// 获取底层连接池
    pub fn connection(&self) -> &AnyPool {
        &self.pool
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// 渲染等值过滤条件，占位符从 `first_index` 开始编号
    fn filter_clauses(&self, filter: &Filter, first_index: usize) -> (Vec<String>, Vec<SqlValue>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();
        for (column, value) in filter.iter() {
            if *value == SqlValue::Null {
                clauses.push(format!("{} IS NULL", column));
            } else {
                params.push(value.clone());
                clauses.push(format!(
                    "{} = {}",
                    column,
                    self.dialect.placeholder(first_index + params.len() - 1)
                ));
            }
        }
        (clauses, params)
    }

    fn key_clause(&self) -> String {
        format!("{} = {}", E::KEY, self.dialect.placeholder(1))
    }

    async fn fetch(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<E>, RepositoryError> {
        debug!(table = E::TABLE, sql, "Fetching rows");
        let rows = bind_all(sqlx::query(sql), params).fetch_all(&self.pool).await?;
        rows.iter()
            .map(E::from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RepositoryError::from)
    }

    async fn count(&self, sql: &str, params: &[SqlValue]) -> Result<i64, RepositoryError> {
        debug!(table = E::TABLE, sql, "Counting rows");
        let row = bind_all(sqlx::query(sql), params).fetch_one(&self.pool).await?;
        Ok(row.try_get::<i64, _>(0)?)
    }

    async fn execute(
        &self,
        sql: &str,
        params: &[SqlValue],
        tx: Option<&mut AnyTransaction>,
    ) -> Result<AnyQueryResult, RepositoryError> {
        debug!(table = E::TABLE, sql, in_transaction = tx.is_some(), "Executing statement");
        let query = bind_all(sqlx::query(sql), params);
        let result = match tx {
            Some(tx) => query.execute(&mut **tx).await?,
            None => query.execute(&self.pool).await?,
        };
        Ok(result)
    }

    async fn fetch_key(
        &self,
        sql: &str,
        params: &[SqlValue],
        tx: Option<&mut AnyTransaction>,
    ) -> Result<AnyRow, RepositoryError> {
        debug!(table = E::TABLE, sql, in_transaction = tx.is_some(), "Executing insert");
        let query = bind_all(sqlx::query(sql), params);
        let row = match tx {
            Some(tx) => query.fetch_one(&mut **tx).await?,
            None => query.fetch_one(&self.pool).await?,
        };
        Ok(row)
    }
}

impl<E: Record> Drop for SqlxRepository<E> {
    fn drop(&mut self) {
        debug!(table = E::TABLE, "Releasing repository connection");
    }
}

fn bind_all<'q>(mut query: AnyQuery<'q>, params: &[SqlValue]) -> AnyQuery<'q> {
    for value in params {
        query = match value {
            SqlValue::Null => query.bind(None::<String>),
            SqlValue::Bool(v) => query.bind(*v),
            SqlValue::Int(v) => query.bind(*v),
            SqlValue::Float(v) => query.bind(*v),
            SqlValue::Text(v) => query.bind(v.clone()),
        };
    }
    query
}

fn select_statement(table: &str) -> QueryBuilder<SqlSelectStatement> {
    let mut builder: QueryBuilder<SqlSelectStatement> = QueryBuilder::new();
    builder.statement_mut().from(table);
    builder
}

fn count_statement(table: &str) -> QueryBuilder<SqlSelectStatement> {
    let mut builder = select_statement(table);
    builder.statement_mut().select("COUNT(1)");
    builder
}

/// 规范化条件文字：允许以 `WHERE` 关键字开头（不区分大小写），空白条件视为无过滤
fn where_clause(conditions: &str) -> Option<&str> {
    let trimmed = conditions.trim();
    let body = match trimmed.get(..5) {
        Some(head)
            if head.eq_ignore_ascii_case("where")
                && trimmed[5..]
                    .chars()
                    .next()
                    .map_or(true, |c| c.is_whitespace() || c == '(') =>
        {
            &trimmed[5..]
        }
        _ => trimmed,
    };
    let body = body.trim();
    (!body.is_empty()).then_some(body)
}

#[async_trait]
impl<E: Record> GenericRepository<E> for SqlxRepository<E> {
    async fn add<'e, T>(
        &self,
        entity: T,
        tx: Option<&mut AnyTransaction>,
    ) -> Result<Option<SqlValue>, RepositoryError>
    where
        T: Into<Option<&'e mut E>> + Send,
    {
        let entity = require_entity(entity.into())?;

        let mut columns: Vec<&str> = Vec::new();
        let mut params = Vec::new();
        if !E::KEY_GENERATED {
            columns.push(E::KEY);
            params.push(entity.key());
        }
        columns.extend_from_slice(E::columns());
        params.extend(entity.values());

        let placeholders = (1..=params.len())
            .map(|index| self.dialect.placeholder(index))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            E::TABLE,
            columns.join(", "),
            placeholders
        );

        if !E::KEY_GENERATED {
            self.execute(&sql, &params, tx).await?;
            return Ok(Some(entity.key()));
        }

        // Postgres does not report the last insert id through the Any driver.
        if self.dialect == Dialect::Postgres {
            sql.push_str(&format!(" RETURNING {}", E::KEY));
            let row = self.fetch_key(&sql, &params, tx).await?;
            return Ok(Some(SqlValue::Int(row.try_get::<i64, _>(0)?)));
        }

        let result = self.execute(&sql, &params, tx).await?;
        Ok(result.last_insert_id().map(SqlValue::Int))
    }

    async fn delete<'e, T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<&'e E>> + Send,
    {
        let entity = require_entity(entity.into())?;

        let mut builder: QueryBuilder<SqlDeleteStatement> = QueryBuilder::new();
        builder
            .statement_mut()
            .from_table(E::TABLE)
            .filter(self.key_clause());
        let sql = builder.build()?;

        let result = self.execute(&sql, &[entity.key()], None).await?;
        Ok(result.rows_affected())
    }

    async fn get<I>(&self, id: I) -> Result<Option<E>, RepositoryError>
    where
        I: Into<SqlValue> + Send,
    {
        let mut builder = select_statement(E::TABLE);
        builder.statement_mut().filter(self.key_clause());
        let sql = builder.build()?;

        Ok(self.fetch(&sql, &[id.into()]).await?.into_iter().next())
    }

    async fn get_list(&self, filter: &Filter) -> Result<Vec<E>, RepositoryError> {
        let (clauses, params) = self.filter_clauses(filter, 1);

        let mut builder = select_statement(E::TABLE);
        for clause in clauses {
            builder.statement_mut().filter(clause);
        }
        let sql = builder.build()?;

        self.fetch(&sql, &params).await
    }

    async fn get_list_where(
        &self,
        conditions: &str,
        params: &[SqlValue],
    ) -> Result<Vec<E>, RepositoryError> {
        let mut builder = select_statement(E::TABLE);
        if let Some(clause) = where_clause(conditions) {
            builder.statement_mut().filter(clause);
        }
        let sql = builder.build()?;

        self.fetch(&sql, params).await
    }

    async fn get_list_paged(
        &self,
        page_number: u32,
        rows_per_page: u32,
        conditions: &str,
        order_by: &str,
        params: &[SqlValue],
    ) -> Result<Vec<E>, RepositoryError> {
        let mut builder: QueryBuilder<SqlPagedStatement> = QueryBuilder::new();
        let statement = builder.statement_mut();
        statement
            .from(E::TABLE)
            .order_by(if order_by.trim().is_empty() { E::KEY } else { order_by })
            .page(page_number)
            .page_size(rows_per_page);
        if let Some(clause) = where_clause(conditions) {
            statement.filter(clause);
        }
        let sql = builder.build()?;

        self.fetch(&sql, params).await
    }

    async fn record_count(
        &self,
        conditions: &str,
        params: &[SqlValue],
    ) -> Result<i64, RepositoryError> {
        let mut builder = count_statement(E::TABLE);
        if let Some(clause) = where_clause(conditions) {
            builder.statement_mut().filter(clause);
        }
        let sql = builder.build()?;

        self.count(&sql, params).await
    }

    async fn record_count_by(&self, filter: &Filter) -> Result<i64, RepositoryError> {
        let (clauses, params) = self.filter_clauses(filter, 1);

        let mut builder = count_statement(E::TABLE);
        for clause in clauses {
            builder.statement_mut().filter(clause);
        }
        let sql = builder.build()?;

        self.count(&sql, &params).await
    }

    async fn update<'e, T>(
        &self,
        entity: T,
        tx: Option<&mut AnyTransaction>,
    ) -> Result<u64, RepositoryError>
    where
        T: Into<Option<&'e mut E>> + Send,
    {
        let entity = require_entity(entity.into())?;

        let mut statement = SqlUpdateStatement::new();
        statement.update_table(E::TABLE);
        let columns = E::columns();
        for (index, column) in columns.iter().enumerate() {
            statement.set_expr(column, &self.dialect.placeholder(index + 1));
        }
        statement.filter(format!(
            "{} = {}",
            E::KEY,
            self.dialect.placeholder(columns.len() + 1)
        ));
        let sql = statement.content()?;

        let mut params = entity.values();
        params.push(entity.key());

        let result = self.execute(&sql, &params, tx).await?;
        Ok(result.rows_affected())
    }
}
