// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::sql::SqlValue;
use async_trait::async_trait;
use sqlx::any::AnyRow;

/// 显式传入写入操作的事务
pub type AnyTransaction = sqlx::Transaction<'static, sqlx::Any>;

/// 微型 ORM 实体的映射描述
///
/// 描述数据表名称、主键字段、其余字段及其值的顺序，以及如何从查询结果还原实体
pub trait Record: Sized + Send + Sync + Unpin + 'static {
    /// 数据表名称
    const TABLE: &'static str;
    /// 主键字段
    const KEY: &'static str;
    /// 主键是否由数据库生成
    const KEY_GENERATED: bool = true;

    /// 非主键字段，顺序需与 [`Record::values`] 一致
    fn columns() -> &'static [&'static str];

    /// 主键值
    fn key(&self) -> SqlValue;

    /// 非主键字段的值
    fn values(&self) -> Vec<SqlValue>;

    /// 从查询结果还原实体
    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error>;
}

/// 等值过滤条件
///
/// 以插入顺序保存 `字段 = 值` 对，渲染时以 AND 连接；值为 NULL 时渲染为 `IS NULL`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pairs: Vec<(String, SqlValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加等值条件
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        self.pairs.push((column.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.pairs.iter().map(|(column, value)| (column.as_str(), value))
    }
}

/// 通用仓库特质（微型 ORM）
///
/// 所有操作委托给连接工厂获取的连接。`add` 与 `update` 接受显式事务，
/// 传入时在该事务中执行，否则直接在连接池上执行。
#[async_trait]
pub trait GenericRepository<E: Record>: Send + Sync {
    /// 新增实体，返回生成的主键（或调用方指定的主键）
    async fn add<'e, T>(
        &self,
        entity: T,
        tx: Option<&mut AnyTransaction>,
    ) -> Result<Option<SqlValue>, RepositoryError>
    where
        T: Into<Option<&'e mut E>> + Send;

    /// 删除实体，返回受影响笔数
    async fn delete<'e, T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<&'e E>> + Send;

    /// 按主键获取实体
    async fn get<I>(&self, id: I) -> Result<Option<E>, RepositoryError>
    where
        I: Into<SqlValue> + Send;

    /// 按等值条件获取实体列表
    async fn get_list(&self, filter: &Filter) -> Result<Vec<E>, RepositoryError>;

    /// 按条件文字与参数获取实体列表，条件为空时返回全部
    async fn get_list_where(
        &self,
        conditions: &str,
        params: &[SqlValue],
    ) -> Result<Vec<E>, RepositoryError>;

    /// 分页获取实体列表，页码从 1 开始，排序为空时按主键排序
    async fn get_list_paged(
        &self,
        page_number: u32,
        rows_per_page: u32,
        conditions: &str,
        order_by: &str,
        params: &[SqlValue],
    ) -> Result<Vec<E>, RepositoryError>;

    /// 按条件文字与参数计算笔数
    async fn record_count(&self, conditions: &str, params: &[SqlValue])
        -> Result<i64, RepositoryError>;

    /// 按等值条件计算笔数
    async fn record_count_by(&self, filter: &Filter) -> Result<i64, RepositoryError>;

    /// 更新实体，返回受影响笔数
    async fn update<'e, T>(
        &self,
        entity: T,
        tx: Option<&mut AnyTransaction>,
    ) -> Result<u64, RepositoryError>
    where
        T: Into<Option<&'e mut E>> + Send;
}
