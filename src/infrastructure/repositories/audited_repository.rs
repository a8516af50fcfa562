// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

use crate::domain::context::{ExecutionContext, UserContext};
use crate::domain::models::audit::{AuditStamp, Auditable};
use crate::domain::repositories::{
    generic_repository::{AnyTransaction, Filter, GenericRepository, Record},
    require_entity, RepositoryError,
};
use crate::sql::SqlValue;

/// 通用仓库的审计装饰器
///
/// 新增时写入创建时间与创建者，更新时写入更新时间与更新者，其余操作直接委托
pub struct AuditedRepository<R, E> {
    inner: R,
    user_context: Arc<dyn UserContext>,
    execution_context: Arc<dyn ExecutionContext>,
    _entity: PhantomData<fn() -> E>,
}

impl<R, E> AuditedRepository<R, E>
where
    R: GenericRepository<E>,
    E: Record + Auditable,
{
    pub fn new(
        inner: R,
        user_context: Arc<dyn UserContext>,
        execution_context: Arc<dyn ExecutionContext>,
    ) -> Self {
        Self {
            inner,
            user_context,
            execution_context,
            _entity: PhantomData,
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    fn stamp(&self) -> AuditStamp {
        AuditStamp::capture(self.user_context.as_ref(), self.execution_context.as_ref())
    }
}

#[async_trait]
impl<R, E> GenericRepository<E> for AuditedRepository<R, E>
where
    R: GenericRepository<E>,
    E: Record + Auditable,
{
    async fn add<'e, T>(
        &self,
        entity: T,
        tx: Option<&mut AnyTransaction>,
    ) -> Result<Option<SqlValue>, RepositoryError>
    where
        T: Into<Option<&'e mut E>> + Send,
    {
        let entity = require_entity(entity.into())?;
        let stamp = self.stamp();
        debug!(table = E::TABLE, user = %stamp.by, "Stamping created audit fields");
        stamp.apply_created(entity);
        self.inner.add(entity, tx).await
    }

    async fn delete<'e, T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<&'e E>> + Send,
    {
        self.inner.delete(entity).await
    }

    async fn get<I>(&self, id: I) -> Result<Option<E>, RepositoryError>
    where
        I: Into<SqlValue> + Send,
    {
        self.inner.get(id).await
    }

    async fn get_list(&self, filter: &Filter) -> Result<Vec<E>, RepositoryError> {
        self.inner.get_list(filter).await
    }

    async fn get_list_where(
        &self,
        conditions: &str,
        params: &[SqlValue],
    ) -> Result<Vec<E>, RepositoryError> {
        self.inner.get_list_where(conditions, params).await
    }

    async fn get_list_paged(
        &self,
        page_number: u32,
        rows_per_page: u32,
        conditions: &str,
        order_by: &str,
        params: &[SqlValue],
    ) -> Result<Vec<E>, RepositoryError> {
        self.inner
            .get_list_paged(page_number, rows_per_page, conditions, order_by, params)
            .await
    }

    async fn record_count(
        &self,
        conditions: &str,
        params: &[SqlValue],
    ) -> Result<i64, RepositoryError> {
        self.inner.record_count(conditions, params).await
    }

    async fn record_count_by(&self, filter: &Filter) -> Result<i64, RepositoryError> {
        self.inner.record_count_by(filter).await
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
        let stamp = self.stamp();
        debug!(table = E::TABLE, user = %stamp.by, "Stamping updated audit fields");
        stamp.apply_updated(entity);
        self.inner.update(entity, tx).await
    }
}
