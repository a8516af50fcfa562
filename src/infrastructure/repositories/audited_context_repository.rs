// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::sea_query::IntoCondition;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::debug;

use crate::domain::context::{ExecutionContext, UserContext};
use crate::domain::models::audit::{AuditStamp, Auditable};
use crate::domain::repositories::{
    context_repository::{ContextRepository, Include, Loaded, ModelOf},
    require_entity, RepositoryError,
};

/// 上下文仓库的审计装饰器
pub struct AuditedContextRepository<R> {
    inner: R,
    user_context: Arc<dyn UserContext>,
    execution_context: Arc<dyn ExecutionContext>,
}

impl<R> AuditedContextRepository<R>
where
    R: ContextRepository,
    ModelOf<R::Entity>: Auditable,
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
impl<R> ContextRepository for AuditedContextRepository<R>
where
    R: ContextRepository,
    ModelOf<R::Entity>: Auditable,
{
    type Entity = R::Entity;

    fn db_context(&self) -> &DatabaseConnection {
        self.inner.db_context()
    }

    async fn create<T>(&self, entity: T) -> Result<ModelOf<R::Entity>, RepositoryError>
    where
        T: Into<Option<ModelOf<R::Entity>>> + Send,
    {
        let mut model = require_entity(entity.into())?;
        let stamp = self.stamp();
        debug!(user = %stamp.by, "Stamping created audit fields");
        stamp.apply_created(&mut model);
        self.inner.create(model).await
    }

    async fn update<T>(&self, entity: T) -> Result<ModelOf<R::Entity>, RepositoryError>
    where
        T: Into<Option<ModelOf<R::Entity>>> + Send,
    {
        let mut model = require_entity(entity.into())?;
        let stamp = self.stamp();
        debug!(user = %stamp.by, "Stamping updated audit fields");
        stamp.apply_updated(&mut model);
        self.inner.update(model).await
    }

    async fn delete<T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<ModelOf<R::Entity>>> + Send,
    {
        self.inner.delete(entity).await
    }

    async fn get<F>(&self, filter: F) -> Result<Option<ModelOf<R::Entity>>, RepositoryError>
    where
        F: IntoCondition + Send,
    {
        self.inner.get(filter).await
    }

    async fn get_include<F>(
        &self,
        filter: F,
        includes: &[Include<R::Entity>],
    ) -> Result<Option<Loaded<ModelOf<R::Entity>>>, RepositoryError>
    where
        F: IntoCondition + Send,
    {
        self.inner.get_include(filter, includes).await
    }

    async fn get_all_include(
        &self,
        includes: &[Include<R::Entity>],
    ) -> Result<Vec<Loaded<ModelOf<R::Entity>>>, RepositoryError> {
        self.inner.get_all_include(includes).await
    }

    async fn get_all(&self) -> Result<Vec<ModelOf<R::Entity>>, RepositoryError> {
        self.inner.get_all().await
    }
}
