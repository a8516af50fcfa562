// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::sea_query::IntoCondition;
use sea_orm::DatabaseConnection;
use tokio::runtime::Handle;

use crate::domain::repositories::{
    context_repository::{ContextRepository, Include, Loaded, ModelOf},
    RepositoryError,
};

/// 上下文仓库的同步版本
///
/// 在给定的 tokio 执行环境上驱动异步操作。不可在异步上下文中调用，
/// 否则 `Handle::block_on` 会 panic
pub struct BlockingRepository<R> {
    inner: R,
    handle: Handle,
}

impl<R: ContextRepository> BlockingRepository<R> {
    pub fn new(inner: R, handle: Handle) -> Self {
        Self { inner, handle }
    }

    /// 以当前执行环境创建，无执行环境时返回错误
    pub fn from_current(inner: R) -> Result<Self, tokio::runtime::TryCurrentError> {
        Ok(Self::new(inner, Handle::try_current()?))
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn db_context(&self) -> &DatabaseConnection {
        self.inner.db_context()
    }

    pub fn create<T>(&self, entity: T) -> Result<ModelOf<R::Entity>, RepositoryError>
    where
        T: Into<Option<ModelOf<R::Entity>>> + Send,
    {
        self.handle.block_on(self.inner.create(entity))
    }

    pub fn update<T>(&self, entity: T) -> Result<ModelOf<R::Entity>, RepositoryError>
    where
        T: Into<Option<ModelOf<R::Entity>>> + Send,
    {
        self.handle.block_on(self.inner.update(entity))
    }

    pub fn delete<T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<ModelOf<R::Entity>>> + Send,
    {
        self.handle.block_on(self.inner.delete(entity))
    }

    pub fn get<F>(&self, filter: F) -> Result<Option<ModelOf<R::Entity>>, RepositoryError>
    where
        F: IntoCondition + Send,
    {
        self.handle.block_on(self.inner.get(filter))
    }

    pub fn get_include<F>(
        &self,
        filter: F,
        includes: &[Include<R::Entity>],
    ) -> Result<Option<Loaded<ModelOf<R::Entity>>>, RepositoryError>
    where
        F: IntoCondition + Send,
    {
        self.handle.block_on(self.inner.get_include(filter, includes))
    }

    pub fn get_all_include(
        &self,
        includes: &[Include<R::Entity>],
    ) -> Result<Vec<Loaded<ModelOf<R::Entity>>>, RepositoryError> {
        self.handle.block_on(self.inner.get_all_include(includes))
    }

    pub fn get_all(&self) -> Result<Vec<ModelOf<R::Entity>>, RepositoryError> {
        self.handle.block_on(self.inner.get_all())
    }
}
