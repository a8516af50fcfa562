// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, PrimaryKeyToColumn, PrimaryKeyTrait, QueryFilter,
};
use std::collections::BTreeMap;
use std::marker::PhantomData;
use tracing::debug;

use crate::domain::repositories::{
    context_repository::{ContextRepository, Include, Loaded, ModelOf},
    require_entity, RepositoryError,
};
use crate::infrastructure::database::DbContextFactory;

/// 基于 sea-orm 的上下文仓库实现
///
/// 写入操作立即提交，新增时若主键为自动递增则交由数据库生成
pub struct SeaOrmRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E: EntityTrait> SeaOrmRepository<E> {
    pub fn new<F: DbContextFactory + ?Sized>(factory: &F) -> Self {
        Self {
            db: factory.db_context().clone(),
            _entity: PhantomData,
        }
    }

    async fn load_includes(
        &self,
        model: ModelOf<E>,
        includes: &[Include<E>],
    ) -> Result<Loaded<ModelOf<E>>, RepositoryError>
    where
        ModelOf<E>: Sync,
    {
        let mut loaded = BTreeMap::new();
        for include in includes {
            debug!(table = E::default().table_name(), include = include.name(), "Loading related rows");
            let rows = include.load(&model, &self.db).await?;
            loaded.insert(include.name(), rows);
        }
        Ok(Loaded {
            entity: model,
            includes: loaded,
        })
    }
}

impl<E: EntityTrait> Drop for SeaOrmRepository<E> {
    fn drop(&mut self) {
        debug!(table = E::default().table_name(), "Releasing ORM context");
    }
}

#[async_trait]
impl<E> ContextRepository for SeaOrmRepository<E>
where
    E: EntityTrait,
    ModelOf<E>: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    type Entity = E;

    fn db_context(&self) -> &DatabaseConnection {
        &self.db
    }

    async fn create<T>(&self, entity: T) -> Result<ModelOf<E>, RepositoryError>
    where
        T: Into<Option<ModelOf<E>>> + Send,
    {
        let model = require_entity(entity.into())?;
        debug!(table = E::default().table_name(), "Creating entity");

        let mut active = model.into_active_model().reset_all();
        if <E::PrimaryKey as PrimaryKeyTrait>::auto_increment() {
            for key in E::PrimaryKey::iter() {
                active.not_set(key.into_column());
            }
        }

        Ok(active.insert(&self.db).await?)
    }

    async fn update<T>(&self, entity: T) -> Result<ModelOf<E>, RepositoryError>
    where
        T: Into<Option<ModelOf<E>>> + Send,
    {
        let model = require_entity(entity.into())?;
        debug!(table = E::default().table_name(), "Updating entity");

        let active = model.into_active_model().reset_all();
        Ok(active.update(&self.db).await?)
    }

    async fn delete<T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<ModelOf<E>>> + Send,
    {
        let model = require_entity(entity.into())?;
        debug!(table = E::default().table_name(), "Deleting entity");

        let result = E::delete(model.into_active_model()).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    async fn get<F>(&self, filter: F) -> Result<Option<ModelOf<E>>, RepositoryError>
    where
        F: IntoCondition + Send,
    {
        debug!(table = E::default().table_name(), "Querying first entity");
        Ok(E::find().filter(filter).one(&self.db).await?)
    }

    async fn get_include<F>(
        &self,
        filter: F,
        includes: &[Include<E>],
    ) -> Result<Option<Loaded<ModelOf<E>>>, RepositoryError>
    where
        F: IntoCondition + Send,
    {
        match self.get(filter).await? {
            Some(model) => Ok(Some(self.load_includes(model, includes).await?)),
            None => Ok(None),
        }
    }

    async fn get_all_include(
        &self,
        includes: &[Include<E>],
    ) -> Result<Vec<Loaded<ModelOf<E>>>, RepositoryError> {
        let models = self.get_all().await?;
        let mut loaded = Vec::with_capacity(models.len());
        for model in models {
            loaded.push(self.load_includes(model, includes).await?);
        }
        Ok(loaded)
    }

    async fn get_all(&self) -> Result<Vec<ModelOf<E>>, RepositoryError> {
        debug!(table = E::default().table_name(), "Querying all entities");
        Ok(E::find().all(&self.db).await?)
    }
}
