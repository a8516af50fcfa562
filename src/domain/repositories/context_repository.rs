// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use async_trait::async_trait;
use futures::future::BoxFuture;
use sea_orm::sea_query::IntoCondition;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, ModelTrait, Related};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// 实体对应的模型类型
pub type ModelOf<E> = <E as EntityTrait>::Model;

type IncludeLoader<E> = Box<
    dyn for<'a> Fn(&'a ModelOf<E>, &'a DatabaseConnection) -> BoxFuture<'a, Result<Vec<JsonValue>, DbErr>>
        + Send
        + Sync,
>;

/// 预先加载的关联描述
///
/// 每个描述以名称标识一个关联实体，查询时按模型载入关联数据
pub struct Include<E: EntityTrait> {
    name: &'static str,
    loader: IncludeLoader<E>,
}

impl<E: EntityTrait> Include<E> {
    /// 声明对关联实体 `R` 的预先加载
    pub fn related<R>(name: &'static str) -> Self
    where
        R: EntityTrait,
        E: Related<R>,
        ModelOf<E>: Sync,
    {
        Self {
            name,
            loader: Box::new(load_related::<E, R>),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 载入单一模型的关联数据
    pub async fn load(
        &self,
        model: &ModelOf<E>,
        db: &DatabaseConnection,
    ) -> Result<Vec<JsonValue>, DbErr> {
        (self.loader)(model, db).await
    }
}

impl<E: EntityTrait> fmt::Debug for Include<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Include").field("name", &self.name).finish()
    }
}

fn load_related<'a, E, R>(
    model: &'a ModelOf<E>,
    db: &'a DatabaseConnection,
) -> BoxFuture<'a, Result<Vec<JsonValue>, DbErr>>
where
    E: EntityTrait + Related<R>,
    R: EntityTrait,
    ModelOf<E>: Sync,
{
    Box::pin(async move { model.find_related(R::default()).into_json().all(db).await })
}

/// 带有预先加载关联数据的模型
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<M> {
    /// 主实体
    pub entity: M,
    /// 以关联名称索引的关联数据
    pub includes: BTreeMap<&'static str, Vec<JsonValue>>,
}

impl<M> Loaded<M> {
    /// 获取指定名称的关联数据，未加载时返回空切片
    pub fn related(&self, name: &str) -> &[JsonValue] {
        self.includes.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// 上下文仓库特质（完整 ORM）
///
/// 写入操作立即提交；实体参数为 `None` 时返回 [`RepositoryError::NullEntity`]
#[async_trait]
pub trait ContextRepository: Send + Sync {
    type Entity: EntityTrait;

    /// 获取底层上下文
    fn db_context(&self) -> &DatabaseConnection;

    /// 新增实体并返回持久化后的模型
    async fn create<T>(&self, entity: T) -> Result<ModelOf<Self::Entity>, RepositoryError>
    where
        T: Into<Option<ModelOf<Self::Entity>>> + Send;

    /// 以实体的全部字段更新数据
    async fn update<T>(&self, entity: T) -> Result<ModelOf<Self::Entity>, RepositoryError>
    where
        T: Into<Option<ModelOf<Self::Entity>>> + Send;

    /// 删除实体，返回受影响笔数
    async fn delete<T>(&self, entity: T) -> Result<u64, RepositoryError>
    where
        T: Into<Option<ModelOf<Self::Entity>>> + Send;

    /// 按条件获取第一笔
    async fn get<F>(&self, filter: F) -> Result<Option<ModelOf<Self::Entity>>, RepositoryError>
    where
        F: IntoCondition + Send;

    /// 按条件获取第一笔并预先加载关联数据
    async fn get_include<F>(
        &self,
        filter: F,
        includes: &[Include<Self::Entity>],
    ) -> Result<Option<Loaded<ModelOf<Self::Entity>>>, RepositoryError>
    where
        F: IntoCondition + Send;

    /// 获取全部并预先加载关联数据
    async fn get_all_include(
        &self,
        includes: &[Include<Self::Entity>],
    ) -> Result<Vec<Loaded<ModelOf<Self::Entity>>>, RepositoryError>;

    /// 获取全部
    async fn get_all(&self) -> Result<Vec<ModelOf<Self::Entity>>, RepositoryError>;
}
