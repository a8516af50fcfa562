// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::entities::{author, post};
use super::super::helpers::sea_orm_factory;
use dalkit::domain::repositories::{ContextRepository, Include, RepositoryError};
use dalkit::infrastructure::repositories::SeaOrmRepository;
use sea_orm::ColumnTrait;

/// 测试新增时由数据库生成主键
#[tokio::test]
async fn test_create_assigns_generated_key() {
    let factory = sea_orm_factory().await;
    let repo = SeaOrmRepository::<author::Entity>::new(&factory);

    let ada = repo.create(author::new("Ada")).await.unwrap();
    let grace = repo.create(author::new("Grace")).await.unwrap();

    assert_ne!(ada.id, grace.id);
    assert_eq!(repo.get_all().await.unwrap().len(), 2);
}

/// 测试按条件获取第一笔
#[tokio::test]
async fn test_get_by_predicate() {
    let factory = sea_orm_factory().await;
    let repo = SeaOrmRepository::<author::Entity>::new(&factory);
    repo.create(author::new("Ada")).await.unwrap();

    let found = repo.get(author::Column::Name.eq("Ada")).await.unwrap();
    assert_eq!(found.map(|a| a.name), Some("Ada".to_string()));

    let missing = repo.get(author::Column::Name.eq("Linus")).await.unwrap();
    assert!(missing.is_none());
}

/// 测试更新与删除立即生效
#[tokio::test]
async fn test_update_and_delete() {
    let factory = sea_orm_factory().await;
    let repo = SeaOrmRepository::<author::Entity>::new(&factory);
    let mut ada = repo.create(author::new("Ada")).await.unwrap();

    ada.name = "Ada Lovelace".to_string();
    let updated = repo.update(ada.clone()).await.unwrap();
    assert_eq!(updated.name, "Ada Lovelace");

    let stored = repo.get(author::Column::Id.eq(ada.id)).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ada Lovelace");

    assert_eq!(repo.delete(stored).await.unwrap(), 1);
    assert!(repo.get_all().await.unwrap().is_empty());
}

/// 测试空实体参数
#[tokio::test]
async fn test_null_entity_is_rejected() {
    let factory = sea_orm_factory().await;
    let repo = SeaOrmRepository::<author::Entity>::new(&factory);

    assert!(matches!(
        repo.create(None::<author::Model>).await,
        Err(RepositoryError::NullEntity(_))
    ));
    assert!(matches!(
        repo.update(None::<author::Model>).await,
        Err(RepositoryError::NullEntity(_))
    ));
    assert!(matches!(
        repo.delete(None::<author::Model>).await,
        Err(RepositoryError::NullEntity(_))
    ));
}

/// 测试预先加载关联数据
#[tokio::test]
async fn test_get_include_loads_related_rows() {
    let factory = sea_orm_factory().await;
    let authors = SeaOrmRepository::<author::Entity>::new(&factory);
    let posts = SeaOrmRepository::<post::Entity>::new(&factory);

    let ada = authors.create(author::new("Ada")).await.unwrap();
    let grace = authors.create(author::new("Grace")).await.unwrap();
    posts.create(post::new(ada.id, "Notes")).await.unwrap();
    posts.create(post::new(ada.id, "Sketch of the Analytical Engine")).await.unwrap();
    posts.create(post::new(grace.id, "Compilers")).await.unwrap();

    let includes = [Include::related::<post::Entity>("posts")];
    let loaded = authors
        .get_include(author::Column::Id.eq(ada.id), &includes)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.entity, ada);
    let titles: Vec<_> = loaded
        .related("posts")
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Notes".to_string()));
    assert!(loaded.related("comments").is_empty());

    let all = authors.get_all_include(&includes).await.unwrap();
    assert_eq!(all.len(), 2);
    let grace_loaded = all.iter().find(|l| l.entity.id == grace.id).unwrap();
    assert_eq!(grace_loaded.related("posts").len(), 1);
}

/// 测试反向关联与查无数据
#[tokio::test]
async fn test_get_include_belongs_to_and_missing() {
    let factory = sea_orm_factory().await;
    let authors = SeaOrmRepository::<author::Entity>::new(&factory);
    let posts = SeaOrmRepository::<post::Entity>::new(&factory);

    let ada = authors.create(author::new("Ada")).await.unwrap();
    let note = posts.create(post::new(ada.id, "Notes")).await.unwrap();

    let includes = [Include::related::<author::Entity>("author")];
    let loaded = posts
        .get_include(post::Column::Id.eq(note.id), &includes)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.related("author")[0]["name"], "Ada");

    let missing = posts
        .get_include(post::Column::Id.eq(note.id + 100), &includes)
        .await
        .unwrap();
    assert!(missing.is_none());
}

/// 测试暴露底层上下文
#[tokio::test]
async fn test_db_context_is_usable() {
    let factory = sea_orm_factory().await;
    let repo = SeaOrmRepository::<author::Entity>::new(&factory);

    assert!(repo.db_context().ping().await.is_ok());
}
