// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::entities::{author, post};
use super::super::helpers::sea_orm_factory;
use dalkit::domain::repositories::{Include, RepositoryError};
use dalkit::infrastructure::repositories::{BlockingRepository, SeaOrmRepository};
use sea_orm::ColumnTrait;
use tokio::runtime::Runtime;

/// 测试同步版本在执行环境外完成全部操作
#[test]
fn test_blocking_operations() {
    let runtime = Runtime::new().unwrap();
    let factory = runtime.block_on(sea_orm_factory());
    let authors = BlockingRepository::new(
        SeaOrmRepository::<author::Entity>::new(&factory),
        runtime.handle().clone(),
    );
    let posts = BlockingRepository::new(
        SeaOrmRepository::<post::Entity>::new(&factory),
        runtime.handle().clone(),
    );

    let mut ada = authors.create(author::new("Ada")).unwrap();
    posts.create(post::new(ada.id, "Notes")).unwrap();

    ada.name = "Ada Lovelace".to_string();
    authors.update(ada.clone()).unwrap();

    let stored = authors.get(author::Column::Id.eq(ada.id)).unwrap().unwrap();
    assert_eq!(stored.name, "Ada Lovelace");

    let includes = [Include::related::<post::Entity>("posts")];
    let loaded = authors
        .get_include(author::Column::Id.eq(ada.id), &includes)
        .unwrap()
        .unwrap();
    assert_eq!(loaded.related("posts").len(), 1);
    assert_eq!(authors.get_all_include(&includes).unwrap().len(), 1);

    assert!(matches!(
        authors.create(None::<author::Model>),
        Err(RepositoryError::NullEntity(_))
    ));

    let note = posts.get_all().unwrap().remove(0);
    assert_eq!(posts.delete(note).unwrap(), 1);
    assert!(posts.get_all().unwrap().is_empty());
}

/// 测试无执行环境时无法以当前环境创建
#[test]
fn test_from_current_requires_runtime() {
    let runtime = Runtime::new().unwrap();
    let factory = runtime.block_on(sea_orm_factory());

    let outside = BlockingRepository::from_current(SeaOrmRepository::<author::Entity>::new(&factory));
    assert!(outside.is_err());

    let inside = {
        let _guard = runtime.enter();
        BlockingRepository::from_current(SeaOrmRepository::<author::Entity>::new(&factory))
    };
    let repo = inside.unwrap();
    assert!(repo.get_all().unwrap().is_empty());
}
