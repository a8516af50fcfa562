// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::records::Product;
use super::super::helpers::{clock, fixed_time, sqlx_factory, user_context};
use chrono::Duration;
use dalkit::domain::repositories::{GenericRepository, RepositoryError};
use dalkit::infrastructure::repositories::{AuditedRepository, SqlxRepository};
use dalkit::infrastructure::database::PooledConnectionFactory;

fn audited(
    factory: &PooledConnectionFactory,
    user_id: &str,
    offset_minutes: i64,
) -> AuditedRepository<SqlxRepository<Product>, Product> {
    AuditedRepository::new(
        SqlxRepository::new(factory),
        user_context(user_id),
        clock(fixed_time() + Duration::minutes(offset_minutes)),
    )
}

/// 测试新增时写入创建字段并持久化
#[tokio::test]
async fn test_add_stamps_created_fields() {
    let factory = sqlx_factory().await;
    let repo = audited(&factory, "alice", 0);

    let mut product = Product::new("monitor", 199.0);
    repo.add(&mut product, None).await.unwrap();

    assert_eq!(product.created_at, Some(fixed_time()));
    assert_eq!(product.created_by.as_deref(), Some("alice"));
    assert_eq!(product.updated_at, None);

    let stored = repo.get(1i64).await.unwrap().unwrap();
    assert_eq!(stored.created_at, Some(fixed_time()));
    assert_eq!(stored.created_by.as_deref(), Some("alice"));
    assert_eq!(stored.updated_by, None);
}

/// 测试更新时只写入更新字段
#[tokio::test]
async fn test_update_stamps_updated_fields() {
    let factory = sqlx_factory().await;
    let creator = audited(&factory, "alice", 0);
    let mut product = Product::new("monitor", 199.0);
    creator.add(&mut product, None).await.unwrap();

    let editor = audited(&factory, "bob", 30);
    let mut stored = editor.get(1i64).await.unwrap().unwrap();
    stored.price = 179.0;
    assert_eq!(editor.update(&mut stored, None).await.unwrap(), 1);

    let reloaded = editor.get(1i64).await.unwrap().unwrap();
    assert_eq!(reloaded.price, 179.0);
    assert_eq!(reloaded.created_by.as_deref(), Some("alice"));
    assert_eq!(reloaded.created_at, Some(fixed_time()));
    assert_eq!(reloaded.updated_by.as_deref(), Some("bob"));
    assert_eq!(reloaded.updated_at, Some(fixed_time() + Duration::minutes(30)));
}

/// 测试空实体在写入审计字段前即被拒绝
#[tokio::test]
async fn test_null_entity_fails_before_stamping() {
    let factory = sqlx_factory().await;
    let repo = audited(&factory, "alice", 0);

    let added = repo.add(None::<&mut Product>, None).await;
    assert!(matches!(added, Err(RepositoryError::NullEntity(_))));

    let updated = repo.update(None::<&mut Product>, None).await;
    assert!(matches!(updated, Err(RepositoryError::NullEntity(_))));

    assert_eq!(repo.record_count("", &[]).await.unwrap(), 0);
}

/// 测试读取操作直接委托
#[tokio::test]
async fn test_read_operations_delegate() {
    let factory = sqlx_factory().await;
    let repo = audited(&factory, "alice", 0);
    for index in 1..=4 {
        let mut product = Product::new(&format!("item{}", index), index as f64);
        repo.add(&mut product, None).await.unwrap();
    }

    let page = repo.get_list_paged(2, 2, "", "id", &[]).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|p| p.created_by.as_deref() == Some("alice")));

    let product = repo.get(4i64).await.unwrap().unwrap();
    assert_eq!(repo.delete(&product).await.unwrap(), 1);
    assert_eq!(repo.record_count("", &[]).await.unwrap(), 3);
}
