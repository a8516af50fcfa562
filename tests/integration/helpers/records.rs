// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use dalkit::domain::models::Auditable;
use dalkit::domain::repositories::Record;
use dalkit::sql::SqlValue;
use sqlx::any::AnyRow;
use sqlx::Row;

/// 带审计字段、主键由数据库生成的商品
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl Product {
    pub fn new(name: &str, price: f64) -> Self {
        Self {
            id: 0,
            name: name.to_string(),
            price,
            created_at: None,
            created_by: None,
            updated_at: None,
            updated_by: None,
        }
    }
}

fn parse_time(value: Option<String>) -> Result<Option<DateTime<Utc>>, sqlx::Error> {
    value
        .map(|text| {
            DateTime::parse_from_rfc3339(&text)
                .map(|at| at.with_timezone(&Utc))
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))
        })
        .transpose()
}

impl Record for Product {
    const TABLE: &'static str = "products";
    const KEY: &'static str = "id";

    fn columns() -> &'static [&'static str] {
        &["name", "price", "created_at", "created_by", "updated_at", "updated_by"]
    }

    fn key(&self) -> SqlValue {
        SqlValue::Int(self.id)
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.price.into(),
            self.created_at.into(),
            self.created_by.clone().into(),
            self.updated_at.into(),
            self.updated_by.clone().into(),
        ]
    }

    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            price: row.try_get("price")?,
            created_at: parse_time(row.try_get("created_at")?)?,
            created_by: row.try_get("created_by")?,
            updated_at: parse_time(row.try_get("updated_at")?)?,
            updated_by: row.try_get("updated_by")?,
        })
    }
}

impl Auditable for Product {
    fn set_created_at(&mut self, at: DateTime<Utc>) {
        self.created_at = Some(at);
    }

    fn set_created_by(&mut self, user_id: String) {
        self.created_by = Some(user_id);
    }

    fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }

    fn set_updated_by(&mut self, user_id: String) {
        self.updated_by = Some(user_id);
    }
}

/// 主键由调用方指定的币别
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    pub code: String,
    pub name: String,
}

impl Record for Currency {
    const TABLE: &'static str = "currencies";
    const KEY: &'static str = "code";
    const KEY_GENERATED: bool = false;

    fn columns() -> &'static [&'static str] {
        &["name"]
    }

    fn key(&self) -> SqlValue {
        SqlValue::Text(self.code.clone())
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![self.name.clone().into()]
    }

    fn from_row(row: &AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            code: row.try_get("code")?,
            name: row.try_get("name")?,
        })
    }
}
