// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use std::fmt;

/// SQL 值
///
/// 最小化的类型到 SQL 字面量映射：文字类型在 UPDATE SET 中以单引号包裹，
/// 其余类型使用其默认的文字表示。同时作为微型 ORM 仓库的绑定参数类型。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    /// 是否为文字类型
    pub fn is_text(&self) -> bool {
        matches!(self, SqlValue::Text(_))
    }

    /// 渲染为 SQL 字面量
    ///
    /// 不做任何转义，调用方需自行保证内容安全
    pub fn to_literal(&self) -> String {
        if self.is_text() {
            format!("'{}'", self)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Bool(true) => write!(f, "TRUE"),
            SqlValue::Bool(false) => write!(f, "FALSE"),
            SqlValue::Int(v) => write!(f, "{}", v),
            SqlValue::Float(v) => write!(f, "{}", v),
            SqlValue::Text(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&String> for SqlValue {
    fn from(value: &String) -> Self {
        SqlValue::Text(value.clone())
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

macro_rules! impl_from_lossless {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for SqlValue {
                fn from(value: $ty) -> Self {
                    SqlValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_lossless!(Int: i8, i16, i32, u8, u16, u32);
impl_from_lossless!(Float: f32);

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

/// 超出 `i64` 范围的值以文字形式保留完整数值
impl From<u64> for SqlValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(SqlValue::Int)
            .unwrap_or_else(|_| SqlValue::Text(value.to_string()))
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        SqlValue::Float(value)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(value: DateTime<Utc>) -> Self {
        SqlValue::Text(value.to_rfc3339())
    }
}

impl From<uuid::Uuid> for SqlValue {
    fn from(value: uuid::Uuid) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
