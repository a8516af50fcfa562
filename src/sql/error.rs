// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// SQL 语句渲染错误
///
/// 校验延迟到渲染时才进行，构建过程中缺失的子句不会立即报错
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlStatementError {
    /// 未指定数据表
    #[error("Table name not specified")]
    TableNotSpecified,
    /// UPDATE 未指定任何更新字段
    #[error("No column specified")]
    NoColumnSpecified,
    /// 分页查询未指定 ORDER BY
    #[error("ORDER BY clause not specified")]
    OrderByNotSpecified,
}
