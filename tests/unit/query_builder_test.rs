// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dalkit::sql::{
    BuildQuery, QueryBuilder, SqlPagedStatement, SqlSelectStatement, SqlStatementError,
    SqlUpdateStatement,
};

/// 订单查询构建器，只暴露业务需要的条件
struct OrderQuery {
    builder: QueryBuilder<SqlSelectStatement>,
}

impl OrderQuery {
    fn new() -> Self {
        let mut builder: QueryBuilder<SqlSelectStatement> = QueryBuilder::new();
        builder
            .statement_mut()
            .select("Orders.Id, Customers.Name")
            .from("Orders")
            .join("Customers")
            .on("Customers.Id = Orders.CustomerId")
            .order_by("Orders.Id");
        Self { builder }
    }

    fn placed_by(mut self, customer: &str) -> Self {
        self.builder
            .statement_mut()
            .filter(format!("Customers.Name = '{}'", customer));
        self
    }

    fn shipped(mut self) -> Self {
        self.builder.statement_mut().filter("Orders.ShippedAt IS NOT NULL");
        self
    }
}

impl BuildQuery for OrderQuery {
    fn build(&self) -> Result<String, SqlStatementError> {
        self.builder.build()
    }
}

/// 分页订单查询构建器
struct OrderPage {
    builder: QueryBuilder<SqlPagedStatement>,
}

impl OrderPage {
    fn new(page: u32, size: u32) -> Self {
        let mut builder: QueryBuilder<SqlPagedStatement> = QueryBuilder::new();
        builder
            .statement_mut()
            .from("Orders")
            .order_by("Id")
            .page(page)
            .page_size(size);
        Self { builder }
    }
}

impl BuildQuery for OrderPage {
    fn build(&self) -> Result<String, SqlStatementError> {
        self.builder.build()
    }
}

fn render(query: &dyn BuildQuery) -> Result<String, SqlStatementError> {
    query.build()
}

#[test]
fn test_domain_builder_renders_preset_clauses() {
    let sql = render(&OrderQuery::new().placed_by("Ada").shipped()).unwrap();

    let expected = [
        "SELECT Orders.Id, Customers.Name",
        "FROM Orders",
        "JOIN Customers",
        "ON Customers.Id = Orders.CustomerId",
        "WHERE Customers.Name = 'Ada' AND Orders.ShippedAt IS NOT NULL",
        "ORDER BY Orders.Id",
    ]
    .join("\n");
    assert_eq!(sql, expected);
}

#[test]
fn test_paged_builder_renders_window() {
    let sql = render(&OrderPage::new(3, 25)).unwrap();

    assert!(sql.starts_with("SELECT *\nFROM (SELECT ROW_NUMBER() OVER (ORDER BY Id) AS PagedNumber,Orders.*"));
    assert!(sql.ends_with("WHERE PagedNumber BETWEEN ((3-1)*25+1) AND (3*25)"));
}

#[test]
fn test_builder_surfaces_render_errors() {
    let update: QueryBuilder<SqlUpdateStatement> = QueryBuilder::new();
    assert_eq!(update.build(), Err(SqlStatementError::TableNotSpecified));

    let mut paged: QueryBuilder<SqlPagedStatement> = QueryBuilder::new();
    paged.statement_mut().from("Orders");
    assert_eq!(paged.build(), Err(SqlStatementError::OrderByNotSpecified));
}
