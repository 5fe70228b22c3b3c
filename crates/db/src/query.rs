//! Scoped query construction shared by the repositories.
//!
//! Each table is described once by a [`Table`]: its columns, the joins
//! reaching the owning schedule, and the column holding the owner id.
//! The helpers below build one SQL text per operation and append the
//! ownership predicate only when the [`Scope`] asks for it.

use eyre::Result;
use planner_core::{
    pagination::{Page, Pagination},
    scope::Scope,
    update::{FieldUpdates, FieldValue},
};
use sqlx::{postgres::PgRow, FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

/// Tables that reach their owner through other rows
pub struct Parent {
    /// `FROM`/`USING` list for updates and deletes
    pub from: &'static str,
    /// Predicate linking the parent list to the target row
    pub link: &'static str,
}

pub struct Table {
    pub name: &'static str,
    pub alias: &'static str,
    pub columns: &'static str,
    /// Joins used by selects to reach the owner column
    pub joins: &'static str,
    pub parent: Option<Parent>,
    pub owner_column: &'static str,
}

pub fn push_scope(builder: &mut QueryBuilder<'_, Postgres>, scope: Scope, owner_column: &str) {
    if let Some(owner) = scope.owner() {
        builder.push(format!(" AND {} = ", owner_column));
        builder.push_bind(owner);
    }
}

/// `sort_by` must already be checked against the entity's whitelist.
pub fn push_page(builder: &mut QueryBuilder<'_, Postgres>, alias: &str, page: &Pagination) {
    builder.push(format!(
        " ORDER BY {}.{} {}",
        alias,
        page.sort_by,
        page.direction()
    ));
    builder.push(" LIMIT ");
    builder.push_bind(page.per_page);
    builder.push(" OFFSET ");
    builder.push_bind(page.offset);
}

pub fn push_assignments(
    builder: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    updates: &FieldUpdates,
) {
    if updates.is_empty() {
        builder.push(format!("id = {}.id", alias));
        return;
    }

    let mut assignments = builder.separated(", ");
    for (column, value) in updates.iter() {
        assignments.push(format!("{} = ", column));
        match value {
            FieldValue::Text(v) => assignments.push_bind_unseparated(v.clone()),
            FieldValue::Int(v) => assignments.push_bind_unseparated(*v),
            FieldValue::Date(v) => assignments.push_bind_unseparated(*v),
            FieldValue::Time(v) => assignments.push_bind_unseparated(*v),
            FieldValue::Id(v) => assignments.push_bind_unseparated(*v),
            FieldValue::NullableId(v) => assignments.push_bind_unseparated(*v),
        };
    }
}

fn push_filter(
    builder: &mut QueryBuilder<'_, Postgres>,
    table: &Table,
    parent: Option<(&str, Uuid)>,
    scope: Scope,
) {
    builder.push(" WHERE TRUE");
    if let Some((column, id)) = parent {
        builder.push(format!(" AND {} = ", column));
        builder.push_bind(id);
    }
    push_scope(builder, scope, table.owner_column);
}

pub async fn fetch_one<T>(pool: &PgPool, table: &Table, id: Uuid, scope: Scope) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut builder = QueryBuilder::<Postgres>::new(format!(
        "SELECT {} FROM {} {} {} WHERE {}.id = ",
        table.columns, table.name, table.alias, table.joins, table.alias
    ));
    builder.push_bind(id);
    push_scope(&mut builder, scope, table.owner_column);

    let row = builder.build_query_as::<T>().fetch_optional(pool).await?;
    Ok(row)
}

/// Lists rows, optionally restricted to one parent (`parent.0 = parent.1`).
pub async fn fetch_page<T>(
    pool: &PgPool,
    table: &Table,
    parent: Option<(&str, Uuid)>,
    scope: Scope,
    page: &Pagination,
) -> Result<Page<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut count = QueryBuilder::<Postgres>::new(format!(
        "SELECT COUNT(*) FROM {} {} {}",
        table.name, table.alias, table.joins
    ));
    push_filter(&mut count, table, parent, scope);
    let total_count = count.build_query_scalar::<i64>().fetch_one(pool).await?;

    let mut select = QueryBuilder::<Postgres>::new(format!(
        "SELECT {} FROM {} {} {}",
        table.columns, table.name, table.alias, table.joins
    ));
    push_filter(&mut select, table, parent, scope);
    push_page(&mut select, table.alias, page);
    let items = select.build_query_as::<T>().fetch_all(pool).await?;

    Ok(Page { items, total_count })
}

/// Applies `updates` to a visible row and returns it, or `None` when the
/// row is missing or out of scope.
pub async fn update_one<T>(
    pool: &PgPool,
    table: &Table,
    id: Uuid,
    updates: &FieldUpdates,
    scope: Scope,
) -> Result<Option<T>>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
{
    let mut builder = QueryBuilder::<Postgres>::new(format!(
        "UPDATE {} {} SET ",
        table.name, table.alias
    ));
    push_assignments(&mut builder, table.alias, updates);
    if let Some(parent) = &table.parent {
        builder.push(format!(" FROM {}", parent.from));
    }
    builder.push(format!(" WHERE {}.id = ", table.alias));
    builder.push_bind(id);
    if let Some(parent) = &table.parent {
        builder.push(format!(" AND {}", parent.link));
    }
    push_scope(&mut builder, scope, table.owner_column);
    builder.push(format!(" RETURNING {}", table.columns));

    let row = builder.build_query_as::<T>().fetch_optional(pool).await?;
    Ok(row)
}

/// Deletes a visible row; returns whether anything was removed.
pub async fn delete_one(pool: &PgPool, table: &Table, id: Uuid, scope: Scope) -> Result<bool> {
    let mut builder =
        QueryBuilder::<Postgres>::new(format!("DELETE FROM {} {}", table.name, table.alias));
    if let Some(parent) = &table.parent {
        builder.push(format!(" USING {}", parent.from));
    }
    builder.push(format!(" WHERE {}.id = ", table.alias));
    builder.push_bind(id);
    if let Some(parent) = &table.parent {
        builder.push(format!(" AND {}", parent.link));
    }
    push_scope(&mut builder, scope, table.owner_column);

    let result = builder.build().execute(pool).await?;
    Ok(result.rows_affected() > 0)
}
