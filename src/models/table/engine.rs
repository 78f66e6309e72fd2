// src/models/table/engine.rs
//! Database side of the table engine: paging, filter options and effects.
use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::PgPool;
use sqlx::types::Json;

use super::dialog::ConfirmDialog;
use super::effect::{Bind, Effect};
use super::query::QueryPlan;
use super::render::RenderedRow;
use super::{BulkAction, ColumnHeader, FilterOption, FilterSource, Row, Table, TableRequest};
use crate::errors::AppError;

/// Everything the client needs to draw one page of a table.
#[derive(Debug, Serialize)]
pub struct TablePage {
    pub name: &'static str,
    pub title: &'static str,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RenderedRow>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub search: Option<String>,
    pub sort: String,
    pub dir: &'static str,
    pub filters: BTreeMap<String, String>,
    pub filter_options: BTreeMap<&'static str, Vec<FilterOption>>,
    pub bulk_actions: Vec<BulkAction>,
    pub has_select_column: bool,
    pub dialogs: BTreeMap<&'static str, ConfirmDialog>,
}

async fn fetch_rows(pool: &PgPool, sql: &str, tenant_id: i64, plan: &QueryPlan) -> Result<Vec<Row>, AppError> {
    let mut q = sqlx::query_scalar::<_, Json<Row>>(sql).bind(tenant_id);
    for p in &plan.params {
        q = q.bind(p);
    }
    let rows = q.fetch_all(pool).await?;
    Ok(rows.into_iter().map(|Json(row)| row).collect())
}

async fn count_rows(pool: &PgPool, sql: &str, tenant_id: i64, plan: &QueryPlan) -> Result<i64, AppError> {
    let mut q = sqlx::query_scalar::<_, i64>(sql).bind(tenant_id);
    for p in &plan.params {
        q = q.bind(p);
    }
    Ok(q.fetch_one(pool).await?)
}

/// One page of rendered rows plus the table's metadata.
pub async fn fetch_page(
    pool: &PgPool,
    table: &Table,
    tenant_id: i64,
    req: &TableRequest,
) -> Result<TablePage, AppError> {
    let query = table.query();
    let plan = query.plan(req, &table.sortable_keys())?;

    let total = count_rows(pool, &query.count_sql(&plan), tenant_id, &plan).await?;
    let rows = fetch_rows(pool, &query.page_sql(&plan, req.per_page, req.offset()), tenant_id, &plan).await?;

    Ok(TablePage {
        name: table.name(),
        title: table.title(),
        columns: table.headers(),
        rows: rows.iter().map(|r| table.render_row(r)).collect(),
        page: req.page,
        per_page: req.per_page,
        total,
        total_pages: req.total_pages(total),
        search: req.search.clone(),
        sort: req.sort.column.clone(),
        dir: req.sort.dir_str(),
        filters: req.filters.iter().cloned().collect(),
        filter_options: filter_options(pool, table, tenant_id).await?,
        bulk_actions: table.bulk_actions(),
        has_select_column: table.descriptor().has_select_column(),
        dialogs: table.dialogs(),
    })
}

/// Every row matching the request, ignoring paging.
pub async fn fetch_all(pool: &PgPool, table: &Table, tenant_id: i64, req: &TableRequest) -> Result<Vec<Row>, AppError> {
    let query = table.query();
    let plan = query.plan(req, &table.sortable_keys())?;
    fetch_rows(pool, &query.all_sql(&plan), tenant_id, &plan).await
}

pub async fn fetch_row(pool: &PgPool, table: &Table, tenant_id: i64, id: i64) -> Result<Option<Row>, AppError> {
    let row = sqlx::query_scalar::<_, Json<Row>>(&table.query().row_sql())
        .bind(tenant_id)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|Json(r)| r))
}

/// Dropdown values for every filterable key. Not cached: distinct values are
/// read from the tenant's current rows on each call.
pub async fn filter_options(
    pool: &PgPool,
    table: &Table,
    tenant_id: i64,
) -> Result<BTreeMap<&'static str, Vec<FilterOption>>, AppError> {
    let mut options = BTreeMap::new();
    for (key, source) in table.descriptor().filters() {
        let values = match source {
            FilterSource::Options(list) => list,
            FilterSource::Distinct { table, column } => {
                let sql = format!(
                    "SELECT DISTINCT {column}::TEXT FROM {table} \
                     WHERE tenant_id = $1 AND {column} IS NOT NULL ORDER BY 1"
                );
                let values: Vec<String> = sqlx::query_scalar(&sql).bind(tenant_id).fetch_all(pool).await?;
                FilterOption::from_values(values)
            }
        };
        options.insert(key, values);
    }
    Ok(options)
}

/// Apply an effect to the given ids of one tenant. Returns the number of rows changed.
pub async fn apply_effect(
    pool: &PgPool,
    table: &Table,
    tenant_id: i64,
    effect: &Effect,
    ids: &[i64],
    note: Option<String>,
) -> Result<u64, AppError> {
    if ids.is_empty() {
        return Ok(0);
    }
    let stmt = effect.statement(table.query().table(), note);
    let mut q = sqlx::query(&stmt.sql).bind(tenant_id).bind(ids);
    for bind in stmt.binds {
        q = match bind {
            Bind::Text(value) => q.bind(value),
            Bind::List(values) => q.bind(values),
        };
    }
    let result = q.execute(pool).await?;
    log::info!(
        "{} on {}: {} of {} row(s) changed (tenant {tenant_id})",
        match effect { Effect::Delete => "delete", Effect::Transition(t) => t.to },
        table.name(),
        result.rows_affected(),
        ids.len()
    );
    Ok(result.rows_affected())
}
