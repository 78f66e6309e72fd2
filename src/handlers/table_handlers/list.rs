use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use super::find_table;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::table::{TableRequest, engine, export};
use crate::models::tenant;
use crate::templates_structs::{PageContext, TablePageTemplate};
use crate::tenancy::current_tenant;

type Params = web::Query<HashMap<String, String>>;

/// GET /tables/{name}: server-rendered first page plus hydration props.
pub async fn page(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    query: Params,
) -> Result<HttpResponse, AppError> {
    let table = find_table(&path)?;
    let tenant = current_tenant(&session, &pool, &config).await?;
    let req = TableRequest::from_query(&query, config.table_per_page)?;

    let page = engine::fetch_page(&pool, &table, tenant.id, &req).await?;
    let tenants = tenant::find_all(&pool).await?;
    let ctx = PageContext::build(&session, tenant, tenants, &format!("/tables/{}", table.name()));
    render(TablePageTemplate::new(ctx, page))
}

/// GET /tables/{name}/data
pub async fn data(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    query: Params,
) -> Result<HttpResponse, AppError> {
    let table = find_table(&path)?;
    let tenant = current_tenant(&session, &pool, &config).await?;
    let req = TableRequest::from_query(&query, config.table_per_page)?;

    let page = engine::fetch_page(&pool, &table, tenant.id, &req).await?;
    Ok(HttpResponse::Ok().json(page))
}

/// GET /tables/{name}/filters
pub async fn filters(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let table = find_table(&path)?;
    let tenant = current_tenant(&session, &pool, &config).await?;

    let options = engine::filter_options(&pool, &table, tenant.id).await?;
    Ok(HttpResponse::Ok().json(options))
}

/// GET /tables/{name}/export.csv: every row matching the current search,
/// filters and sort.
pub async fn export_csv(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    query: Params,
) -> Result<HttpResponse, AppError> {
    let table = find_table(&path)?;
    let tenant = current_tenant(&session, &pool, &config).await?;
    let req = TableRequest::from_query(&query, config.table_per_page)?;

    let rows = engine::fetch_all(&pool, &table, tenant.id, &req).await?;
    log::info!("Exporting {} row(s) of {} for tenant {}", rows.len(), table.name(), tenant.slug);

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", export::filename(&table)),
        ))
        .body(export::to_csv(&table, &rows)))
}
