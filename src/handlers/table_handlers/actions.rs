use std::collections::HashMap;

use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use super::{ActionOutcome, find_table};
use crate::auth::csrf;
use crate::config::AppConfig;
use crate::enums::{Enumeration, RecordAction};
use crate::errors::AppError;
use crate::models::table::engine;
use crate::tenancy::current_tenant;

/// Raw form pairs; `ids` may repeat.
type Pairs = web::Form<Vec<(String, String)>>;

fn parse_action(raw: &str) -> Result<RecordAction, AppError> {
    RecordAction::from_value(raw).ok_or_else(|| AppError::BadRequest(format!("Unknown action '{raw}'")))
}

/// Collect `ids`, accepting repeated keys, `ids[]` and comma-separated lists.
fn parse_ids(pairs: &[(String, String)]) -> Result<Vec<i64>, AppError> {
    let mut ids = vec![];
    for (key, value) in pairs {
        if key != "ids" && key != "ids[]" {
            continue;
        }
        for part in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let id = part
                .parse::<i64>()
                .map_err(|_| AppError::BadRequest(format!("Invalid row id '{part}'")))?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

/// Last value wins for single-valued fields.
fn to_map(pairs: Vec<(String, String)>) -> HashMap<String, String> {
    pairs.into_iter().collect()
}

fn csrf_field(fields: &HashMap<String, String>) -> &str {
    fields.get("csrf_token").map(String::as_str).unwrap_or("")
}

/// POST /tables/{name}/bulk
pub async fn bulk(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    form: Pairs,
) -> Result<HttpResponse, AppError> {
    let table = find_table(&path)?;
    let pairs = form.into_inner();
    let ids = parse_ids(&pairs)?;
    let fields = to_map(pairs);
    csrf::validate_csrf(&session, csrf_field(&fields))?;

    let action = parse_action(fields.get("action").map(String::as_str).unwrap_or(""))?;
    if !table.allows_bulk(action) {
        return Err(AppError::BadRequest(format!("{} does not support bulk {}", table.title(), action.value())));
    }
    let effect = table
        .effect_for(action)
        .ok_or_else(|| AppError::BadRequest(format!("{} cannot be applied in bulk", action.label())))?;
    if ids.is_empty() {
        return Err(AppError::BadRequest("No rows selected".to_string()));
    }
    let note = effect.read_note(&fields)?;

    let tenant = current_tenant(&session, &pool, &config).await?;
    let affected = engine::apply_effect(&pool, &table, tenant.id, &effect, &ids, note).await?;
    Ok(HttpResponse::Ok().json(ActionOutcome::new(action.value(), action.label(), ids.len(), affected)))
}

/// POST /tables/{name}/rows/{id}/{action}
pub async fn row_action(
    pool: web::Data<PgPool>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<(String, i64, String)>,
    form: Pairs,
) -> Result<HttpResponse, AppError> {
    let (name, id, action) = path.into_inner();
    let table = find_table(&name)?;
    let fields = to_map(form.into_inner());
    csrf::validate_csrf(&session, csrf_field(&fields))?;

    let action = parse_action(&action)?;
    let effect = table
        .effect_for(action)
        .ok_or_else(|| AppError::BadRequest(format!("{} is not a row operation", action.label())))?;

    let tenant = current_tenant(&session, &pool, &config).await?;
    let row = engine::fetch_row(&pool, &table, tenant.id, id).await?.ok_or(AppError::NotFound)?;
    if !table.allows_row_action(&row, action) {
        return Err(AppError::BadRequest(format!("{} is not available for this row", action.label())));
    }
    let note = effect.read_note(&fields)?;

    let affected = engine::apply_effect(&pool, &table, tenant.id, &effect, &[id], note).await?;
    Ok(HttpResponse::Ok().json(ActionOutcome::new(action.value(), action.label(), 1, affected)))
}
