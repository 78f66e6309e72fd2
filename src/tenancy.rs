use actix_session::Session;
use sqlx::PgPool;

use crate::auth::session::get_tenant_id;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::tenant::{self, Tenant};

/// The tenant a request acts for: the session's tenant when present,
/// otherwise the configured default.
pub async fn current_tenant(session: &Session, pool: &PgPool, config: &AppConfig) -> Result<Tenant, AppError> {
    if let Some(id) = get_tenant_id(session) {
        if let Some(t) = tenant::find_by_id(pool, id).await? {
            return Ok(t);
        }
        log::warn!("Session tenant {id} no longer exists, falling back to '{}'", config.default_tenant);
    }
    tenant::find_by_slug(pool, &config.default_tenant)
        .await?
        .ok_or_else(|| AppError::BadRequest(format!("Unknown tenant '{}'", config.default_tenant)))
}
