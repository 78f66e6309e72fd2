use actix_session::Session;
use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use crate::auth::csrf;
use crate::auth::session::{set_flash, set_tenant_id};
use crate::errors::AppError;
use crate::forms::{FieldErrors, FormData, value};
use crate::models::tenant;

/// Only same-site paths; anything else goes back to the start page.
fn redirect_target(next: &str) -> &str {
    if next.starts_with('/') && !next.starts_with("//") && !next.contains('\\') {
        next
    } else {
        "/"
    }
}

/// POST /tenant: switch the session to another tenant.
pub async fn switch(
    pool: web::Data<PgPool>,
    session: Session,
    form: web::Form<FormData>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, value(&form, "csrf_token"))?;

    let slug = value(&form, "slug");
    let Some(target) = tenant::find_by_slug(&pool, slug).await? else {
        return Err(FieldErrors::single("slug", "Unknown tenant").into());
    };
    set_tenant_id(&session, target.id)?;
    set_flash(&session, format!("Now working in {}", target.name));
    log::info!("Session switched to tenant {}", target.slug);

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", redirect_target(value(&form, "next"))))
        .finish())
}
