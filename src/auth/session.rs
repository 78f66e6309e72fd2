use actix_session::Session;

use crate::errors::AppError;

const FLASH: &str = "flash";
const TENANT_ID: &str = "tenant_id";

/// Tenant chosen with the tenant switcher, if any.
pub fn get_tenant_id(session: &Session) -> Option<i64> {
    session.get::<i64>(TENANT_ID).unwrap_or(None)
}

pub fn set_tenant_id(session: &Session, tenant_id: i64) -> Result<(), AppError> {
    session
        .insert(TENANT_ID, tenant_id)
        .map_err(|e| AppError::Session(format!("Failed to store tenant: {e}")))
}

pub fn set_flash(session: &Session, message: impl Into<String>) {
    if let Err(e) = session.insert(FLASH, message.into()) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH);
    }
    flash
}
