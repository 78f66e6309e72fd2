use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::enums::{self, EnumOption};
use crate::errors::AppError;

#[derive(Serialize)]
struct EnumResponse<'a> {
    name: &'a str,
    options: Vec<EnumOption>,
}

/// GET /api/enums: registered enumeration names.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(enums::names())
}

/// GET /api/enums/{name}: dropdown options in declaration order.
pub async fn show(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let name = path.into_inner();
    let options = enums::options_by_name(&name).ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(EnumResponse { name: &name, options }))
}
