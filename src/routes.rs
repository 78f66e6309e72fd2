use actix_web::{HttpResponse, web};

use crate::handlers::{enum_handlers, leave_handlers, onboarding_handlers, table_handlers, tenant_handlers};

/// Register every application route on an `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/tables/employees"))
                .finish()
        }))
        // Tables: fixed sub-paths BEFORE /rows/{id}/{action}
        .route("/tables/{name}", web::get().to(table_handlers::page))
        .route("/tables/{name}/data", web::get().to(table_handlers::data))
        .route("/tables/{name}/filters", web::get().to(table_handlers::filters))
        .route("/tables/{name}/export.csv", web::get().to(table_handlers::export_csv))
        .route("/tables/{name}/bulk", web::post().to(table_handlers::bulk))
        .route("/tables/{name}/rows/{id}/{action}", web::post().to(table_handlers::row_action))
        // Tenant switcher
        .route("/tenant", web::post().to(tenant_handlers::switch))
        // Enumerations
        .route("/api/enums", web::get().to(enum_handlers::index))
        .route("/api/enums/{name}", web::get().to(enum_handlers::show))
        // Leave requests
        .route("/leave-requests/form", web::get().to(leave_handlers::form))
        .route("/leave-requests", web::post().to(leave_handlers::create))
        .route("/leave-requests/{id}", web::post().to(leave_handlers::update))
        // Onboarding wizard: /personal BEFORE /{employee_id}/{step}
        .route("/onboarding/steps", web::get().to(onboarding_handlers::steps))
        .route("/onboarding/personal", web::post().to(onboarding_handlers::start))
        .route("/onboarding/{employee_id}/{step}", web::post().to(onboarding_handlers::save_step));
}

pub async fn not_found() -> HttpResponse {
    let html = include_str!("../templates/errors/404.html");
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
