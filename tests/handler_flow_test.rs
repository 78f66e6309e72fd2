//! Handler flows against a real database with a live session: the CSRF token
//! comes from a rendered page and travels back with the session cookie.

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use regex::Regex;

use erp::config::AppConfig;
use erp::routes;

mod common;
use common::*;

macro_rules! app {
    ($db:expr) => {{
        let config = AppConfig { default_tenant: $db.slug.clone(), ..test_config() };
        test::init_service(
            App::new()
                .wrap(SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                    .cookie_secure(false)
                    .build())
                .app_data(web::Data::new($db.pool().clone()))
                .app_data(web::Data::new(config))
                .configure(routes::configure)
                .default_service(web::to(routes::not_found)),
        )
        .await
    }};
}

/// Render a table page, returning the session cookie and the page's CSRF token.
macro_rules! open_session {
    ($app:expr) => {{
        let req = test::TestRequest::get().uri("/tables/employees").to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = session_cookie(resp.response().cookies()).expect("session cookie");
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        (cookie, csrf_token(&body))
    }};
}

fn session_cookie<'a>(mut cookies: impl Iterator<Item = Cookie<'a>>) -> Option<Cookie<'static>> {
    cookies.next().map(Cookie::into_owned)
}

fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf-token" content="([0-9a-f]+)""#).unwrap();
    re.captures(html).expect("csrf meta tag")[1].to_string()
}

async fn employee_status(db: &TestDb, id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM employees WHERE id = $1")
        .bind(id)
        .fetch_one(db.pool())
        .await
        .expect("read employee status")
}

#[actix_web::test]
async fn wizard_steps_only_apply_to_onboarding_employees() {
    let Some(db) = setup_test_db().await else { return };
    let app = app!(db);
    let (cookie, token) = open_session!(app);
    let gone = insert_employee(&db, "Tomas", "Berg", None, "terminated").await;
    let fresh = insert_employee(&db, "Farid", "Haddad", None, "onboarding").await;

    let req = test::TestRequest::post()
        .uri(&format!("/onboarding/{gone}/account"))
        .cookie(cookie.clone())
        .set_form([("csrf_token", token.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["status"], "Onboarding is already complete for this employee");
    assert_eq!(employee_status(&db, gone).await, "terminated");

    let req = test::TestRequest::post()
        .uri(&format!("/onboarding/{fresh}/contact"))
        .cookie(cookie.clone())
        .set_form([("csrf_token", token.as_str()), ("email", "farid@acme.test"), ("city", "Casablanca")])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["step"], "contact");
    assert_eq!(body["next"], "employment");

    let req = test::TestRequest::post()
        .uri(&format!("/onboarding/{fresh}/account"))
        .cookie(cookie.clone())
        .set_form([("csrf_token", token.as_str())])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["next"], serde_json::Value::Null);
    assert_eq!(employee_status(&db, fresh).await, "active");

    // A finished wizard cannot be replayed.
    let req = test::TestRequest::post()
        .uri(&format!("/onboarding/{fresh}/personal"))
        .cookie(cookie)
        .set_form([("csrf_token", token.as_str()), ("first_name", "Farid"), ("last_name", "H")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn row_action_approves_and_locks_the_request() {
    let Some(db) = setup_test_db().await else { return };
    let app = app!(db);
    let (cookie, token) = open_session!(app);
    let emp = insert_employee(&db, "Chiara", "Rossi", None, "active").await;
    let leave = insert_leave(&db, emp, "annual", "pending").await;

    let req = test::TestRequest::post()
        .uri(&format!("/tables/leave-requests/rows/{leave}/approve"))
        .cookie(cookie.clone())
        .set_form([("csrf_token", token.as_str())])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["action"], "approve");
    assert_eq!(body["affected"], 1);
    assert_eq!(leave_status(&db, leave).await, "approved");

    let emp_id = emp.to_string();
    let req = test::TestRequest::post()
        .uri(&format!("/leave-requests/{leave}"))
        .cookie(cookie.clone())
        .set_form([
            ("csrf_token", token.as_str()),
            ("employee_id", emp_id.as_str()),
            ("leave_type", "sick"),
            ("starts_on", "2025-09-01"),
            ("ends_on", "2025-09-02"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["status"], "Only pending leave requests can be changed");
    assert_eq!(leave_status(&db, leave).await, "approved");

    // Approve is no longer offered on an approved row.
    let req = test::TestRequest::post()
        .uri(&format!("/tables/leave-requests/rows/{leave}/approve"))
        .cookie(cookie)
        .set_form([("csrf_token", token.as_str())])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn bulk_approve_skips_reviewed_rows() {
    let Some(db) = setup_test_db().await else { return };
    let app = app!(db);
    let (cookie, token) = open_session!(app);
    let emp = insert_employee(&db, "Dev", "Patel", None, "active").await;
    let pending = insert_leave(&db, emp, "annual", "pending").await;
    let rejected = insert_leave(&db, emp, "sick", "rejected").await;
    let ids = format!("{pending},{rejected}");

    let req = test::TestRequest::post()
        .uri("/tables/leave-requests/bulk")
        .cookie(cookie)
        .set_form([("csrf_token", token.as_str()), ("action", "approve"), ("ids", ids.as_str())])
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["requested"], 2);
    assert_eq!(body["affected"], 1);
    assert_eq!(leave_status(&db, pending).await, "approved");
    assert_eq!(leave_status(&db, rejected).await, "rejected");
}

#[actix_web::test]
async fn tenant_switch_changes_the_session_tenant() {
    let Some(db) = setup_test_db().await else { return };
    let Some(other) = setup_test_db().await else { return };
    insert_employee(&other, "Mallory", "Other", None, "active").await;
    let app = app!(db);
    let (cookie, token) = open_session!(app);

    let req = test::TestRequest::post()
        .uri("/tenant")
        .cookie(cookie)
        .set_form([("csrf_token", token.as_str()), ("slug", other.slug.as_str()), ("next", "/tables/employees")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get("Location").unwrap(), "/tables/employees");
    let cookie = session_cookie(resp.response().cookies()).expect("updated session cookie");

    let req = test::TestRequest::get().uri("/tables/employees").cookie(cookie.clone()).to_request();
    let html = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(html.contains(&format!("Now working in Tenant {}", other.slug)));
    assert!(html.contains("Mallory Other"));

    let req = test::TestRequest::post()
        .uri("/tenant")
        .cookie(cookie)
        .set_form([("csrf_token", token.as_str()), ("slug", "no-such-tenant")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn data_endpoint_survives_bad_paging_and_rejects_bad_dates() {
    let Some(db) = setup_test_db().await else { return };
    insert_employee(&db, "Alice", "Moreau", None, "active").await;
    let app = app!(db);

    let uri = format!("/tables/employees/data?page={}", i64::MAX);
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(body["total"], 1);
    assert!(body["rows"].as_array().unwrap().is_empty());

    let filter = r#"{"conditions":[{"field":"hired_on","op":"before","value":"next week"}]}"#;
    let query = serde_urlencoded::to_string([("filter", filter)]).unwrap();
    let req = test::TestRequest::get().uri(&format!("/tables/employees/data?{query}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let query = serde_urlencoded::to_string([("search", "%")]).unwrap();
    let req = test::TestRequest::get().uri(&format!("/tables/employees/data?{query}")).to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 0);
}

#[actix_web::test]
async fn leave_form_offers_current_employees() {
    let Some(db) = setup_test_db().await else { return };
    insert_employee(&db, "Ines", "Duarte", None, "active").await;
    insert_employee(&db, "Tomas", "Berg", None, "terminated").await;
    let app = app!(db);

    let req = test::TestRequest::get().uri("/leave-requests/form").to_request();
    let fields: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let options = fields[0]["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["label"], "Ines Duarte");
}
