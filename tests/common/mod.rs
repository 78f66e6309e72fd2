//! Shared test infrastructure for database-backed tests.
//!
//! Tests connect to the Postgres database named by `DATABASE_URL`, run the
//! migrations and create a fresh tenant, so tests never see each other's rows.
//! When `DATABASE_URL` is unset the database tests are skipped.

#![allow(dead_code)]

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use erp::config::AppConfig;

pub struct TestDb {
    pool: PgPool,
    pub tenant_id: i64,
    pub slug: String,
}

impl TestDb {
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Migrated pool plus a tenant of its own, or `None` without a database.
pub async fn setup_test_db() -> Option<TestDb> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping database test");
        return None;
    };
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");
    erp::db::run_migrations(&pool).await.expect("Failed to run migrations");

    let slug = format!("test-{:016x}", rand::random::<u64>());
    let tenant_id: i64 = sqlx::query_scalar("INSERT INTO tenants (slug, name) VALUES ($1, $2) RETURNING id")
        .bind(&slug)
        .bind(format!("Tenant {slug}"))
        .fetch_one(&pool)
        .await
        .expect("Failed to create tenant");

    Some(TestDb { pool, tenant_id, slug })
}

/// Config for handler tests that never reach the database.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/unused".to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
        session_key: None,
        default_tenant: "acme".to_string(),
        table_per_page: 25,
        seed_demo: false,
    }
}

pub async fn insert_department(db: &TestDb, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO departments (tenant_id, name) VALUES ($1, $2) RETURNING id")
        .bind(db.tenant_id)
        .bind(name)
        .fetch_one(db.pool())
        .await
        .expect("insert department")
}

pub async fn insert_employee(db: &TestDb, first: &str, last: &str, department_id: Option<i64>, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO employees (tenant_id, first_name, last_name, email, department_id, job_title, \
                                employment_type, hired_on, status) \
         VALUES ($1, $2, $3, $4, $5, 'Analyst', 'full-time', DATE '2023-03-01', $6) RETURNING id",
    )
    .bind(db.tenant_id)
    .bind(first)
    .bind(last)
    .bind(format!("{}@{}.test", first.to_lowercase(), db.slug))
    .bind(department_id)
    .bind(status)
    .fetch_one(db.pool())
    .await
    .expect("insert employee")
}

pub async fn insert_leave(db: &TestDb, employee_id: i64, leave_type: &str, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO leave_requests (tenant_id, employee_id, leave_type, starts_on, ends_on, days, status) \
         VALUES ($1, $2, $3, DATE '2025-08-04', DATE '2025-08-08', 5, $4) RETURNING id",
    )
    .bind(db.tenant_id)
    .bind(employee_id)
    .bind(leave_type)
    .bind(status)
    .fetch_one(db.pool())
    .await
    .expect("insert leave request")
}

pub async fn leave_status(db: &TestDb, id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM leave_requests WHERE id = $1")
        .bind(id)
        .fetch_one(db.pool())
        .await
        .expect("read leave status")
}

pub fn form(pairs: &[(&str, &str)]) -> std::collections::HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
