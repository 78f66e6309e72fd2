//! Leave request persistence: creation, pending-only updates.

use erp::enums::RecordAction;
use erp::models::leave_request::{self, LeaveInput};
use erp::models::table::{engine, registry};

mod common;
use common::*;

fn input(employee_id: i64, starts: &str, ends: &str) -> LeaveInput {
    let id = employee_id.to_string();
    LeaveInput::parse(&form(&[
        ("employee_id", id.as_str()),
        ("leave_type", "annual"),
        ("starts_on", starts),
        ("ends_on", ends),
        ("reason", "Family visit"),
    ]))
    .expect("valid leave input")
}

#[tokio::test]
async fn create_stores_pending_request_with_inclusive_days() {
    let Some(db) = setup_test_db().await else { return };
    let employee = insert_employee(&db, "Alice", "Moreau", None, "active").await;

    let leave = input(employee, "2025-08-04", "2025-08-15");
    let id = leave_request::create(db.pool(), db.tenant_id, &leave).await.unwrap();

    assert_eq!(leave_status(&db, id).await, "pending");
    let days: i32 = sqlx::query_scalar("SELECT days FROM leave_requests WHERE id = $1")
        .bind(id)
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(days, 12);
}

#[tokio::test]
async fn updates_apply_only_while_pending() {
    let Some(db) = setup_test_db().await else { return };
    let employee = insert_employee(&db, "Bruno", "Keller", None, "active").await;
    let id = leave_request::create(db.pool(), db.tenant_id, &input(employee, "2025-03-10", "2025-03-12"))
        .await
        .unwrap();

    let changed = leave_request::update_pending(db.pool(), db.tenant_id, id, &input(employee, "2025-03-10", "2025-03-14"))
        .await
        .unwrap();
    assert_eq!(changed, 1);

    let table = registry::find("leave-requests").unwrap();
    let approve = table.effect_for(RecordAction::Approve).unwrap();
    engine::apply_effect(db.pool(), &table, db.tenant_id, &approve, &[id], None).await.unwrap();

    let changed = leave_request::update_pending(db.pool(), db.tenant_id, id, &input(employee, "2025-03-10", "2025-03-20"))
        .await
        .unwrap();
    assert_eq!(changed, 0);
    assert_eq!(leave_request::find_status(db.pool(), db.tenant_id, id).await.unwrap().as_deref(), Some("approved"));
}

#[tokio::test]
async fn status_lookup_is_tenant_scoped() {
    let Some(db) = setup_test_db().await else { return };
    let Some(other) = setup_test_db().await else { return };
    let employee = insert_employee(&db, "Chiara", "Russo", None, "active").await;
    let id = insert_leave(&db, employee, "sick", "pending").await;

    assert!(leave_request::find_status(db.pool(), db.tenant_id, id).await.unwrap().is_some());
    assert!(leave_request::find_status(other.pool(), other.tenant_id, id).await.unwrap().is_none());
}
