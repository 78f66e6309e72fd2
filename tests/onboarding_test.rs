//! Onboarding wizard persistence, step by step.

use chrono::NaiveDate;

use erp::models::employee::{
    self, AccountDetails, ContactDetails, EducationDetails, EmergencyContact, EmploymentDetails, PersonalDetails,
};
use erp::models::{department, user_access};

mod common;
use common::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

#[tokio::test]
async fn wizard_steps_build_up_one_employee() {
    let Some(db) = setup_test_db().await else { return };
    let finance = insert_department(&db, "Finance").await;
    let pool = db.pool();

    let personal = PersonalDetails::parse(&form(&[("first_name", "Farid"), ("last_name", "Haddad"), ("gender", "male")]), today())
        .unwrap();
    let id = employee::create(pool, db.tenant_id, &personal).await.unwrap();
    let found = employee::find_onboarding(pool, db.tenant_id, id).await.unwrap().unwrap();
    assert_eq!(found.status, "onboarding");
    assert_eq!(found.full_name(), "Farid Haddad");

    let contact = ContactDetails::parse(&form(&[("email", "Farid@Acme.Test"), ("city", "Casablanca")])).unwrap();
    assert_eq!(employee::update_contact(pool, db.tenant_id, id, &contact).await.unwrap(), 1);

    let department_id = finance.to_string();
    let job = EmploymentDetails::parse(&form(&[
        ("department_id", department_id.as_str()),
        ("job_title", "Analyst"),
        ("employment_type", "internship"),
        ("hired_on", "2024-07-01"),
    ]))
    .unwrap();
    assert!(department::exists(pool, db.tenant_id, finance).await.unwrap());
    employee::update_employment(pool, db.tenant_id, id, &job).await.unwrap();

    let education = EducationDetails::parse(
        &form(&[("degree_type", "bachelor"), ("institution", "Université Hassan II")]),
        today(),
    )
    .unwrap();
    assert!(employee::add_education(pool, db.tenant_id, id, &education).await.unwrap() > 0);

    let emergency = EmergencyContact::parse(&form(&[
        ("emergency_contact_name", "Leila Haddad"),
        ("emergency_contact_phone", "+212 600 000 000"),
        ("emergency_contact_relation", "Sister"),
    ]))
    .unwrap();
    employee::update_emergency_contact(pool, db.tenant_id, id, &emergency).await.unwrap();

    assert_eq!(employee::finish_onboarding(pool, db.tenant_id, id).await.unwrap(), 1);
    let found = employee::find_onboarding(pool, db.tenant_id, id).await.unwrap().unwrap();
    assert_eq!(found.status, "active");
    assert!(!found.is_onboarding());
    assert_eq!(found.email.as_deref(), Some("farid@acme.test"));
}

#[tokio::test]
async fn finishing_onboarding_leaves_other_statuses_alone() {
    let Some(db) = setup_test_db().await else { return };
    let pool = db.pool();
    let gone = insert_employee(&db, "Tomas", "Berg", None, "terminated").await;
    let away = insert_employee(&db, "Ines", "Duarte", None, "on-leave").await;

    assert_eq!(employee::finish_onboarding(pool, db.tenant_id, gone).await.unwrap(), 0);
    assert_eq!(employee::finish_onboarding(pool, db.tenant_id, away).await.unwrap(), 0);
    let found = employee::find_onboarding(pool, db.tenant_id, gone).await.unwrap().unwrap();
    assert_eq!(found.status, "terminated");
    let found = employee::find_onboarding(pool, db.tenant_id, away).await.unwrap().unwrap();
    assert_eq!(found.status, "on-leave");
}

#[tokio::test]
async fn account_creation_is_unique_per_tenant_email() {
    let Some(db) = setup_test_db().await else { return };
    let first = insert_employee(&db, "Elena", "Novak", None, "onboarding").await;
    let second = insert_employee(&db, "Elena", "Other", None, "onboarding").await;

    let account = AccountDetails::parse(&form(&[("create_account", "on"), ("account_email", "elena@shared.test")])).unwrap();
    let email = account.email.unwrap();

    let created = user_access::create_for_employee(db.pool(), db.tenant_id, first, "Elena Novak", &email).await.unwrap();
    assert!(created.is_some());
    let duplicate = user_access::create_for_employee(db.pool(), db.tenant_id, second, "Elena Other", &email).await.unwrap();
    assert!(duplicate.is_none());
}

#[tokio::test]
async fn departments_of_other_tenants_do_not_exist() {
    let Some(db) = setup_test_db().await else { return };
    let Some(other) = setup_test_db().await else { return };
    let theirs = insert_department(&other, "Legal").await;

    assert!(!department::exists(db.pool(), db.tenant_id, theirs).await.unwrap());
    assert!(department::find_all(db.pool(), db.tenant_id).await.unwrap().is_empty());
}
