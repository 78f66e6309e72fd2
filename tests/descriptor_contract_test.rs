//! Contracts every registered table descriptor must honour.

use regex::Regex;

use erp::enums::{EmploymentType, Enumeration, LeaveStatus, RecordAction};
use erp::models::table::{ColumnKind, registry};

#[test]
fn names_are_url_safe_and_stable() {
    let pattern = Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap();
    for table in registry::all() {
        assert!(pattern.is_match(table.name()), "{} is not URL-safe", table.name());
        assert_eq!(registry::find(table.name()).unwrap().name(), table.name());
        assert!(!table.title().is_empty());
    }
    assert_eq!(registry::all().len(), registry::NAMES.len());
}

#[test]
fn every_data_column_is_backed_by_a_query_field() {
    for table in registry::all() {
        for column in table.columns() {
            if matches!(column.kind, ColumnKind::Action) {
                continue;
            }
            assert!(
                table.query().lookup(column.key).is_some(),
                "{}: column {} has no query field",
                table.name(),
                column.key
            );
        }
    }
}

#[test]
fn column_keys_are_unique_and_action_column_is_last() {
    for table in registry::all() {
        let keys: Vec<_> = table.columns().iter().map(|c| c.key).collect();
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), keys.len(), "{} repeats a column key", table.name());
        assert!(matches!(table.columns().last().unwrap().kind, ColumnKind::Action), "{}", table.name());
    }
}

#[test]
fn filters_and_sorts_target_known_fields() {
    for table in registry::all() {
        for (key, _) in table.descriptor().filters() {
            assert!(table.query().lookup(key).is_some(), "{}: filter {key} unknown", table.name());
        }
        for key in table.sortable_keys() {
            assert!(table.query().lookup(key).is_some(), "{}: sort {key} unknown", table.name());
        }
    }
}

#[test]
fn declared_bulk_actions_all_have_effects() {
    for table in registry::all() {
        for action in table.descriptor().bulk_actions() {
            assert!(!action.is_navigation(), "{}: {} is navigation", table.name(), action.value());
            assert!(table.effect_for(action).is_some(), "{}: bulk {} has no effect", table.name(), action.value());
            assert!(table.dialogs().contains_key(action.value()));
        }
        if !table.descriptor().has_select_column() {
            assert!(RecordAction::CASES.iter().all(|&a| !table.allows_bulk(a)), "{}", table.name());
        }
    }
}

#[test]
fn badge_columns_always_resolve() {
    for table in registry::all() {
        for column in table.columns() {
            if let ColumnKind::Badge(mapping) = &column.kind {
                assert!(!mapping.resolve(None).label.is_empty());
                assert!(!mapping.resolve(Some("legacy-value")).label.is_empty());
            }
        }
    }
}

#[test]
fn leave_request_actions_follow_status() {
    let names = |s: LeaveStatus| s.actions().iter().map(|a| a.value()).collect::<Vec<_>>();
    assert_eq!(names(LeaveStatus::Pending), vec!["view", "edit", "approve", "reject", "delete"]);
    assert_eq!(names(LeaveStatus::Approved), vec!["view", "cancel", "delete"]);
    assert_eq!(names(LeaveStatus::Rejected), vec!["view", "delete"]);
    assert_eq!(names(LeaveStatus::Cancelled), vec!["view", "delete"]);
}

#[test]
fn employment_type_lookup_is_partial() {
    assert_eq!(EmploymentType::from_value("full-time"), Some(EmploymentType::FullTime));
    assert_eq!(EmploymentType::from_value("bogus"), None);
}
