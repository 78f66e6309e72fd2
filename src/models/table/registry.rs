// src/models/table/registry.rs
use serde::Serialize;

use super::{Table, TableDescriptor};
use crate::models::employee::EmployeeTable;
use crate::models::leave_request::LeaveRequestTable;
use crate::models::program::ProgramTable;
use crate::models::role::RoleTable;
use crate::models::schedule::ScheduleTable;
use crate::models::shift_rotation::ShiftRotationTable;
use crate::models::user_access::UserAccessTable;

/// Every table name, in navigation order.
pub const NAMES: &[&str] = &[
    "employees",
    "leave-requests",
    "programs",
    "schedules",
    "shift-rotations",
    "roles",
    "user-access",
];

fn descriptor(name: &str) -> Option<Box<dyn TableDescriptor>> {
    let d: Box<dyn TableDescriptor> = match name {
        "employees" => Box::new(EmployeeTable),
        "leave-requests" => Box::new(LeaveRequestTable),
        "programs" => Box::new(ProgramTable),
        "roles" => Box::new(RoleTable),
        "schedules" => Box::new(ScheduleTable),
        "shift-rotations" => Box::new(ShiftRotationTable),
        "user-access" => Box::new(UserAccessTable),
        _ => return None,
    };
    Some(d)
}

/// A freshly built table for `name`.
pub fn find(name: &str) -> Option<Table> {
    descriptor(name).map(Table::new)
}

pub fn all() -> Vec<Table> {
    NAMES.iter().filter_map(|n| find(n)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct NavLink {
    pub name: &'static str,
    pub title: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavGroup {
    pub module: &'static str,
    pub links: Vec<NavLink>,
}

/// Table links grouped by module, groups in first-seen order.
pub fn navigation() -> Vec<NavGroup> {
    let mut groups: Vec<NavGroup> = vec![];
    for table in all() {
        let module = table.descriptor().module();
        let link = NavLink { name: table.name(), title: table.title(), url: format!("/tables/{}", table.name()) };
        match groups.iter_mut().find(|g| g.module == module) {
            Some(group) => group.links.push(link),
            None => groups.push(NavGroup { module, links: vec![link] }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves_to_its_own_descriptor() {
        for name in NAMES {
            let table = find(name).unwrap();
            assert_eq!(table.name(), *name);
        }
        assert!(find("payroll").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn navigation_groups_by_module() {
        let nav = navigation();
        let modules: Vec<_> = nav.iter().map(|g| g.module).collect();
        assert_eq!(modules, vec!["HR", "Workforce", "Administration"]);
        assert_eq!(nav[0].links[1].url, "/tables/leave-requests");
    }
}
