mod actions;
mod list;

pub use actions::{bulk, row_action};
pub use list::{data, export_csv, filters, page};

use serde::Serialize;

use crate::errors::AppError;
use crate::models::table::{Table, registry};

/// Resolve a table from the `{name}` path segment.
fn find_table(name: &str) -> Result<Table, AppError> {
    registry::find(name).ok_or(AppError::NotFound)
}

/// JSON answer to a bulk or row action.
#[derive(Debug, Serialize)]
pub struct ActionOutcome {
    pub action: &'static str,
    pub requested: usize,
    pub affected: u64,
    pub message: String,
}

impl ActionOutcome {
    fn new(action: &'static str, label: &str, requested: usize, affected: u64) -> Self {
        let message = match (requested, affected) {
            (_, 0) => format!("{label}: no rows were changed"),
            (r, a) if a as usize == r => format!("{label}: {a} row(s) updated"),
            (r, a) => format!("{label}: {a} of {r} row(s) updated, the rest were skipped"),
        };
        ActionOutcome { action, requested, affected, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_message_reports_skipped_rows() {
        assert_eq!(ActionOutcome::new("approve", "Approve", 3, 3).message, "Approve: 3 row(s) updated");
        assert_eq!(
            ActionOutcome::new("approve", "Approve", 3, 1).message,
            "Approve: 1 of 3 row(s) updated, the rest were skipped"
        );
        assert_eq!(ActionOutcome::new("delete", "Delete", 2, 0).message, "Delete: no rows were changed");
    }

    #[test]
    fn unknown_table_is_not_found() {
        assert!(matches!(find_table("payroll"), Err(AppError::NotFound)));
        assert!(find_table("employees").is_ok());
    }
}
