use super::RecordAction;

enumeration! {
    pub enum LeaveType ("leave_type") {
        Annual => "annual", "Annual Leave", "sun", "blue";
        Sick => "sick", "Sick Leave", "thermometer", "red";
        Maternity => "maternity", "Maternity Leave", "baby", "pink";
        Paternity => "paternity", "Paternity Leave", "baby", "indigo";
        Compassionate => "compassionate", "Compassionate Leave", "heart", "purple";
        Unpaid => "unpaid", "Unpaid Leave", "wallet", "gray";
    }
}

enumeration! {
    pub enum LeaveStatus ("leave_status") {
        Pending => "pending", "Pending", "clock", "amber";
        Approved => "approved", "Approved", "check-circle", "green";
        Rejected => "rejected", "Rejected", "x-circle", "red";
        Cancelled => "cancelled", "Cancelled", "ban", "gray";
    }
}

impl LeaveStatus {
    /// Actions offered on a leave request in this status.
    pub fn actions(self) -> &'static [RecordAction] {
        use RecordAction::*;
        match self {
            LeaveStatus::Pending => &[View, Edit, Approve, Reject, Delete],
            LeaveStatus::Approved => &[View, Cancel, Delete],
            LeaveStatus::Rejected | LeaveStatus::Cancelled => &[View, Delete],
        }
    }

    /// Statuses an action may start from and the status it produces.
    pub fn transition(action: RecordAction) -> Option<(Vec<LeaveStatus>, LeaveStatus)> {
        match action {
            RecordAction::Approve => Some((vec![LeaveStatus::Pending], LeaveStatus::Approved)),
            RecordAction::Reject => Some((vec![LeaveStatus::Pending], LeaveStatus::Rejected)),
            RecordAction::Cancel => Some((vec![LeaveStatus::Approved], LeaveStatus::Cancelled)),
            _ => None,
        }
    }

    pub fn is_editable(self) -> bool {
        self == LeaveStatus::Pending
    }
}
