enumeration! {
    /// Row and bulk operations a table may offer.
    pub enum RecordAction ("record_action") {
        View => "view", "View", "eye", "gray";
        Edit => "edit", "Edit", "pencil", "gray";
        Approve => "approve", "Approve", "check", "green";
        Reject => "reject", "Reject", "x", "red";
        Cancel => "cancel", "Cancel", "ban", "amber";
        Publish => "publish", "Publish", "send", "blue";
        Archive => "archive", "Archive", "archive", "gray";
        Activate => "activate", "Activate", "play", "green";
        Deactivate => "deactivate", "Deactivate", "pause", "amber";
        Suspend => "suspend", "Suspend", "ban", "red";
        Delete => "delete", "Delete", "trash", "red";
    }
}

impl RecordAction {
    /// Navigation actions open a page instead of changing rows.
    pub fn is_navigation(self) -> bool {
        matches!(self, RecordAction::View | RecordAction::Edit)
    }

    /// Button variant for bulk menus and dialogs.
    pub fn variant(self) -> &'static str {
        match self {
            RecordAction::Reject | RecordAction::Suspend | RecordAction::Delete => "destructive",
            _ => "default",
        }
    }
}
