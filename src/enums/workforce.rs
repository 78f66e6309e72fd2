use super::RecordAction;

enumeration! {
    pub enum ProgramStatus ("program_status") {
        Draft => "draft", "Draft", "file", "gray";
        Active => "active", "Active", "play-circle", "green";
        Completed => "completed", "Completed", "check-circle", "blue";
        Archived => "archived", "Archived", "archive", "gray";
    }
}

enumeration! {
    pub enum ScheduleStatus ("schedule_status") {
        Draft => "draft", "Draft", "file", "gray";
        Published => "published", "Published", "send", "green";
        Archived => "archived", "Archived", "archive", "gray";
    }
}

enumeration! {
    pub enum ShiftType ("shift_type") {
        Morning => "morning", "Morning", "sunrise", "amber";
        Afternoon => "afternoon", "Afternoon", "sun", "orange";
        Evening => "evening", "Evening", "sunset", "purple";
        Night => "night", "Night", "moon", "indigo";
    }
}

enumeration! {
    pub enum RotationFrequency ("rotation_frequency") {
        Daily => "daily", "Daily", "calendar", "teal";
        Weekly => "weekly", "Weekly", "calendar-days", "blue";
        BiWeekly => "bi-weekly", "Every Two Weeks", "calendar-range", "indigo";
        Monthly => "monthly", "Monthly", "calendar-clock", "purple";
    }
}

impl ScheduleStatus {
    pub fn actions(self) -> &'static [RecordAction] {
        use RecordAction::*;
        match self {
            ScheduleStatus::Draft => &[View, Edit, Publish, Delete],
            ScheduleStatus::Published => &[View, Archive],
            ScheduleStatus::Archived => &[View, Delete],
        }
    }

    pub fn transition(action: RecordAction) -> Option<(Vec<ScheduleStatus>, ScheduleStatus)> {
        match action {
            RecordAction::Publish => Some((vec![ScheduleStatus::Draft], ScheduleStatus::Published)),
            RecordAction::Archive => Some((vec![ScheduleStatus::Published], ScheduleStatus::Archived)),
            _ => None,
        }
    }
}

impl ProgramStatus {
    pub fn transition(action: RecordAction) -> Option<(Vec<ProgramStatus>, ProgramStatus)> {
        match action {
            RecordAction::Archive => Some((
                vec![ProgramStatus::Draft, ProgramStatus::Active, ProgramStatus::Completed],
                ProgramStatus::Archived,
            )),
            _ => None,
        }
    }
}
