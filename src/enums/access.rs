use super::RecordAction;

enumeration! {
    pub enum UserStatus ("user_status") {
        Invited => "invited", "Invited", "mail", "amber";
        Active => "active", "Active", "check-circle", "green";
        Inactive => "inactive", "Inactive", "pause-circle", "gray";
        Suspended => "suspended", "Suspended", "ban", "red";
    }
}

impl UserStatus {
    /// Actions offered for an account in this status.
    pub fn actions(self) -> &'static [RecordAction] {
        match self {
            UserStatus::Active => &[RecordAction::Edit, RecordAction::Suspend],
            UserStatus::Invited | UserStatus::Inactive | UserStatus::Suspended => {
                &[RecordAction::Edit, RecordAction::Activate]
            }
        }
    }

    /// Statuses an action may start from and the status it produces.
    pub fn transition(action: RecordAction) -> Option<(Vec<UserStatus>, UserStatus)> {
        match action {
            RecordAction::Activate => Some((
                vec![UserStatus::Invited, UserStatus::Inactive, UserStatus::Suspended],
                UserStatus::Active,
            )),
            RecordAction::Suspend => Some((vec![UserStatus::Active], UserStatus::Suspended)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Enumeration;

    #[test]
    fn offered_actions_always_have_a_legal_transition() {
        for status in UserStatus::CASES {
            for action in status.actions() {
                if let Some((from, _)) = UserStatus::transition(*action) {
                    assert!(from.contains(status), "{status:?} -> {action:?}");
                }
            }
        }
    }
}
