use super::Enumeration;

enumeration! {
    pub enum EmploymentType ("employment_type") {
        FullTime => "full-time", "Full Time", "briefcase", "blue";
        PartTime => "part-time", "Part Time", "clock", "indigo";
        Contract => "contract", "Contract", "file-signature", "amber";
        Internship => "internship", "Internship", "graduation-cap", "teal";
        Temporary => "temporary", "Temporary", "hourglass", "gray";
    }
}

enumeration! {
    /// Lifecycle of an employee record; `Onboarding` until the wizard completes.
    pub enum EmployeeStatus ("employee_status") {
        Onboarding => "onboarding", "Onboarding", "user-plus", "amber";
        Active => "active", "Active", "check-circle", "green";
        OnLeave => "on-leave", "On Leave", "plane", "blue";
        Terminated => "terminated", "Terminated", "user-x", "red";
    }
}

enumeration! {
    pub enum Gender ("gender") {
        Male => "male", "Male", "user", "gray";
        Female => "female", "Female", "user", "gray";
        Other => "other", "Other", "user", "gray";
        Undisclosed => "prefer-not-to-say", "Prefer not to say", "eye-off", "gray";
    }
}

enumeration! {
    pub enum MaritalStatus ("marital_status") {
        Single => "single", "Single", "user", "gray";
        Married => "married", "Married", "users", "gray";
        Divorced => "divorced", "Divorced", "user-minus", "gray";
        Widowed => "widowed", "Widowed", "user", "gray";
    }
}

enumeration! {
    pub enum DegreeType ("degree_type") {
        HighSchool => "high-school", "High School", "school", "gray";
        Diploma => "diploma", "Diploma", "scroll", "gray";
        Associate => "associate", "Associate Degree", "book", "teal";
        Bachelor => "bachelor", "Bachelor's Degree", "graduation-cap", "blue";
        Master => "master", "Master's Degree", "graduation-cap", "indigo";
        Doctorate => "doctorate", "Doctorate", "award", "purple";
        Certificate => "certificate", "Professional Certificate", "badge-check", "amber";
    }
}

enumeration! {
    /// Steps of the employee onboarding wizard, in the order they are filled in.
    pub enum OnboardingStep ("onboarding_step") {
        Personal => "personal", "Personal Details", "user", "blue";
        Contact => "contact", "Contact Information", "phone", "blue";
        Employment => "employment", "Employment", "briefcase", "blue";
        Education => "education", "Education", "graduation-cap", "blue";
        EmergencyContact => "emergency-contact", "Emergency Contact", "life-buoy", "blue";
        Account => "account", "System Account", "key", "blue";
    }
}

impl OnboardingStep {
    pub fn next(self) -> Option<OnboardingStep> {
        let position = Self::CASES.iter().position(|s| *s == self)?;
        Self::CASES.get(position + 1).copied()
    }
}
