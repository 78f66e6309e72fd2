//! Closed value sets shared by table descriptors and form dropdowns.
//!
//! Every enumeration is declared through [`enumeration!`], which fixes the
//! case order (used as display order), the stored value, the label, and the
//! icon/color pair used by badges.

use serde::Serialize;

/// Declares a string-valued enumeration and implements [`Enumeration`],
/// `Display` (label), and serde (value) for it.
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($key:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal, $label:literal, $icon:literal, $color:literal;
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::enums::Enumeration for $name {
            const NAME: &'static str = $key;
            const CASES: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn value(self) -> &'static str {
                match self { $( Self::$variant => $value, )+ }
            }

            fn label(self) -> &'static str {
                match self { $( Self::$variant => $label, )+ }
            }

            fn icon(self) -> &'static str {
                match self { $( Self::$variant => $icon, )+ }
            }

            fn color(self) -> &'static str {
                match self { $( Self::$variant => $color, )+ }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::enums::Enumeration::label(*self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::Enumeration::value(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::enums::Enumeration>::from_value(&raw).ok_or_else(|| {
                    serde::de::Error::custom(format!("unknown {} value: {raw}", $key))
                })
            }
        }
    };
}

mod access;
mod actions;
mod hr;
mod leave;
mod workforce;

pub use access::UserStatus;
pub use actions::RecordAction;
pub use hr::{DegreeType, EmployeeStatus, EmploymentType, Gender, MaritalStatus, OnboardingStep};
pub use leave::{LeaveStatus, LeaveType};
pub use workforce::{ProgramStatus, RotationFrequency, ScheduleStatus, ShiftType};

/// A closed set of string-valued cases.
pub trait Enumeration: Copy + Eq + 'static {
    /// Registry key, snake_case.
    const NAME: &'static str;
    /// All cases in declaration order.
    const CASES: &'static [Self];

    fn value(self) -> &'static str;
    fn label(self) -> &'static str;
    fn icon(self) -> &'static str;
    fn color(self) -> &'static str;

    fn values() -> Vec<&'static str> {
        Self::CASES.iter().map(|c| c.value()).collect()
    }

    fn options() -> Vec<EnumOption> {
        Self::CASES
            .iter()
            .map(|c| EnumOption { value: c.value(), label: c.label(), icon: c.icon() })
            .collect()
    }

    /// Partial lookup; unknown or legacy values yield `None`.
    fn from_value(value: &str) -> Option<Self> {
        Self::CASES.iter().copied().find(|c| c.value() == value)
    }
}

/// One dropdown entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumOption {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const REGISTRY: &[(&str, fn() -> Vec<EnumOption>)] = &[
    (EmploymentType::NAME, EmploymentType::options),
    (EmployeeStatus::NAME, EmployeeStatus::options),
    (Gender::NAME, Gender::options),
    (MaritalStatus::NAME, MaritalStatus::options),
    (DegreeType::NAME, DegreeType::options),
    (LeaveType::NAME, LeaveType::options),
    (LeaveStatus::NAME, LeaveStatus::options),
    (ProgramStatus::NAME, ProgramStatus::options),
    (ScheduleStatus::NAME, ScheduleStatus::options),
    (ShiftType::NAME, ShiftType::options),
    (RotationFrequency::NAME, RotationFrequency::options),
    (UserStatus::NAME, UserStatus::options),
    (OnboardingStep::NAME, OnboardingStep::options),
];

/// Options of the enumeration registered under `name`.
pub fn options_by_name(name: &str) -> Option<Vec<EnumOption>> {
    REGISTRY.iter().find(|(key, _)| *key == name).map(|(_, options)| options())
}

pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|(key, _)| *key).collect()
}
