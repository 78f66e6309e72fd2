//! Server half of the form bridge: field schemas sent to the client and the
//! ordered field-error mapping sent back when a submission fails validation.

use serde::Serialize;
use serde::ser::SerializeMap;
use std::collections::HashMap;
use std::fmt;

use crate::enums::{EnumOption, Enumeration};

pub mod validate;

/// Ordered `field -> message` mapping. The first entry is the one the client
/// toasts and focuses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(String, String)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding a single failure.
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record an error; later messages for an already-failed field are dropped.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push((field.to_string(), message.into()));
        }
    }

    /// Record the outcome of a validator that returns `Some(message)` on failure.
    pub fn check(&mut self, field: &str, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.add(field, message);
        }
    }

    /// Keep a parsed value, or record its error under `field`.
    pub fn take<T>(&mut self, field: &str, parsed: Result<T, String>) -> Option<T> {
        match parsed {
            Ok(v) => Some(v),
            Err(message) => {
                self.add(field, message);
                None
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|(f, _)| f == field).map(|(_, m)| m.as_str())
    }

    pub fn first(&self) -> Option<(&str, &str)> {
        self.0.first().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(f, _)| f.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, message) in &self.0 {
            map.serialize_entry(field, message)?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.0.iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Submitted form data as posted by the dialog and wizard scripts.
pub type FormData = HashMap<String, String>;

/// Trimmed value of `key`; empty when the field was not submitted.
pub fn value<'a>(form: &'a FormData, key: &str) -> &'a str {
    form.get(key).map(|v| v.trim()).unwrap_or_default()
}

/// Checkbox semantics: `on`, `true`, `1` and `yes` are checked.
pub fn checked(form: &FormData, key: &str) -> bool {
    matches!(value(form, key), "on" | "true" | "1" | "yes")
}

/// Body of an HTTP 422 response.
#[derive(Debug, Serialize)]
pub struct ValidationBody<'a> {
    pub message: &'a str,
    pub errors: &'a FieldErrors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Number,
    Textarea,
    Checkbox,
    Select,
}

/// One input in a dialog or wizard step.
#[derive(Debug, Clone, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl From<EnumOption> for SelectOption {
    fn from(o: EnumOption) -> Self {
        SelectOption { value: o.value.to_string(), label: o.label.to_string() }
    }
}

impl FormField {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FormField { name, label, kind, required: false, options: vec![] }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Select whose options come from an enumeration, in declaration order.
    pub fn select<E: Enumeration>(name: &'static str, label: &'static str) -> Self {
        FormField {
            options: E::options().into_iter().map(SelectOption::from).collect(),
            ..FormField::new(name, label, FieldKind::Select)
        }
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }
}
