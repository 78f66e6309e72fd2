// src/models/table/dialog.rs
use serde::Serialize;

use super::effect::Effect;
use crate::enums::{Enumeration, RecordAction};
use crate::forms::{FieldKind, FormField};

/// Placeholder the client swaps for the row id in a dialog url.
pub const ROW_ID: &str = ":id";

/// What the confirm-action dialog needs to ask for and submit one action.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmDialog {
    pub action: &'static str,
    pub title: String,
    pub message: String,
    pub url: String,
    pub method: &'static str,
    pub confirm_label: &'static str,
    pub variant: &'static str,
    pub fields: Vec<FormField>,
}

impl ConfirmDialog {
    pub fn for_action(table: &str, noun: &str, action: RecordAction, effect: &Effect) -> Self {
        let message = match effect {
            Effect::Delete => format!("This permanently removes the selected {noun}. This cannot be undone."),
            Effect::Transition(t) => format!("The selected {noun} will be marked {}.", t.to.replace('-', " ")),
        };
        let fields = effect
            .note()
            .map(|note| {
                let field = FormField::new(note.field, note.label, FieldKind::Textarea);
                vec![if note.required { field.required() } else { field }]
            })
            .unwrap_or_default();
        ConfirmDialog {
            action: action.value(),
            title: format!("{} {noun}?", action.label()),
            message,
            url: format!("/tables/{table}/rows/{ROW_ID}/{}", action.value()),
            method: "POST",
            confirm_label: action.label(),
            variant: action.variant(),
            fields,
        }
    }
}
