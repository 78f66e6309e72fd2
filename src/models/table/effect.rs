// src/models/table/effect.rs
use std::collections::HashMap;

use crate::enums::Enumeration;
use crate::forms::FieldErrors;
use crate::forms::validate::{non_empty, validate_optional, validate_required};

/// A form field an action writes into a column, e.g. a rejection reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub field: &'static str,
    pub column: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub max_len: usize,
}

/// Move rows from one of `from` to `to`. An empty `from` means any state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub column: &'static str,
    pub to: &'static str,
    pub from: Vec<&'static str>,
    /// SQL type the bound text is cast to, for non-text columns.
    pub cast: Option<&'static str>,
    /// Timestamp column set to `NOW()`.
    pub stamp: Option<&'static str>,
    pub note: Option<Note>,
}

impl Transition {
    pub fn new(column: &'static str, from: Vec<&'static str>, to: &'static str) -> Self {
        Transition { column, to, from, cast: None, stamp: None, note: None }
    }

    /// From an enumeration's `transition()` table.
    pub fn of<E: Enumeration>(column: &'static str, (from, to): (Vec<E>, E)) -> Self {
        Transition::new(column, from.into_iter().map(E::value).collect(), to.value())
    }

    pub fn cast(mut self, sql_type: &'static str) -> Self {
        self.cast = Some(sql_type);
        self
    }

    pub fn stamp(mut self, column: &'static str) -> Self {
        self.stamp = Some(column);
        self
    }

    pub fn note(mut self, note: Note) -> Self {
        self.note = Some(note);
        self
    }
}

/// What a bulk or row action does to the selected rows.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Delete,
    Transition(Transition),
}

/// A parameter bound after `$1` (tenant) and `$2` (ids).
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    Text(Option<String>),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub binds: Vec<Bind>,
}

impl Effect {
    pub fn note(&self) -> Option<&Note> {
        match self {
            Effect::Transition(t) => t.note.as_ref(),
            Effect::Delete => None,
        }
    }

    /// Validate the note field submitted with the action, if any.
    pub fn read_note(&self, form: &HashMap<String, String>) -> Result<Option<String>, FieldErrors> {
        let Some(note) = self.note() else {
            return Ok(None);
        };
        let value = form.get(note.field).map(|s| s.trim()).unwrap_or_default();
        let mut errors = FieldErrors::new();
        if note.required {
            errors.check(note.field, validate_required(value, note.label));
        }
        errors.check(note.field, validate_optional(value, note.label, note.max_len));
        errors.into_result()?;
        Ok(non_empty(value))
    }

    /// The statement applying this effect to `$2` ids of tenant `$1`.
    pub fn statement(&self, table: &str, note: Option<String>) -> Statement {
        match self {
            Effect::Delete => Statement {
                sql: format!("DELETE FROM {table} WHERE tenant_id = $1 AND id = ANY($2)"),
                binds: vec![],
            },
            Effect::Transition(t) => {
                let mut binds = vec![Bind::Text(Some(t.to.to_string()))];
                let value = match t.cast {
                    Some(ty) => format!("CAST($3 AS {ty})"),
                    None => "$3".to_string(),
                };
                let mut sets = vec![format!("{} = {value}", t.column)];
                if let Some(stamp) = t.stamp {
                    sets.push(format!("{stamp} = NOW()"));
                }
                if let Some(n) = &t.note {
                    binds.push(Bind::Text(note));
                    sets.push(format!("{} = ${}", n.column, binds.len() + 2));
                }
                sets.push("updated_at = NOW()".to_string());

                let mut sql = format!(
                    "UPDATE {table} SET {} WHERE tenant_id = $1 AND id = ANY($2)",
                    sets.join(", ")
                );
                if !t.from.is_empty() {
                    binds.push(Bind::List(t.from.iter().map(|s| s.to_string()).collect()));
                    sql.push_str(&format!(" AND {}::TEXT = ANY(${})", t.column, binds.len() + 2));
                }
                Statement { sql, binds }
            }
        }
    }
}
