// src/models/table/export.rs
use super::{ColumnKind, Row, Table};
use super::render::render_cell;

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// CSV of the given rows: one header line of column titles, action column left out.
pub fn to_csv(table: &Table, rows: &[Row]) -> String {
    let columns: Vec<_> = table
        .columns()
        .iter()
        .filter(|c| !matches!(c.kind, ColumnKind::Action))
        .collect();

    let mut csv = columns.iter().map(|c| escape_csv(c.title)).collect::<Vec<_>>().join(",");
    csv.push('\n');
    for row in rows {
        let line = columns
            .iter()
            .map(|c| escape_csv(&render_cell(c, row, &[]).text()))
            .collect::<Vec<_>>()
            .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

/// `Content-Disposition` filename for a table export.
pub fn filename(table: &Table) -> String {
    format!("{}-{}.csv", table.name(), chrono::Utc::now().format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RecordAction;
    use crate::models::table::{ColumnDefinition, TableDescriptor, TableQuery};
    use serde_json::json;

    struct Contacts;

    impl TableDescriptor for Contacts {
        fn name(&self) -> &'static str { "contacts" }
        fn title(&self) -> &'static str { "Contacts" }
        fn module(&self) -> &'static str { "CRM" }
        fn query(&self) -> TableQuery {
            TableQuery::from("contacts", "c").field("name", "c.name").field("note", "c.note")
        }
        fn build(&self) -> Vec<ColumnDefinition> {
            vec![
                ColumnDefinition::plain("name", "Name"),
                ColumnDefinition::plain("note", "Note, internal"),
                ColumnDefinition::actions(),
            ]
        }
        fn row_actions(&self, _row: &Row) -> Vec<RecordAction> {
            vec![RecordAction::Delete]
        }
    }

    #[test]
    fn escapes_fields_and_skips_actions() {
        let table = Table::new(Box::new(Contacts));
        let rows = vec![
            json!({"id": 1, "name": "Keller, Bruno", "note": "says \"hi\""}).as_object().cloned().unwrap(),
            json!({"id": 2, "name": "Novak"}).as_object().cloned().unwrap(),
        ];
        let csv = to_csv(&table, &rows);
        assert_eq!(
            csv,
            "Name,\"Note, internal\"\n\"Keller, Bruno\",\"says \"\"hi\"\"\"\nNovak,-\n"
        );
    }

    #[test]
    fn filename_carries_table_name() {
        let table = Table::new(Box::new(Contacts));
        assert!(filename(&table).starts_with("contacts-"));
        assert!(filename(&table).ends_with(".csv"));
    }
}
