// src/models/table/query.rs
use std::collections::HashMap;

use super::filter::{self, BuildError, SortDir};
use super::request::TableRequest;

/// An addressable field: the key a column uses and the SQL expression behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: &'static str,
    pub expr: &'static str,
    pub searchable: bool,
}

/// The unfiltered, unsorted data source of a table.
///
/// Expressions and join clauses are declared in code, never taken from the
/// request. Every query is scoped to one tenant through `{alias}.tenant_id`.
#[derive(Debug, Clone)]
pub struct TableQuery {
    table: &'static str,
    alias: &'static str,
    joins: Vec<&'static str>,
    fields: Vec<Field>,
    custom_filters: Vec<(&'static str, &'static str)>,
    default_sort: (&'static str, SortDir),
}

/// Parameterised WHERE and ORDER BY for one request.
/// `$1` is always the tenant id; `params` are bound as text from `$2` on.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub where_sql: String,
    pub params: Vec<String>,
    pub order_by: String,
}

impl TableQuery {
    pub fn from(table: &'static str, alias: &'static str) -> Self {
        TableQuery {
            table,
            alias,
            joins: vec![],
            fields: vec![],
            custom_filters: vec![],
            default_sort: ("id", SortDir::Asc),
        }
    }

    pub fn join(mut self, clause: &'static str) -> Self {
        self.joins.push(clause);
        self
    }

    pub fn field(mut self, key: &'static str, expr: &'static str) -> Self {
        self.fields.push(Field { key, expr, searchable: false });
        self
    }

    /// A field the free-text search looks at.
    pub fn searchable(mut self, key: &'static str, expr: &'static str) -> Self {
        self.fields.push(Field { key, expr, searchable: true });
        self
    }

    /// Dropdown filter with its own SQL; `{value}` is replaced by the placeholder.
    pub fn filter_with(mut self, key: &'static str, sql: &'static str) -> Self {
        self.custom_filters.push((key, sql));
        self
    }

    pub fn order_by(mut self, key: &'static str, dir: SortDir) -> Self {
        self.default_sort = (key, dir);
        self
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn alias(&self) -> &'static str {
        self.alias
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn lookup(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn field_map(&self) -> HashMap<&str, &str> {
        self.fields.iter().map(|f| (f.key, f.expr)).collect()
    }

    pub fn from_clause(&self) -> String {
        let mut sql = format!("{} {}", self.table, self.alias);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        sql
    }

    /// `jsonb_build_object` over `id` plus every declared field.
    pub fn select_list(&self) -> String {
        let mut pairs = vec![format!("'id', {}.id", self.alias)];
        for f in &self.fields {
            pairs.push(format!("'{}', {}", f.key, f.expr));
        }
        format!("jsonb_build_object({})", pairs.join(", "))
    }

    /// Build the WHERE and ORDER BY for a request.
    /// `sortable` lists the column keys the request may sort on.
    pub fn plan(&self, req: &TableRequest, sortable: &[&str]) -> Result<QueryPlan, BuildError> {
        let mut parts = vec![format!("{}.tenant_id = $1", self.alias)];
        let mut params: Vec<String> = vec![];

        if let Some(search) = req.search.as_deref() {
            let searchable: Vec<&Field> = self.fields.iter().filter(|f| f.searchable).collect();
            if !searchable.is_empty() {
                params.push(filter::escape_like(search));
                let n = params.len() + 1;
                let ors: Vec<String> = searchable
                    .iter()
                    .map(|f| format!("({})::TEXT ILIKE '%' || ${n} || '%' ESCAPE '\\'", f.expr))
                    .collect();
                parts.push(format!("({})", ors.join(" OR ")));
            }
        }

        for (key, value) in &req.filters {
            let n = params.len() + 2;
            let sql = if let Some((_, custom)) = self.custom_filters.iter().find(|(k, _)| *k == key.as_str()) {
                custom.replace("{value}", &format!("${n}"))
            } else if let Some(field) = self.lookup(key) {
                format!("({})::TEXT = ${n}", field.expr)
            } else {
                log::debug!("Ignoring unknown filter '{key}' on {}", self.table);
                continue;
            };
            params.push(value.clone());
            parts.push(sql);
        }

        if !req.tree.is_empty() {
            let (sql, mut tree_params) =
                filter::build_where_clause(&req.tree, &self.field_map(), filter::OPS, 1 + params.len())?;
            params.append(&mut tree_params);
            parts.push(format!("({sql})"));
        }

        Ok(QueryPlan {
            where_sql: parts.join(" AND "),
            params,
            order_by: self.order_by_sql(req, sortable),
        })
    }

    fn order_by_sql(&self, req: &TableRequest, sortable: &[&str]) -> String {
        let requested = req.sort.column.as_str();
        let (expr, dir) = match self.lookup(requested) {
            Some(field) if sortable.contains(&requested) => (field.expr.to_string(), req.sort.dir.clone()),
            _ => {
                let (key, dir) = &self.default_sort;
                let expr = self
                    .lookup(key)
                    .map(|f| f.expr.to_string())
                    .unwrap_or_else(|| format!("{}.{key}", self.alias));
                (expr, dir.clone())
            }
        };
        format!("({expr}) {} NULLS LAST, {}.id ASC", dir.sql(), self.alias)
    }

    pub fn page_sql(&self, plan: &QueryPlan, limit: i64, offset: i64) -> String {
        format!(
            "SELECT {} AS data FROM {} WHERE {} ORDER BY {} LIMIT {limit} OFFSET {offset}",
            self.select_list(),
            self.from_clause(),
            plan.where_sql,
            plan.order_by
        )
    }

    pub fn all_sql(&self, plan: &QueryPlan) -> String {
        format!(
            "SELECT {} AS data FROM {} WHERE {} ORDER BY {}",
            self.select_list(),
            self.from_clause(),
            plan.where_sql,
            plan.order_by
        )
    }

    pub fn count_sql(&self, plan: &QueryPlan) -> String {
        format!("SELECT COUNT(*) FROM {} WHERE {}", self.from_clause(), plan.where_sql)
    }

    /// One row by id; binds `$1` tenant and `$2` id.
    pub fn row_sql(&self) -> String {
        format!(
            "SELECT {} AS data FROM {} WHERE {a}.tenant_id = $1 AND {a}.id = $2",
            self.select_list(),
            self.from_clause(),
            a = self.alias
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::table::filter::{Condition, FilterTree, SortSpec};

    fn query() -> TableQuery {
        TableQuery::from("employees", "e")
            .join("LEFT JOIN departments d ON d.id = e.department_id")
            .searchable("name", "e.first_name || ' ' || e.last_name")
            .searchable("email", "e.email")
            .field("department.name", "d.name")
            .field("status", "e.status")
            .field("hired_on", "e.hired_on")
            .filter_with("has_email", "(e.email IS NOT NULL) = ({value})::BOOLEAN")
            .order_by("name", SortDir::Asc)
    }

    fn request() -> TableRequest {
        TableRequest::default()
    }

    #[test]
    fn plan_is_always_tenant_scoped() {
        let plan = query().plan(&request(), &[]).unwrap();
        assert_eq!(plan.where_sql, "e.tenant_id = $1");
        assert!(plan.params.is_empty());
        assert_eq!(plan.order_by, "(e.first_name || ' ' || e.last_name) ASC NULLS LAST, e.id ASC");
    }

    #[test]
    fn search_spans_searchable_fields_with_one_param() {
        let req = TableRequest { search: Some("ali".into()), ..request() };
        let plan = query().plan(&req, &[]).unwrap();
        assert_eq!(
            plan.where_sql,
            "e.tenant_id = $1 AND ((e.first_name || ' ' || e.last_name)::TEXT ILIKE '%' || $2 || '%' ESCAPE '\\' \
             OR (e.email)::TEXT ILIKE '%' || $2 || '%' ESCAPE '\\')"
        );
        assert_eq!(plan.params, vec!["ali"]);
    }

    #[test]
    fn search_wildcards_are_escaped() {
        let req = TableRequest { search: Some("100%_".into()), ..request() };
        let plan = query().plan(&req, &[]).unwrap();
        assert_eq!(plan.params, vec!["100\\%\\_"]);
    }

    #[test]
    fn dropdown_filters_skip_unknown_keys() {
        let req = TableRequest {
            filters: vec![
                ("bogus".into(), "x".into()),
                ("department.name".into(), "Finance".into()),
                ("has_email".into(), "true".into()),
            ],
            ..request()
        };
        let plan = query().plan(&req, &[]).unwrap();
        assert_eq!(
            plan.where_sql,
            "e.tenant_id = $1 AND (d.name)::TEXT = $2 AND (e.email IS NOT NULL) = ($3)::BOOLEAN"
        );
        assert_eq!(plan.params, vec!["Finance", "true"]);
    }

    #[test]
    fn filter_tree_placeholders_follow_earlier_params() {
        let req = TableRequest {
            search: Some("a".into()),
            tree: FilterTree {
                conditions: vec![Condition { field: "hired_on".into(), op: "after".into(), value: "2020-01-01".into() }],
                ..Default::default()
            },
            ..request()
        };
        let plan = query().plan(&req, &[]).unwrap();
        assert!(plan.where_sql.ends_with("AND ((e.hired_on)::DATE > ($3)::DATE)"));
        assert_eq!(plan.params, vec!["a", "2020-01-01"]);
    }

    #[test]
    fn unknown_tree_field_is_rejected() {
        let req = TableRequest {
            tree: FilterTree {
                conditions: vec![Condition { field: "salary".into(), op: "equals".into(), value: "1".into() }],
                ..Default::default()
            },
            ..request()
        };
        assert_eq!(query().plan(&req, &[]).unwrap_err(), BuildError::UnknownField("salary".into()));
    }

    #[test]
    fn sort_only_on_whitelisted_columns() {
        let req = TableRequest { sort: SortSpec::from_params(Some("hired_on"), Some("desc")), ..request() };
        let plan = query().plan(&req, &["hired_on"]).unwrap();
        assert_eq!(plan.order_by, "(e.hired_on) DESC NULLS LAST, e.id ASC");

        let plan = query().plan(&req, &["name"]).unwrap();
        assert!(plan.order_by.starts_with("(e.first_name || ' ' || e.last_name) ASC"));
    }

    #[test]
    fn page_sql_selects_json_rows() {
        let q = query();
        let plan = q.plan(&request(), &[]).unwrap();
        let sql = q.page_sql(&plan, 25, 50);
        assert!(sql.starts_with("SELECT jsonb_build_object('id', e.id, 'name', e.first_name || ' ' || e.last_name"));
        assert!(sql.contains("FROM employees e LEFT JOIN departments d ON d.id = e.department_id WHERE"));
        assert!(sql.ends_with("LIMIT 25 OFFSET 50"));
        assert_eq!(
            q.count_sql(&plan),
            "SELECT COUNT(*) FROM employees e LEFT JOIN departments d ON d.id = e.department_id WHERE e.tenant_id = $1"
        );
        assert!(q.row_sql().ends_with("WHERE e.tenant_id = $1 AND e.id = $2"));
    }
}
