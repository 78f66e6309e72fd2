// src/models/table/request.rs
use std::collections::HashMap;

use super::filter::{BuildError, FilterTree, SortSpec};

pub const MAX_PER_PAGE: i64 = 100;
/// Highest page whose offset still fits an `i64` at any page size.
pub const MAX_PAGE: i64 = i64::MAX / MAX_PER_PAGE;

/// Paging, search, sort and filters parsed from a table request's query string.
#[derive(Debug, Clone)]
pub struct TableRequest {
    pub page: i64,
    pub per_page: i64,
    pub search: Option<String>,
    pub sort: SortSpec,
    /// `f.<key>=<value>` dropdown filters, ordered by key.
    pub filters: Vec<(String, String)>,
    pub tree: FilterTree,
}

impl Default for TableRequest {
    fn default() -> Self {
        TableRequest {
            page: 1,
            per_page: 25,
            search: None,
            sort: SortSpec::default(),
            filters: vec![],
            tree: FilterTree::default(),
        }
    }
}

impl TableRequest {
    pub fn from_query(query: &HashMap<String, String>, default_per_page: i64) -> Result<Self, BuildError> {
        let number = |key: &str| query.get(key).and_then(|v| v.trim().parse::<i64>().ok());

        let search = query
            .get("search")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mut filters: Vec<(String, String)> = query
            .iter()
            .filter_map(|(k, v)| {
                let key = k.strip_prefix("f.")?;
                let value = v.trim();
                (!key.is_empty() && !value.is_empty()).then(|| (key.to_string(), value.to_string()))
            })
            .collect();
        filters.sort();

        let tree = match query.get("filter").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(json) => FilterTree::from_json(json).map_err(|e| BuildError::Malformed(e.to_string()))?,
            None => FilterTree::default(),
        };

        Ok(TableRequest {
            page: number("page").unwrap_or(1).clamp(1, MAX_PAGE),
            per_page: number("per_page").unwrap_or(default_per_page).clamp(1, MAX_PER_PAGE),
            search,
            sort: SortSpec::from_params(
                query.get("sort").map(String::as_str),
                query.get("dir").map(String::as_str),
            ),
            filters,
            tree,
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        ((total + self.per_page - 1) / self.per_page).max(1)
    }
}
