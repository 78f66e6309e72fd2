use askama::Template;

use super::PageContext;
use crate::models::table::engine::TablePage;

#[derive(Template)]
#[template(path = "tables/index.html")]
pub struct TablePageTemplate {
    pub ctx: PageContext,
    pub page: TablePage,
    /// Hydration props, safe to embed in a `<script>` element.
    pub props_json: String,
}

impl TablePageTemplate {
    pub fn new(ctx: PageContext, page: TablePage) -> Self {
        let props_json = embed_json(&page);
        TablePageTemplate { ctx, page, props_json }
    }

    pub fn has_prev(&self) -> bool {
        self.page.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.page < self.page.total_pages
    }

    /// Whether dropdown `key` is currently filtered to `value`.
    pub fn is_selected(&self, key: &str, value: &str) -> bool {
        self.page.filters.get(key).is_some_and(|v| v == value)
    }

    pub fn prev_page(&self) -> i64 {
        self.page.page - 1
    }

    pub fn next_page(&self) -> i64 {
        self.page.page + 1
    }

    /// Link to `page` keeping page size, search, sort and dropdown filters.
    pub fn page_url(&self, page: i64) -> String {
        let p = &self.page;
        let mut params = vec![("page".to_string(), page.to_string()), ("per_page".to_string(), p.per_page.to_string())];
        if let Some(search) = &p.search {
            params.push(("search".to_string(), search.clone()));
        }
        if !p.sort.is_empty() {
            params.push(("sort".to_string(), p.sort.clone()));
            params.push(("dir".to_string(), p.dir.to_string()));
        }
        params.extend(p.filters.iter().map(|(k, v)| (format!("f.{k}"), v.clone())));
        let query = serde_urlencoded::to_string(&params).unwrap_or_else(|_| format!("page={page}"));
        format!("?{query}")
    }
}

/// Serialize for an inline `<script type="application/json">`; `</` is escaped
/// so cell text cannot close the element.
pub fn embed_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/")
}
