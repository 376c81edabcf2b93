//! Query string construction for collection endpoints

use serde_json::{Map, Value};

/// Skip/limit passed through to the server unchanged
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

impl Page {
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Self { skip, limit }
    }

    /// Page asking the server for every record
    pub fn unlimited() -> Self {
        Self {
            skip: None,
            limit: Some(crate::config::api::UNLIMITED),
        }
    }
}

/// Server-side filter for a collection query
///
/// Exact and relational constraints go into the `find` document;
/// free-text search is sent as its own parameter and interpreted by the
/// server.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryParams {
    find: Map<String, Value>,
    search: Option<String>,
    page: Page,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value` (array fields match on containment)
    pub fn eq(mut self, field: &str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.find
                .insert(field.to_string(), Value::String(v.to_string()));
        }
        self
    }

    pub fn search(mut self, text: Option<&str>) -> Self {
        self.search = text.map(str::to_string);
        self
    }

    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    pub fn find(&self) -> &Map<String, Value> {
        &self.find
    }

    /// Append the encoded query string to `endpoint`
    pub fn build_path(&self, endpoint: &str) -> String {
        let mut path = format!("/{}", endpoint);

        let mut query_parts = Vec::new();
        if !self.find.is_empty() {
            let find = Value::Object(self.find.clone()).to_string();
            query_parts.push(format!("find={}", urlencoding::encode(&find)));
        }
        if let Some(s) = &self.search {
            query_parts.push(format!("search={}", urlencoding::encode(s)));
        }
        if let Some(skip) = self.page.skip {
            query_parts.push(format!("skip={}", skip));
        }
        if let Some(limit) = self.page.limit {
            query_parts.push(format!("limit={}", limit));
        }

        if !query_parts.is_empty() {
            path.push('?');
            path.push_str(&query_parts.join("&"));
        }

        path
    }
}
