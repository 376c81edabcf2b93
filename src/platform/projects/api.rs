//! Project API operations

use crate::error::Result;
use crate::platform::query::{Page, QueryParams};
use crate::platform::traits::Fetched;
use crate::platform::BlClient;

use super::models::{Project, ProjectQuery};

/// Build the server-side filter for a project query
///
/// Membership filters match profile ids contained in the role arrays.
fn build_project_params(query: &ProjectQuery<'_>, page: Page) -> QueryParams {
    QueryParams::new()
        .eq("_id", query.id)
        .eq("admins", query.admin)
        .eq("members", query.member)
        .eq("guests", query.guest)
        .search(query.search)
        .page(page)
}

impl BlClient {
    /// Query projects with optional filters and skip/limit
    pub async fn query_projects(
        &self,
        query: &ProjectQuery<'_>,
        page: Page,
    ) -> Result<Fetched<Project>> {
        let params = build_project_params(query, page);
        self.fetch_collection::<Project>(&params).await
    }

    /// Same query as `query_projects`, records left as sent by the server
    pub async fn query_projects_raw(
        &self,
        query: &ProjectQuery<'_>,
        page: Page,
    ) -> Result<Fetched<serde_json::Value>> {
        let params = build_project_params(query, page);
        self.fetch_raw::<Project>(&params).await
    }

    /// Get every visible project (used to resolve project names)
    pub async fn query_all_projects(&self) -> Result<Fetched<Project>> {
        self.query_projects(&ProjectQuery::default(), Page::unlimited())
            .await
    }
}
