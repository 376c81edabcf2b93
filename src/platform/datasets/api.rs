//! Dataset API operations

use crate::error::Result;
use crate::platform::query::{Page, QueryParams};
use crate::platform::traits::Fetched;
use crate::platform::BlClient;

use super::models::{Dataset, DatasetQuery};

/// Build the server-side filter for a dataset query
fn build_dataset_params(query: &DatasetQuery<'_>, page: Page) -> QueryParams {
    QueryParams::new()
        .eq("_id", query.id)
        .eq("datatype", query.datatype)
        .eq("project", query.project)
        .eq("meta.subject", query.subject)
        .search(query.search)
        .page(page)
}

impl BlClient {
    /// Query datasets with optional filters and skip/limit
    pub async fn query_datasets(
        &self,
        query: &DatasetQuery<'_>,
        page: Page,
    ) -> Result<Fetched<Dataset>> {
        let params = build_dataset_params(query, page);
        self.fetch_collection::<Dataset>(&params).await
    }

    /// Same query as `query_datasets`, records left as sent by the server
    pub async fn query_datasets_raw(
        &self,
        query: &DatasetQuery<'_>,
        page: Page,
    ) -> Result<Fetched<serde_json::Value>> {
        let params = build_dataset_params(query, page);
        self.fetch_raw::<Dataset>(&params).await
    }
}
