//! Profile API operations

use crate::error::Result;
use crate::platform::query::{Page, QueryParams};
use crate::platform::traits::Fetched;
use crate::platform::BlClient;

use super::models::{Profile, ProfileQuery};

fn build_profile_params(query: &ProfileQuery<'_>, page: Page) -> QueryParams {
    QueryParams::new()
        .eq("id", query.id)
        .search(query.search)
        .page(page)
}

impl BlClient {
    /// Query profiles with optional filters and skip/limit
    pub async fn query_profiles(
        &self,
        query: &ProfileQuery<'_>,
        page: Page,
    ) -> Result<Fetched<Profile>> {
        let params = build_profile_params(query, page);
        self.fetch_collection::<Profile>(&params).await
    }

    /// Same query as `query_profiles`, records left as sent by the server
    pub async fn query_profiles_raw(
        &self,
        query: &ProfileQuery<'_>,
        page: Page,
    ) -> Result<Fetched<serde_json::Value>> {
        let params = build_profile_params(query, page);
        self.fetch_raw::<Profile>(&params).await
    }

    /// Get every profile (used to resolve usernames)
    pub async fn query_all_profiles(&self) -> Result<Fetched<Profile>> {
        self.query_profiles(&ProfileQuery::default(), Page::unlimited())
            .await
    }
}
