//! Platform HTTP client for API interactions

use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::{api, Settings};
use crate::error::{BlError, Result};
use crate::platform::query::QueryParams;
use crate::platform::traits::{Collection, Fetched};

/// Platform API client
pub struct BlClient {
    client: Client,
    token: String,
    api_url: String,
}

impl BlClient {
    /// Create a new client with connection timeouts
    pub fn new(settings: &Settings) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token: settings.token.clone(),
            api_url: settings.api_url.clone(),
        }
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.api_url
    }

    /// Create a GET request builder with the bearer token attached
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
    }

    /// Parse an API response, returning error for non-success status codes
    ///
    /// 401 and 403 mean the token was rejected and surface as auth errors.
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(BlError::Auth(format!(
                "Not authorized to fetch {} (status {}). Your token may be invalid; please log in again.",
                error_context,
                status.as_u16()
            )));
        }
        if !status.is_success() {
            return Err(BlError::Api {
                status: status.as_u16(),
                message: format!("Failed to fetch {}", error_context),
            });
        }
        Ok(response.json().await?)
    }

    /// Query a collection and return its records as the server sent them
    pub async fn fetch_raw<T>(&self, query: &QueryParams) -> Result<Fetched<serde_json::Value>>
    where
        T: Collection,
    {
        let url = format!("{}{}", self.base_url(), query.build_path(T::ENDPOINT));
        debug!("Fetching {} from: {}", T::LABEL, url);

        let response = self.get(&url).send().await?;
        let mut body: serde_json::Value = self.parse_api_response(response, T::LABEL).await?;

        let count = body.get("count").and_then(|c| c.as_u64());
        let records = match body.get_mut(T::RECORDS_KEY).map(serde_json::Value::take) {
            Some(serde_json::Value::Array(items)) => items,
            _ => {
                return Err(BlError::Json(format!(
                    "Response for {} has no '{}' array",
                    T::LABEL,
                    T::RECORDS_KEY
                )))
            }
        };

        debug!(
            "Fetched {} {} (server count: {:?})",
            records.len(),
            T::LABEL,
            count
        );
        Ok(Fetched { records, count })
    }

    /// Query a collection and parse each record into `T`
    pub async fn fetch_collection<T>(&self, query: &QueryParams) -> Result<Fetched<T>>
    where
        T: Collection,
    {
        let raw = self.fetch_raw::<T>(query).await?;
        let records = raw
            .records
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).map_err(|e| {
                    BlError::Json(format!("Failed to parse {}: {}", T::LABEL, e))
                })
            })
            .collect::<Result<Vec<T>>>()?;

        Ok(Fetched {
            records,
            count: raw.count,
        })
    }
}

#[cfg(test)]
impl BlClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(&Settings::new(base_url, "test-token".to_string(), true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct TestItem {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    }

    impl Collection for TestItem {
        const ENDPOINT: &'static str = "test/items";
        const RECORDS_KEY: &'static str = "items";
        const LABEL: &'static str = "test items";
    }

    #[test]
    fn test_base_url() {
        let client = BlClient::test_client("https://example.com/api/");
        assert_eq!(client.base_url(), "https://example.com/api");
    }

    #[tokio::test]
    async fn test_fetch_collection_success() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test/items"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "items": [
                    {"_id": "a", "name": "Item A", "extra": [1, 2]},
                    {"_id": "b", "name": "Item B"}
                ],
                "count": 7
            })))
            .mount(&mock_server)
            .await;

        let fetched = client
            .fetch_collection::<TestItem>(&QueryParams::new())
            .await
            .unwrap();

        assert_eq!(fetched.len(), 2);
        assert_eq!(fetched.records[0].id, "a");
        assert_eq!(fetched.records[1].name, "Item B");
        assert_eq!(fetched.count, Some(7));
    }

    #[tokio::test]
    async fn test_fetch_raw_keeps_records_the_model_rejects() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        let items = serde_json::json!([
            {"_id": "a", "name": "Item A", "extra": [1, 2]},
            {"_id": "b", "name": null}
        ]);
        Mock::given(method("GET"))
            .and(path("/test/items"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"items": items.clone(), "count": 2})),
            )
            .mount(&mock_server)
            .await;

        let raw = client
            .fetch_raw::<TestItem>(&QueryParams::new())
            .await
            .unwrap();
        assert_eq!(serde_json::Value::Array(raw.records), items);
        assert_eq!(raw.count, Some(2));

        let typed = client.fetch_collection::<TestItem>(&QueryParams::new()).await;
        assert!(matches!(typed, Err(BlError::Json(_))));
    }

    #[tokio::test]
    async fn test_fetch_collection_passes_query() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test/items"))
            .and(query_param("search", "anat"))
            .and(query_param("limit", "5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .mount(&mock_server)
            .await;

        let query = QueryParams::new()
            .search(Some("anat"))
            .page(crate::platform::query::Page::new(None, Some(5)));
        let fetched = client.fetch_collection::<TestItem>(&query).await.unwrap();

        assert!(fetched.is_empty());
        assert_eq!(fetched.count, None);
    }

    #[tokio::test]
    async fn test_fetch_collection_unauthorized_is_auth_error() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test/items"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let result = client.fetch_collection::<TestItem>(&QueryParams::new()).await;

        match result.unwrap_err() {
            BlError::Auth(msg) => assert!(msg.contains("401")),
            e => panic!("Expected BlError::Auth, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_collection_server_error() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test/items"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let result = client.fetch_collection::<TestItem>(&QueryParams::new()).await;

        match result.unwrap_err() {
            BlError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("test items"));
            }
            e => panic!("Expected BlError::Api, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_collection_missing_records_key() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/test/items"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"other": []})),
            )
            .mount(&mock_server)
            .await;

        let result = client.fetch_collection::<TestItem>(&QueryParams::new()).await;

        match result.unwrap_err() {
            BlError::Json(msg) => assert!(msg.contains("'items'")),
            e => panic!("Expected BlError::Json, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_collection_transport_error() {
        // Nothing listens on port 9 on the test host
        let client = BlClient::test_client("http://127.0.0.1:9");
        let result = client.fetch_collection::<TestItem>(&QueryParams::new()).await;
        assert!(matches!(result.unwrap_err(), BlError::Http(_)));
    }
}
