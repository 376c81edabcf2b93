//! Datatype API operations

use log::debug;

use crate::error::Result;
use crate::platform::query::{Page, QueryParams};
use crate::platform::traits::{BlResource, Fetched};
use crate::platform::BlClient;

use super::models::Datatype;

/// Check whether a value looks like a platform object id (24 hex digits)
pub fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

impl BlClient {
    /// Get every datatype (used to resolve dataset datatype names)
    pub async fn query_datatypes(&self) -> Result<Fetched<Datatype>> {
        let query = QueryParams::new().page(Page::unlimited());
        self.fetch_collection::<Datatype>(&query).await
    }

    /// Resolve a datatype given by name or id to its id
    ///
    /// Ids are returned unchanged without a request. A name with no
    /// matching datatype is also returned unchanged, so the dataset query
    /// simply matches nothing.
    pub async fn resolve_datatype_id(&self, value: &str) -> Result<String> {
        if is_object_id(value) {
            return Ok(value.to_string());
        }

        let query = QueryParams::new().eq("name", Some(value));
        let fetched = self.fetch_collection::<Datatype>(&query).await?;

        match fetched.records.into_iter().find(|dt| dt.matches(value)) {
            Some(dt) => {
                debug!("Resolved datatype '{}' to id {}", value, dt.id);
                Ok(dt.id)
            }
            None => {
                debug!("No datatype named '{}', using value as-is", value);
                Ok(value.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_is_object_id() {
        assert!(is_object_id("5a1f0c3e9d1b2a0012345678"));
        assert!(!is_object_id("neuro/anat/t1w"));
        assert!(!is_object_id("5a1f"));
        assert!(!is_object_id("zzzzzzzzzzzzzzzzzzzzzzzz"));
    }

    #[tokio::test]
    async fn test_resolve_datatype_id_passes_ids_through() {
        // No mock mounted: an id must not trigger a request
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        let id = client
            .resolve_datatype_id("5a1f0c3e9d1b2a0012345678")
            .await
            .unwrap();
        assert_eq!(id, "5a1f0c3e9d1b2a0012345678");
    }

    #[tokio::test]
    async fn test_resolve_datatype_id_by_name() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/warehouse/datatype"))
            .and(query_param("find", r#"{"name":"neuro/anat/t1w"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "datatypes": [{"_id": "58c33bcee13a50849b25879a", "name": "neuro/anat/t1w"}]
            })))
            .mount(&mock_server)
            .await;

        let id = client.resolve_datatype_id("neuro/anat/t1w").await.unwrap();
        assert_eq!(id, "58c33bcee13a50849b25879a");
    }

    #[tokio::test]
    async fn test_resolve_datatype_id_unknown_name() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/warehouse/datatype"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"datatypes": []})),
            )
            .mount(&mock_server)
            .await;

        let id = client.resolve_datatype_id("neuro/unknown").await.unwrap();
        assert_eq!(id, "neuro/unknown");
    }

    #[tokio::test]
    async fn test_query_datatypes_requests_everything() {
        let mock_server = MockServer::start().await;
        let client = BlClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/warehouse/datatype"))
            .and(query_param("limit", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "datatypes": [{"_id": "t1", "name": "MRI"}, {"_id": "t2", "name": "DWI"}]
            })))
            .mount(&mock_server)
            .await;

        let fetched = client.query_datatypes().await.unwrap();
        assert_eq!(fetched.len(), 2);
    }
}
