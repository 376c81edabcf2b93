//! Common traits for platform resources

use serde::de::DeserializeOwned;

/// Common trait for records that other records reference by id
///
/// Lookup tables key records by `id()`; `name()` is the label shown
/// when a foreign key resolves.
pub trait BlResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// A queryable collection of the platform API
///
/// Implement this for a record type to enable use with
/// `BlClient::fetch_collection()`.
pub trait Collection: DeserializeOwned {
    /// Endpoint path relative to the API base URL
    const ENDPOINT: &'static str;
    /// Key under which the response body lists the records
    const RECORDS_KEY: &'static str;
    /// Human-readable plural for logs and error messages
    const LABEL: &'static str;
}

/// Result of a collection query
///
/// `Fetched<serde_json::Value>` holds the records exactly as the server
/// sent them.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub records: Vec<T>,
    /// Total matching records reported by the server, if any
    pub count: Option<u64>,
}

impl<T> Fetched<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestResource {
        id: String,
        name: String,
    }

    impl BlResource for TestResource {
        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }
    }

    fn resource() -> TestResource {
        TestResource {
            id: "5a1f".to_string(),
            name: "neuro/anat".to_string(),
        }
    }

    #[test]
    fn test_matches_by_id() {
        assert!(resource().matches("5a1f"));
    }

    #[test]
    fn test_matches_by_name() {
        assert!(resource().matches("neuro/anat"));
    }

    #[test]
    fn test_no_match() {
        assert!(!resource().matches("neuro/dwi"));
    }

    #[test]
    fn test_fetched_len() {
        let fetched: Fetched<u8> = Fetched {
            records: vec![1, 2],
            count: Some(10),
        };
        assert_eq!(fetched.len(), 2);
        assert!(!fetched.is_empty());
    }
}
