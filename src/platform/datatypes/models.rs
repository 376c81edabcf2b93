//! Datatype data models

use serde::Deserialize;

use crate::config::api;
use crate::platform::traits::{BlResource, Collection};

/// Datatype record from the platform API
#[derive(Deserialize, Debug, Clone)]
pub struct Datatype {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub desc: Option<String>,
}

impl BlResource for Datatype {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Collection for Datatype {
    const ENDPOINT: &'static str = api::DATATYPES;
    const RECORDS_KEY: &'static str = "datatypes";
    const LABEL: &'static str = "datatypes";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_deserialization() {
        let json = r#"{"_id": "5a1f", "name": "neuro/anat/t1w", "files": []}"#;
        let dt: Datatype = serde_json::from_str(json).unwrap();
        assert_eq!(dt.id(), "5a1f");
        assert_eq!(dt.name(), "neuro/anat/t1w");
        assert!(dt.desc.is_none());
    }
}
