//! Dataset data models

use serde::Deserialize;

use crate::config::api;
use crate::platform::ids;
use crate::platform::traits::Collection;

/// Dataset record from the platform API
#[derive(Deserialize, Debug, Clone)]
pub struct Dataset {
    #[serde(rename = "_id")]
    pub id: String,
    /// Datatype id
    pub datatype: Option<String>,
    #[serde(default, deserialize_with = "ids::id_list")]
    pub datatype_tags: Vec<String>,
    /// Project id
    pub project: Option<String>,
    pub meta: Option<DatasetMeta>,
    /// Creation timestamp as sent by the server
    pub create_date: Option<String>,
    pub storage: Option<String>,
    pub status: Option<String>,
    pub desc: Option<String>,
}

/// Subject/session metadata attached to a dataset
#[derive(Deserialize, Debug, Clone, Default)]
pub struct DatasetMeta {
    /// Subjects and sessions are often plain numbers
    #[serde(default, deserialize_with = "ids::opt_id")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "ids::opt_id")]
    pub session: Option<String>,
}

impl Dataset {
    /// Subject from metadata, if present
    pub fn subject(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.subject.as_deref())
    }

    /// Session from metadata, if present
    pub fn session(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.session.as_deref())
    }
}

impl Collection for Dataset {
    const ENDPOINT: &'static str = api::DATASETS;
    const RECORDS_KEY: &'static str = "datasets";
    const LABEL: &'static str = "datasets";
}

/// Server-side filters for a dataset query
#[derive(Debug, Default, Clone)]
pub struct DatasetQuery<'a> {
    /// Free-text search, interpreted by the server
    pub search: Option<&'a str>,
    pub id: Option<&'a str>,
    /// Datatype id
    pub datatype: Option<&'a str>,
    /// Project id
    pub project: Option<&'a str>,
    pub subject: Option<&'a str>,
}
