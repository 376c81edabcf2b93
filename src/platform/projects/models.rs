//! Project data models

use serde::Deserialize;

use crate::config::api;
use crate::platform::ids;
use crate::platform::traits::{BlResource, Collection};

/// Project record from the platform API
#[derive(Deserialize, Debug, Clone)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub desc: Option<String>,
    /// Access level, e.g. "public" or "private"
    pub access: Option<String>,
    /// Private project still listed for every user
    #[serde(default)]
    pub listed: bool,
    #[serde(default, deserialize_with = "ids::id_list")]
    pub admins: Vec<String>,
    #[serde(default, deserialize_with = "ids::id_list")]
    pub members: Vec<String>,
    #[serde(default, deserialize_with = "ids::id_list")]
    pub guests: Vec<String>,
}

impl BlResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Project {
    /// Get the project description
    pub fn description(&self) -> &str {
        self.desc.as_deref().unwrap_or("")
    }
}

impl Collection for Project {
    const ENDPOINT: &'static str = api::PROJECTS;
    const RECORDS_KEY: &'static str = "projects";
    const LABEL: &'static str = "projects";
}

/// Server-side filters for a project query
#[derive(Debug, Default, Clone)]
pub struct ProjectQuery<'a> {
    /// Free-text search over name and description (server-defined)
    pub search: Option<&'a str>,
    pub id: Option<&'a str>,
    /// Profile id that must be an admin
    pub admin: Option<&'a str>,
    /// Profile id that must be a member
    pub member: Option<&'a str>,
    /// Profile id that must be a guest
    pub guest: Option<&'a str>,
}
