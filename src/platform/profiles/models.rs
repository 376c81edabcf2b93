//! Profile data models

use serde::Deserialize;
use std::cmp::Ordering;

use crate::config::api;
use crate::platform::ids;
use crate::platform::traits::{BlResource, Collection};

/// User profile from the platform API
#[derive(Deserialize, Debug, Clone)]
pub struct Profile {
    #[serde(deserialize_with = "ids::id")]
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

impl BlResource for Profile {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.username
    }
}

impl Collection for Profile {
    const ENDPOINT: &'static str = api::PROFILES;
    const RECORDS_KEY: &'static str = "profiles";
    const LABEL: &'static str = "profiles";
}

/// Server-side filters for a profile query
#[derive(Debug, Default, Clone)]
pub struct ProfileQuery<'a> {
    /// Free-text search over username, full name and email (server-defined)
    pub search: Option<&'a str>,
    pub id: Option<&'a str>,
}

/// Sort key for a profile id: numeric ids first, in numeric order
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum IdKey<'a> {
    Num(u64),
    Str(&'a str),
}

impl<'a> IdKey<'a> {
    fn new(id: &'a str) -> Self {
        id.parse().map(IdKey::Num).unwrap_or(IdKey::Str(id))
    }
}

/// Total order on ids: numbers ascending, then other ids lexically
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    IdKey::new(a).cmp(&IdKey::new(b))
}
