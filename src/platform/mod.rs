//! brainlife API client module
//!
//! This module provides the query operations against the platform's
//! warehouse and auth services, one submodule per resource.

mod client;
mod credentials;
pub mod datasets;
pub mod datatypes;
mod host;
mod ids;
pub mod profiles;
pub mod projects;
pub mod query;
pub mod traits;

pub use client::BlClient;
pub use credentials::TokenResolver;
pub use datasets::{run_dataset_command, Dataset, DatasetMeta, DatasetQuery};
pub use datatypes::{is_object_id, Datatype};
pub use host::ApiResolver;
pub use profiles::{compare_ids, run_profile_command, Profile, ProfileQuery};
pub use projects::{run_project_command, Project, ProjectQuery};
pub use query::{Page, QueryParams};
pub use traits::{BlResource, Collection, Fetched};
