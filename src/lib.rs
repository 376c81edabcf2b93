//! blquery - Query the brainlife neuroscience platform from the terminal
//!
//! A CLI tool to search datasets, user profiles and projects.
//!
//! # Features
//!
//! - Server-side filtering by id, search text and resource-specific fields
//! - Datasets joined with project, profile and datatype names
//! - Field selection with `--show`
//! - Raw JSON output for scripting
//!
//! # Example
//!
//! ```bash
//! # Datasets of one subject in a project
//! bl dataset query --project 5a0e604116e499548135de87 --subject 100206
//!
//! # Only ids and status, first 10 results
//! bl dataset query --datatype neuro/anat/t1w --show id,status -l 10
//!
//! # Profiles matching a name
//! bl profile query -q alice
//!
//! # Projects administered by a user, as JSON
//! bl project query --admin 42 --json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod platform;
pub mod ui;

pub use cli::{
    Cli, Command, DatasetAction, DatasetField, DatasetQueryArgs, OutputArgs, ProfileAction,
    ProfileField, ProfileQueryArgs, ProjectAction, ProjectField, ProjectQueryArgs,
};
pub use config::Settings;
pub use error::{BlError, Result};
pub use output::output_error;
pub use platform::{
    run_dataset_command, run_profile_command, run_project_command, ApiResolver, BlClient,
    BlResource, Dataset, Datatype, Profile, Project, TokenResolver,
};
