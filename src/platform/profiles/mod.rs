//! Profile module

mod api;
mod commands;
mod models;

pub use commands::run_profile_command;
pub use models::{compare_ids, Profile, ProfileQuery};
