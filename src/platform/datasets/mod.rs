//! Dataset module

mod api;
mod commands;
mod models;

pub use commands::run_dataset_command;
pub use models::{Dataset, DatasetMeta, DatasetQuery};
