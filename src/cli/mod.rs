//! CLI argument parsing

mod common;
mod enums;
mod query;

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::defaults;

pub use common::OutputArgs;
pub use enums::{DatasetField, ProfileField, ProjectField};
pub use query::{
    DatasetAction, DatasetQueryArgs, ProfileAction, ProfileQueryArgs, ProjectAction,
    ProjectQueryArgs,
};

/// brainlife query CLI
#[derive(Parser, Debug)]
#[command(name = "bl")]
#[command(version)]
#[command(
    about = "Query datasets, profiles and projects on brainlife",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Platform API base URL (overrides BL_API_URL)
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// API token (overrides BL_TOKEN and the login JWT file)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no spinners or other interactive output
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Resource commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Query datasets
    #[command(visible_alias = "datasets")]
    Dataset {
        #[command(subcommand)]
        action: Option<DatasetAction>,
    },

    /// Query user profiles
    #[command(visible_alias = "profiles")]
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },

    /// Query projects
    #[command(visible_alias = "projects")]
    Project {
        #[command(subcommand)]
        action: Option<ProjectAction>,
    },
}

impl Cli {
    /// Whether the selected command asked for raw/json output
    pub fn raw_output(&self) -> bool {
        match &self.command {
            Command::Dataset {
                action: Some(DatasetAction::Query(args)),
            } => args.output.is_raw(),
            Command::Profile {
                action: Some(ProfileAction::Query(args)),
            } => args.output.is_raw(),
            Command::Project {
                action: Some(ProjectAction::Query(args)),
            } => args.output.is_raw(),
            _ => false,
        }
    }

    /// Usage of the resource command when it was given without an action
    pub fn resource_help(&self) -> Option<String> {
        let name = match &self.command {
            Command::Dataset { action: None } => "dataset",
            Command::Profile { action: None } => "profile",
            Command::Project { action: None } => "project",
            _ => return None,
        };
        let mut cmd = Cli::command();
        cmd.build();
        cmd.find_subcommand_mut(name)
            .map(|sub| sub.render_help().to_string())
    }
}
