//! Query command arguments for each resource kind

use clap::{Parser, Subcommand};

use super::common::OutputArgs;
use super::enums::{DatasetField, ProfileField, ProjectField};

/// Dataset subcommands
#[derive(Subcommand, Debug)]
pub enum DatasetAction {
    /// Run a query against all datasets
    Query(DatasetQueryArgs),
}

/// Profile subcommands
#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Run a query against all profiles
    Query(ProfileQueryArgs),
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectAction {
    /// Run a query against all projects
    Query(ProjectQueryArgs),
}

/// Arguments for 'dataset query'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        bl dataset query --project 5afc2c8de68fc50028e90820 --subject 100206\n  \
        bl dataset query --datatype neuro/anat/t1w --show id,subject,create-date\n  \
        bl dataset query --search dwi --limit 20 --json")]
pub struct DatasetQueryArgs {
    /// Filter datasets by name or id
    #[arg(long)]
    pub search: Option<String>,

    /// Filter datasets by id
    #[arg(short = 'i', long)]
    pub id: Option<String>,

    /// Filter datasets by datatype (id or name)
    #[arg(long)]
    pub datatype: Option<String>,

    /// Filter datasets by project id
    #[arg(long)]
    pub project: Option<String>,

    /// Filter datasets by subject
    #[arg(long)]
    pub subject: Option<String>,

    /// Number of results to skip
    #[arg(short = 's', long)]
    pub skip: Option<u32>,

    /// Maximum number of results to show
    #[arg(short = 'l', long)]
    pub limit: Option<u32>,

    /// Fields to show in the report (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub show: Vec<DatasetField>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for 'profile query'
#[derive(Parser, Debug)]
pub struct ProfileQueryArgs {
    /// Filter profiles by id
    #[arg(short = 'i', long)]
    pub id: Option<String>,

    /// Filter profiles by username, full name, or email address
    #[arg(short = 'q', long, visible_alias = "query")]
    pub search: Option<String>,

    /// Number of results to skip
    #[arg(short = 's', long)]
    pub skip: Option<u32>,

    /// Maximum number of results to show
    #[arg(short = 'l', long)]
    pub limit: Option<u32>,

    /// Fields to show in the report (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub show: Vec<ProfileField>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for 'project query'
#[derive(Parser, Debug)]
pub struct ProjectQueryArgs {
    /// Filter projects by id
    #[arg(short = 'i', long)]
    pub id: Option<String>,

    /// Filter projects by name or description
    #[arg(short = 'q', long, visible_alias = "query")]
    pub search: Option<String>,

    /// Filter projects with a given admin (profile id)
    #[arg(short = 'a', long)]
    pub admin: Option<String>,

    /// Filter projects with a given member (profile id)
    #[arg(short = 'm', long)]
    pub member: Option<String>,

    /// Filter projects with a given guest (profile id)
    #[arg(short = 'g', long)]
    pub guest: Option<String>,

    /// Number of results to skip
    #[arg(short = 's', long)]
    pub skip: Option<u32>,

    /// Maximum number of results to show
    #[arg(short = 'l', long)]
    pub limit: Option<u32>,

    /// Fields to show in the report (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub show: Vec<ProjectField>,

    #[command(flatten)]
    pub output: OutputArgs,
}
