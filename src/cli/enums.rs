//! Field enums for the `--show` option of each query command

use clap::ValueEnum;

/// Dataset report fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetField {
    /// Dataset id
    Id,
    /// Project name and its admins, members and guests
    Project,
    /// Subject and session
    Subject,
    /// Datatype name and tags
    Datatype,
    /// Description
    Desc,
    /// Creation date
    CreateDate,
    /// Storage location
    Storage,
    /// Storage status
    Status,
}

/// Profile report fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileField {
    Id,
    Username,
    Fullname,
    Email,
    Active,
}

/// Project report fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectField {
    Id,
    Name,
    Admins,
    Members,
    Guests,
    /// Access level and listing
    Access,
    /// Description
    Desc,
}

impl std::fmt::Display for DatasetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetField::Id => write!(f, "id"),
            DatasetField::Project => write!(f, "project"),
            DatasetField::Subject => write!(f, "subject"),
            DatasetField::Datatype => write!(f, "datatype"),
            DatasetField::Desc => write!(f, "desc"),
            DatasetField::CreateDate => write!(f, "create-date"),
            DatasetField::Storage => write!(f, "storage"),
            DatasetField::Status => write!(f, "status"),
        }
    }
}
