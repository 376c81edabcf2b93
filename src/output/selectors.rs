//! Display selectors: which fields a report shows
//!
//! Each selector has one flag per field plus `all`, which overrides the
//! individual flags. Renderers only read the flags.

use crate::cli::{DatasetField, ProfileField, ProjectField};

/// Fields shown in a dataset report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetSelector {
    pub all: bool,
    pub id: bool,
    /// Project name plus admins, members and guests
    pub project: bool,
    /// Subject and session
    pub subject: bool,
    pub datatype: bool,
    pub desc: bool,
    pub create_date: bool,
    pub storage: bool,
    pub status: bool,
}

impl DatasetSelector {
    pub fn all() -> Self {
        Self {
            all: true,
            ..Default::default()
        }
    }

    /// Selector for the given fields; no fields means all of them
    pub fn from_fields(fields: &[DatasetField]) -> Self {
        if fields.is_empty() {
            return Self::all();
        }
        let mut sel = Self::default();
        for field in fields {
            match field {
                DatasetField::Id => sel.id = true,
                DatasetField::Project => sel.project = true,
                DatasetField::Subject => sel.subject = true,
                DatasetField::Datatype => sel.datatype = true,
                DatasetField::Desc => sel.desc = true,
                DatasetField::CreateDate => sel.create_date = true,
                DatasetField::Storage => sel.storage = true,
                DatasetField::Status => sel.status = true,
            }
        }
        sel
    }

    /// Whether any field needs project and profile lookups
    pub fn needs_projects(&self) -> bool {
        self.all || self.project
    }

    /// Whether any field needs datatype lookups
    pub fn needs_datatypes(&self) -> bool {
        self.all || self.datatype
    }
}

/// Fields shown in a profile report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileSelector {
    pub all: bool,
    pub id: bool,
    pub username: bool,
    pub fullname: bool,
    pub email: bool,
    pub active: bool,
}

impl ProfileSelector {
    pub fn all() -> Self {
        Self {
            all: true,
            ..Default::default()
        }
    }

    /// Selector for the given fields; no fields means all of them
    pub fn from_fields(fields: &[ProfileField]) -> Self {
        if fields.is_empty() {
            return Self::all();
        }
        let mut sel = Self::default();
        for field in fields {
            match field {
                ProfileField::Id => sel.id = true,
                ProfileField::Username => sel.username = true,
                ProfileField::Fullname => sel.fullname = true,
                ProfileField::Email => sel.email = true,
                ProfileField::Active => sel.active = true,
            }
        }
        sel
    }
}

/// Fields shown in a project report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSelector {
    pub all: bool,
    pub id: bool,
    pub name: bool,
    pub admins: bool,
    pub members: bool,
    pub guests: bool,
    pub access: bool,
    pub desc: bool,
}

impl ProjectSelector {
    pub fn all() -> Self {
        Self {
            all: true,
            ..Default::default()
        }
    }

    /// Selector for the given fields; no fields means all of them
    pub fn from_fields(fields: &[ProjectField]) -> Self {
        if fields.is_empty() {
            return Self::all();
        }
        let mut sel = Self::default();
        for field in fields {
            match field {
                ProjectField::Id => sel.id = true,
                ProjectField::Name => sel.name = true,
                ProjectField::Admins => sel.admins = true,
                ProjectField::Members => sel.members = true,
                ProjectField::Guests => sel.guests = true,
                ProjectField::Access => sel.access = true,
                ProjectField::Desc => sel.desc = true,
            }
        }
        sel
    }

    /// Whether any field needs profile lookups
    pub fn needs_profiles(&self) -> bool {
        self.all || self.admins || self.members || self.guests
    }
}
