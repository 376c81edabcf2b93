//! Dataset report formatter

use chrono::{DateTime, Utc};

use super::lookup::LookupTable;
use super::report::{format_date, render_report, RecordBlock};
use super::selectors::DatasetSelector;
use crate::config::placeholders;
use crate::platform::{Dataset, Datatype, Profile, Project};

/// Auxiliary tables a dataset report resolves through
pub struct DatasetLookups<'a> {
    pub projects: LookupTable<'a, Project>,
    pub profiles: LookupTable<'a, Profile>,
    pub datatypes: LookupTable<'a, Datatype>,
}

/// Project name and role usernames, or placeholders when the project is unknown
struct ProjectInfo<'a> {
    name: &'a str,
    admins: Vec<&'a str>,
    members: Vec<&'a str>,
    guests: Vec<&'a str>,
}

fn project_info<'a>(project_id: Option<&str>, lookups: &DatasetLookups<'a>) -> ProjectInfo<'a> {
    match project_id.and_then(|id| lookups.projects.get(id)) {
        Some(prj) => ProjectInfo {
            name: &prj.name,
            admins: lookups
                .profiles
                .names_or(&prj.admins, placeholders::UNKNOWN_USER),
            members: lookups
                .profiles
                .names_or(&prj.members, placeholders::UNKNOWN_USER),
            guests: lookups
                .profiles
                .names_or(&prj.guests, placeholders::UNKNOWN_USER),
        },
        None => ProjectInfo {
            name: placeholders::UNKNOWN_NAME,
            admins: Vec::new(),
            members: Vec::new(),
            guests: Vec::new(),
        },
    }
}

/// Datatype name followed by `<tag, tag>` when the dataset has tags
fn datatype_label(ds: &Dataset, datatypes: &LookupTable<'_, Datatype>) -> String {
    let name = datatypes.name_or(ds.datatype.as_deref(), placeholders::UNKNOWN_NAME);
    if ds.datatype_tags.is_empty() {
        name.to_string()
    } else {
        format!("{}<{}>", name, ds.datatype_tags.join(", "))
    }
}

/// Render datasets as a text report
pub fn format_datasets(
    datasets: &[Dataset],
    lookups: &DatasetLookups<'_>,
    sel: &DatasetSelector,
    now: DateTime<Utc>,
) -> String {
    let blocks = datasets
        .iter()
        .map(|ds| {
            let project = project_info(ds.project.as_deref(), lookups);
            let show_project = sel.all || sel.project;
            let show_subject = sel.all || sel.subject;

            let mut block = RecordBlock::new();
            block.field(sel.all || sel.id, "Id", &ds.id);
            block.field(show_project, "Project", project.name);
            block.field(show_project, "Admins", project.admins.join(", "));
            block.field(show_project, "Members", project.members.join(", "));
            block.field(show_project, "Guests", project.guests.join(", "));
            block.field(
                show_subject,
                "Subject",
                ds.subject().unwrap_or(placeholders::NOT_AVAILABLE),
            );
            block.field(show_subject, "Session", ds.session().unwrap_or(""));
            block.field(
                sel.all || sel.datatype,
                "Datatype",
                datatype_label(ds, &lookups.datatypes),
            );
            block.field(
                sel.all || sel.desc,
                "Description",
                ds.desc.as_deref().unwrap_or(""),
            );
            block.field(
                sel.all || sel.create_date,
                "Create Date",
                format_date(ds.create_date.as_deref(), now),
            );
            block.field(
                sel.all || sel.storage,
                "Storage",
                ds.storage.as_deref().unwrap_or(""),
            );
            block.field(
                sel.all || sel.status,
                "Status",
                ds.status.as_deref().unwrap_or(""),
            );
            block
        })
        .collect();

    render_report(blocks)
}
