//! Project report formatter

use super::lookup::LookupTable;
use super::report::{render_report, RecordBlock};
use super::selectors::ProjectSelector;
use crate::config::placeholders;
use crate::platform::{Profile, Project};

/// Access level, noting private projects that are still listed
fn access_label(prj: &Project) -> String {
    let access = prj.access.as_deref().unwrap_or("");
    if prj.listed {
        format!("{} (but listed for all users)", access)
    } else {
        access.to_string()
    }
}

/// Render projects as a text report, resolving member ids to usernames
pub fn format_projects(
    projects: &[Project],
    profiles: &LookupTable<'_, Profile>,
    sel: &ProjectSelector,
) -> String {
    let blocks = projects
        .iter()
        .map(|prj| {
            let usernames = |ids: &[String]| {
                profiles
                    .names_or(ids, placeholders::UNKNOWN_USER)
                    .join(", ")
            };

            let mut block = RecordBlock::new();
            block.field(sel.all || sel.id, "Id", &prj.id);
            block.field(sel.all || sel.name, "Name", &prj.name);
            block.field(sel.all || sel.admins, "Admins", usernames(&prj.admins));
            block.field(sel.all || sel.members, "Members", usernames(&prj.members));
            block.field(sel.all || sel.guests, "Guests", usernames(&prj.guests));
            block.field(sel.all || sel.access, "Access", access_label(prj));
            block.field(sel.all || sel.desc, "Description", prj.description());
            block
        })
        .collect();

    render_report(blocks)
}
