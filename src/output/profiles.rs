//! Profile report formatter

use super::report::{render_report, RecordBlock};
use super::selectors::ProfileSelector;
use crate::platform::{compare_ids, Profile};

/// Render profiles as a text report, ordered by id
pub fn format_profiles(profiles: &[Profile], sel: &ProfileSelector) -> String {
    let mut sorted: Vec<&Profile> = profiles.iter().collect();
    sorted.sort_by(|a, b| compare_ids(&a.id, &b.id));

    let blocks = sorted
        .into_iter()
        .map(|p| {
            let mut block = RecordBlock::new();
            block.field(sel.all || sel.id, "Id", &p.id);
            block.field(sel.all || sel.username, "Username", &p.username);
            block.field(
                sel.all || sel.fullname,
                "Full Name",
                p.fullname.as_deref().unwrap_or(""),
            );
            block.field(
                sel.all || sel.email,
                "Email",
                p.email.as_deref().unwrap_or(""),
            );
            block.field(
                sel.all || sel.active,
                "Active",
                p.active.unwrap_or(false),
            );
            block
        })
        .collect();

    render_report(blocks)
}
