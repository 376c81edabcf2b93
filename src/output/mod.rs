//! Output formatting module
//!
//! Text reports join each primary record with its auxiliary lookups;
//! raw mode prints the fetched JSON untouched.

mod common;
mod datasets;
mod lookup;
mod profiles;
mod projects;
mod report;
mod selectors;

pub use common::{error_message, output_error, raw_json};
pub use datasets::{format_datasets, DatasetLookups};
pub use lookup::LookupTable;
pub use profiles::format_profiles;
pub use projects::format_projects;
pub use report::{format_date, pluralize, render_report, summary_line, RecordBlock};
pub use selectors::{DatasetSelector, ProfileSelector, ProjectSelector};
