//! Profile command handlers

use crate::cli::ProfileQueryArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{format_profiles, raw_json, ProfileSelector};
use crate::platform::query::Page;
use crate::platform::BlClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::models::ProfileQuery;

/// Run the profile query command
pub async fn run_profile_command(
    client: &BlClient,
    settings: &Settings,
    args: &ProfileQueryArgs,
) -> Result<()> {
    let spinner = create_spinner(
        "Querying profiles...",
        settings.batch || args.output.is_raw(),
    );

    match profile_report(client, args).await {
        Ok(report) => {
            finish_spinner(spinner, "Done");
            println!("{}", report);
            Ok(())
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e)
        }
    }
}

async fn profile_report(client: &BlClient, args: &ProfileQueryArgs) -> Result<String> {
    let query = ProfileQuery {
        search: args.search.as_deref(),
        id: args.id.as_deref(),
    };
    let page = Page::new(args.skip, args.limit);

    if args.output.is_raw() {
        let fetched = client.query_profiles_raw(&query, page).await?;
        return Ok(raw_json(&fetched.records));
    }

    let fetched = client.query_profiles(&query, page).await?;
    let sel = ProfileSelector::from_fields(&args.show);
    Ok(format_profiles(&fetched.records, &sel))
}
