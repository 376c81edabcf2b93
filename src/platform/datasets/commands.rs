//! Dataset command handlers

use chrono::{DateTime, Utc};
use log::debug;

use crate::cli::DatasetQueryArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{format_datasets, raw_json, DatasetLookups, DatasetSelector, LookupTable};
use crate::platform::query::Page;
use crate::platform::BlClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::models::DatasetQuery;

/// Run the dataset query command
pub async fn run_dataset_command(
    client: &BlClient,
    settings: &Settings,
    args: &DatasetQueryArgs,
) -> Result<()> {
    let spinner = create_spinner(
        "Querying datasets...",
        settings.batch || args.output.is_raw(),
    );

    match dataset_report(client, args, Utc::now()).await {
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

/// Fetch datasets plus the lookups their report needs, and render them
async fn dataset_report(
    client: &BlClient,
    args: &DatasetQueryArgs,
    now: DateTime<Utc>,
) -> Result<String> {
    let datatype = match args.datatype.as_deref() {
        Some(value) => Some(client.resolve_datatype_id(value).await?),
        None => None,
    };

    let query = DatasetQuery {
        search: args.search.as_deref(),
        id: args.id.as_deref(),
        datatype: datatype.as_deref(),
        project: args.project.as_deref(),
        subject: args.subject.as_deref(),
    };
    let page = Page::new(args.skip, args.limit);

    if args.output.is_raw() {
        let fetched = client.query_datasets_raw(&query, page).await?;
        return Ok(raw_json(&fetched.records));
    }

    let fetched = client.query_datasets(&query, page).await?;

    let sel = DatasetSelector::from_fields(&args.show);
    let need_projects = sel.needs_projects() && !fetched.is_empty();
    let need_datatypes = sel.needs_datatypes() && !fetched.is_empty();
    debug!(
        "Dataset lookups: projects/profiles={}, datatypes={}",
        need_projects, need_datatypes
    );

    let (projects, profiles, datatypes) = futures::try_join!(
        async {
            if need_projects {
                client.query_all_projects().await.map(|f| f.records)
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if need_projects {
                client.query_all_profiles().await.map(|f| f.records)
            } else {
                Ok(Vec::new())
            }
        },
        async {
            if need_datatypes {
                client.query_datatypes().await.map(|f| f.records)
            } else {
                Ok(Vec::new())
            }
        },
    )?;

    let lookups = DatasetLookups {
        projects: LookupTable::new(&projects),
        profiles: LookupTable::new(&profiles),
        datatypes: LookupTable::new(&datatypes),
    };

    Ok(format_datasets(&fetched.records, &lookups, &sel, now))
}
