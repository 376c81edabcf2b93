//! Project command handlers

use log::debug;

use crate::cli::ProjectQueryArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::output::{format_projects, raw_json, LookupTable, ProjectSelector};
use crate::platform::query::Page;
use crate::platform::BlClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::models::ProjectQuery;

/// Run the project query command
pub async fn run_project_command(
    client: &BlClient,
    settings: &Settings,
    args: &ProjectQueryArgs,
) -> Result<()> {
    let spinner = create_spinner(
        "Querying projects...",
        settings.batch || args.output.is_raw(),
    );

    match project_report(client, args).await {
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

async fn project_report(client: &BlClient, args: &ProjectQueryArgs) -> Result<String> {
    let query = ProjectQuery {
        search: args.search.as_deref(),
        id: args.id.as_deref(),
        admin: args.admin.as_deref(),
        member: args.member.as_deref(),
        guest: args.guest.as_deref(),
    };

    let page = Page::new(args.skip, args.limit);

    if args.output.is_raw() {
        let fetched = client.query_projects_raw(&query, page).await?;
        return Ok(raw_json(&fetched.records));
    }

    let fetched = client.query_projects(&query, page).await?;

    let sel = ProjectSelector::from_fields(&args.show);
    let profiles = if sel.needs_profiles() && !fetched.is_empty() {
        debug!("Fetching profiles to resolve project members");
        client.query_all_profiles().await?.records
    } else {
        Vec::new()
    };

    Ok(format_projects(
        &fetched.records,
        &LookupTable::new(&profiles),
        &sel,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputArgs, ProjectField};
    use crate::error::BlError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args() -> ProjectQueryArgs {
        ProjectQueryArgs {
            id: None,
            search: None,
            admin: None,
            member: None,
            guest: None,
            skip: None,
            limit: None,
            show: Vec::new(),
            output: OutputArgs::default(),
        }
    }

    #[tokio::test]
    async fn test_project_report_resolves_usernames() {
        let server = MockServer::start().await;
        let client = BlClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/warehouse/project"))
            .and(query_param("find", r#"{"admins":"1"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "projects": [{
                    "_id": "p1",
                    "name": "HCP",
                    "admins": ["1"],
                    "members": ["2", "7"],
                    "guests": [],
                    "access": "private",
                    "listed": true,
                    "desc": "Human Connectome"
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/profile/list"))
            .and(query_param("limit", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "profiles": [
                    {"id": 1, "username": "alice"},
                    {"id": 2, "username": "bob"}
                ]
            })))
            .mount(&server)
            .await;

        let mut args = args();
        args.admin = Some("1".to_string());
        let report = project_report(&client, &args).await.unwrap();
        assert!(report.contains("Admins: alice\nMembers: bob, unknown\nGuests: \n"));
        assert!(report.contains("Access: private (but listed for all users)"));
        assert!(report.ends_with("(Returned 1 result)"));
    }

    #[tokio::test]
    async fn test_project_report_without_profile_fields() {
        let server = MockServer::start().await;
        let client = BlClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .and(path("/warehouse/project"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "projects": [{"_id": "p1", "name": "HCP"}]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/auth/profile/list"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let mut args = args();
        args.show = vec![ProjectField::Name];
        let report = project_report(&client, &args).await.unwrap();
        assert_eq!(report, "Name: HCP\n\n(Returned 1 result)");
    }

    #[tokio::test]
    async fn test_project_report_auth_failure() {
        let server = MockServer::start().await;
        let client = BlClient::test_client(&server.uri());

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string("jwt expired"))
            .mount(&server)
            .await;

        let result = project_report(&client, &args()).await;
        assert!(matches!(result, Err(BlError::Auth(_))));
    }
}
