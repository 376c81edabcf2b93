//! brainlife query CLI - Main entry point

use clap::Parser;
use log::{debug, info};

use blquery::{
    output_error, run_dataset_command, run_profile_command, run_project_command, ApiResolver,
    BlClient, Cli, Command, DatasetAction, ProfileAction, ProjectAction, Result, Settings,
    TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    if let Some(help) = cli.resource_help() {
        println!("{}", help);
        return;
    }

    let raw = cli.raw_output();
    if let Err(e) = run(&cli).await {
        debug!("Command failed: {:?}", e);
        output_error(&e, raw);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    info!("Starting bl v{}", env!("CARGO_PKG_VERSION"));

    let api_url = ApiResolver::resolve(cli.api.as_deref())?;
    let token = TokenResolver::new().resolve(cli.token.as_deref())?;
    let settings = Settings::new(&api_url, token, cli.batch);
    let client = BlClient::new(&settings);
    debug!("Using API at {}", settings.api_url);

    match &cli.command {
        Command::Dataset {
            action: Some(DatasetAction::Query(args)),
        } => run_dataset_command(&client, &settings, args).await,
        Command::Profile {
            action: Some(ProfileAction::Query(args)),
        } => run_profile_command(&client, &settings, args).await,
        Command::Project {
            action: Some(ProjectAction::Query(args)),
        } => run_project_command(&client, &settings, args).await,
        Command::Dataset { action: None }
        | Command::Profile { action: None }
        | Command::Project { action: None } => Ok(()),
    }
}
