mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "irongithub")]
#[command(about = "Call the GitHub REST API with Basic authentication")]
struct Cli {
    /// Output format: pretty or json
    #[arg(long, default_value = "pretty", global = true)]
    output: String,

    /// API base URL (overrides GITHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the authenticated user
    User,
    /// List, create or revoke OAuth authorizations
    #[command(subcommand)]
    Authorizations(commands::authorizations::AuthorizationsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("irongithub=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = OutputFormat::parse(&cli.output);
    let config = Config::from_env(cli.api_url.as_deref())?;
    let client = config.client()?;

    let result = match &cli.command {
        Commands::User => commands::user::run(&client, &format).await,
        Commands::Authorizations(cmd) => {
            commands::authorizations::run(cmd, &client, &format).await
        }
    };

    if let Some(api) = result.as_ref().err().and_then(output::api_error_of) {
        output::print_api_error(api);
        std::process::exit(1);
    }

    result
}
