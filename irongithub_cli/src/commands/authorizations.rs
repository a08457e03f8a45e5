//! The `authorizations` subcommands.

use anyhow::Result;
use clap::{Args, Subcommand};
use irongithub_api::types::{AuthorizationID, NewAuthorization, Scopes};
use irongithub_api::Client;

use crate::output::{print_json, OutputFormat};

#[derive(Subcommand)]
pub enum AuthorizationsCommand {
    /// List authorizations
    List,
    /// Show a single authorization
    Get {
        /// Authorization ID
        id: AuthorizationID,
    },
    /// Create an authorization and print its token
    Create(CreateArgs),
    /// Revoke an authorization
    Delete {
        /// Authorization ID
        id: AuthorizationID,
    },
}

#[derive(Args)]
pub struct CreateArgs {
    /// Scope to grant (repeatable, or comma-separated: repo,gist)
    #[arg(long = "scope")]
    pub scopes: Vec<String>,

    /// Note shown next to the authorization on GitHub
    #[arg(long)]
    pub note: Option<String>,

    /// URL shown next to the note
    #[arg(long)]
    pub note_url: Option<String>,

    /// Distinguishes several authorizations for the same client
    #[arg(long)]
    pub fingerprint: Option<String>,
}

impl CreateArgs {
    fn to_request(&self) -> NewAuthorization {
        let scopes = parse_scopes(&self.scopes);
        let mut request = NewAuthorization::new(scopes);
        if let Some(note) = &self.note {
            request = request.with_note(note);
        }
        if let Some(note_url) = &self.note_url {
            request = request.with_note_url(note_url);
        }
        if let Some(fingerprint) = &self.fingerprint {
            request = request.with_fingerprint(fingerprint);
        }
        request
    }
}

fn parse_scopes(values: &[String]) -> Scopes {
    values
        .iter()
        .flat_map(|value| value.parse::<Scopes>().unwrap_or_default())
        .collect()
}

pub async fn run(
    cmd: &AuthorizationsCommand,
    client: &Client,
    format: &OutputFormat,
) -> Result<()> {
    match cmd {
        AuthorizationsCommand::List => {
            let resp = client.list_authorizations().await?;
            print_json(resp.result(), format);
        }
        AuthorizationsCommand::Get { id } => {
            let resp = client.get_authorization(*id).await?;
            print_json(resp.result(), format);
        }
        AuthorizationsCommand::Create(args) => {
            let resp = client.create_authorization(&args.to_request()).await?;
            eprintln!("Store the token now: GitHub will not show it again.");
            print_json(resp.result(), format);
        }
        AuthorizationsCommand::Delete { id } => {
            let resp = client.delete_authorization(*id).await?;
            println!("Deleted authorization {} ({})", id, resp.status());
        }
    }
    Ok(())
}
