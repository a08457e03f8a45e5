//! The `user` subcommand: show who the credential belongs to.

use anyhow::Result;
use irongithub_api::Client;

use crate::output::{print_json, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.get_authenticated_user().await?;
    if let Some(scopes) = resp.http_response().oauth_scopes() {
        eprintln!("Granted scopes: {}", scopes);
    }
    print_json(resp.result(), format);
    Ok(())
}
