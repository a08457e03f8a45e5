//! Connection settings read from the environment (and `.env`).

use anyhow::{bail, Context, Result};
use irongithub_api::{Client, Credential};

const USERNAME_VAR: &str = "GITHUB_USERNAME";
const PASSWORD_VAR: &str = "GITHUB_PASSWORD";
const API_URL_VAR: &str = "GITHUB_API_URL";

#[derive(Debug)]
pub struct Config {
    pub api_url: Option<String>,
    pub credential: Credential,
}

impl Config {
    /// `api_url` from the command line wins over `GITHUB_API_URL`.
    pub fn from_env(api_url: Option<&str>) -> Result<Self> {
        Self::from_lookup(api_url, |name| std::env::var(name).ok())
    }

    fn from_lookup(api_url: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let Some(username) = lookup(USERNAME_VAR) else {
            bail!("{} is not set", USERNAME_VAR);
        };
        let Some(password) = lookup(PASSWORD_VAR) else {
            bail!("{} is not set", PASSWORD_VAR);
        };
        let api_url = api_url
            .map(str::to_string)
            .or_else(|| lookup(API_URL_VAR))
            .filter(|url| !url.trim().is_empty());
        Ok(Self {
            api_url,
            credential: Credential::new(username, password),
        })
    }

    pub fn client(&self) -> Result<Client> {
        let client = match &self.api_url {
            Some(url) => Client::with_base_url(url),
            None => Client::new(),
        }
        .context("Failed to build GitHub client")?;
        Ok(client.with_credential(self.credential.clone()))
    }
}
