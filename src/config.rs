use anyhow::{bail, Result};
use log::debug;
use std::env;

const URL_VAR: &str = "JIRA_URL";
const EMAIL_VAR: &str = "JIRA_EMAIL";
const TOKEN_VAR: &str = "JIRA_API_TOKEN";

/// Run configuration, read once from the environment at startup and passed
/// by reference to everything that needs it. `base_url` is the Jira API base
/// without a trailing slash, e.g. `https://example.atlassian.net`; it is used
/// verbatim for both API calls and issue links.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub email: String,
    pub api_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self::from_lookup(|var| env::var(var).ok())?;
        debug!("{}: {}", URL_VAR, config.base_url);
        debug!("{}: {}", EMAIL_VAR, config.email);
        debug!("{}: ***SET***", TOKEN_VAR);
        Ok(config)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_url: require(&lookup, URL_VAR)?,
            email: require(&lookup, EMAIL_VAR)?,
            api_token: require(&lookup, TOKEN_VAR)?,
        })
    }
}

fn require<F>(lookup: &F, var: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("{} environment variable not set", var),
    }
}
