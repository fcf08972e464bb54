//! # Bot Configuration Module
//!
//! Settings read from the environment at start-up.

use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::path::PathBuf;

pub const TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CONSULTATION_URL_VAR: &str = "CONSULTATION_URL";
pub const USERS_FILE_VAR: &str = "USERS_FILE";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("Unsupported {LOG_FORMAT_VAR} '{other}', expected 'text' or 'json'"),
        }
    }
}

#[derive(Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub token: String,
    /// Target of the call-to-action button
    pub consultation_url: Url,
    /// JSON file holding the user registry
    pub users_file: PathBuf,
    pub log_format: LogFormat,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"<redacted>")
            .field("consultation_url", &self.consultation_url.as_str())
            .field("users_file", &self.users_file)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl BotConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|value| !value.trim().is_empty())
            .with_context(|| format!("{TOKEN_VAR} must be set"))?;

        let raw_url = lookup(CONSULTATION_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .with_context(|| format!("{CONSULTATION_URL_VAR} must be set"))?;
        let consultation_url = Url::parse(raw_url.trim())
            .with_context(|| format!("{CONSULTATION_URL_VAR} is not a valid URL: {raw_url}"))?;

        let users_file = lookup(USERS_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USERS_FILE.to_string())
            .into();

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            token,
            consultation_url,
            users_file,
            log_format,
        })
    }
}
