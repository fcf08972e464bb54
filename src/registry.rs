//! # User Registry Module
//!
//! Append-only list of users who started the bot, kept as a pretty-printed
//! JSON array. Each user id appears at most once. The whole file is read
//! and rewritten on every new registration.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Represents a registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: u64,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

pub struct UserRegistry {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl UserRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add a user unless the id is already present.
    /// Returns `true` when a new entry was written.
    pub async fn register(&self, id: u64, display_name: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.load().await?;
        if users.iter().any(|user| user.id == id) {
            debug!(user_id = id, "User already registered");
            return Ok(false);
        }

        users.push(RegisteredUser {
            id,
            display_name: display_name.to_string(),
            registered_at: Some(Utc::now()),
        });
        self.store(&users).await?;

        info!(user_id = id, total_users = users.len(), "Registered new user");
        Ok(true)
    }

    /// Read every registered user
    pub async fn users(&self) -> Result<Vec<RegisteredUser>> {
        self.load().await
    }

    async fn load(&self) -> Result<Vec<RegisteredUser>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read user registry {}", self.path.display())
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "User registry is malformed, starting empty");
                Ok(Vec::new())
            }
        }
    }

    async fn store(&self, users: &[RegisteredUser]) -> Result<()> {
        let json = serde_json::to_string_pretty(users).context("Failed to serialize user registry")?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || -> Result<()> {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };

            let mut temp_file = NamedTempFile::new_in(dir)
                .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
            temp_file.write_all(json.as_bytes())?;
            temp_file
                .persist(&path)
                .with_context(|| format!("Failed to write user registry {}", path.display()))?;
            Ok(())
        })
        .await
        .context("User registry writer task failed")?
    }
}
