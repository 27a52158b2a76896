use crate::error::AppError;
use crate::region::Region;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A saved search outlives one run of the tool, but not a day's break.
const SESSION_HOURS: i64 = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastSearch {
    pub term: String,
    pub region: Region,
    pub searched_at: DateTime<Utc>,
}

impl LastSearch {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.searched_at) > Duration::hours(SESSION_HOURS)
    }
}

/// Holds the last searched summoner, optionally backed by a file.
#[derive(Debug, Default)]
pub struct Session {
    path: Option<PathBuf>,
    last: Option<LastSearch>,
}

impl Session {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".league_finder")
            .join("session.json")
    }

    /// A missing or corrupt file starts an empty session that the next
    /// search overwrites. Any other read failure is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();
        let last = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<LastSearch>(&content) {
                Ok(saved) => (!saved.is_expired(Utc::now())).then_some(saved),
                Err(e) => {
                    warn!("ignoring corrupt session {}: {}", path.display(), e);
                    None
                }
            },
            // No session yet
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(AppError::SessionError(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        Ok(Session {
            path: Some(path),
            last,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn last_search(&self) -> Option<&LastSearch> {
        self.last.as_ref()
    }

    pub fn remember(&mut self, term: &str, region: Region) -> Result<(), AppError> {
        let entry = LastSearch {
            term: term.to_string(),
            region,
            searched_at: Utc::now(),
        };
        self.last = Some(entry);
        self.save()
    }

    fn save(&self) -> Result<(), AppError> {
        let (Some(path), Some(last)) = (&self.path, &self.last) else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::SessionError(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        let json = serde_json::to_string_pretty(last).map_err(|e| {
            AppError::SessionError(format!("Failed to serialize session: {}", e))
        })?;
        fs::write(path, json)
            .map_err(|e| AppError::SessionError(format!("Failed to write session: {}", e)))
    }
}
