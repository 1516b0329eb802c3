use crate::error::Result;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSION_EXPIRY_MINUTES: i64 = 30;

/// Pointer to the most recent server session for a user, kept locally so
/// consecutive invocations continue the same conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPointer {
    pub session_id: String,
    pub user_id: String,
    pub last_updated: chrono::DateTime<chrono::Local>,
}

impl SessionPointer {
    pub fn new(session_id: &str, user_id: &str) -> Self {
        Self {
            session_id: session_id.to_string(),
            user_id: user_id.to_string(),
            last_updated: Local::now(),
        }
    }
}

/// Filesystem cache of session pointers, one file per user, under
/// `~/.cache/chat2rec` by default.
pub struct SessionCache {
    dir: PathBuf,
}

impl SessionCache {
    pub fn new() -> Self {
        let home = env::var("HOME").expect("HOME environment variable not set");
        Self {
            dir: Path::new(&home).join(".cache").join("chat2rec"),
        }
    }

    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn cache_dir(&self) -> &Path {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).expect("Failed to create cache directory");
        }
        &self.dir
    }

    fn pointer_path(&self, user_id: &str) -> PathBuf {
        self.cache_dir().join(format!("session-{}.json", user_id))
    }

    /// Most recent pointer for `user_id`, honoring the expiry window.
    /// Expired pointers are cleaned up on the way out.
    pub fn find_recent(&self, user_id: &str) -> Option<SessionPointer> {
        let path = self.pointer_path(user_id);
        let pointer = self.read_pointer(&path)?;

        let age_minutes = Local::now()
            .signed_duration_since(pointer.last_updated)
            .num_minutes();
        if age_minutes.abs() < SESSION_EXPIRY_MINUTES {
            Some(pointer)
        } else {
            let _ = fs::remove_file(path);
            None
        }
    }

    /// Most recent pointer for `user_id` regardless of age (`--continue`).
    pub fn find_latest(&self, user_id: &str) -> Option<SessionPointer> {
        self.read_pointer(&self.pointer_path(user_id))
    }

    fn read_pointer(&self, path: &Path) -> Option<SessionPointer> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    pub fn save(&self, pointer: &SessionPointer) -> Result<()> {
        let path = self.pointer_path(&pointer.user_id);
        let content = serde_json::to_string_pretty(pointer)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn clear_all(&self) -> Result<()> {
        let cache_dir = self.cache_dir();
        if let Ok(entries) = fs::read_dir(cache_dir) {
            for entry in entries.filter_map(|e| e.ok()) {
                let path = entry.path();
                let is_pointer = path.extension() == Some(std::ffi::OsStr::new("json"))
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| n.starts_with("session-"))
                        .unwrap_or(false);
                if is_pointer {
                    fs::remove_file(path)?;
                }
            }
        }
        Ok(())
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
