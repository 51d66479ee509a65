//! Durable login session, modeled on browser cookies.
//!
//! Two named entries are kept: the serialized [`UserIdentity`] and the raw
//! bearer token. Each entry records an absolute expiry and entries written
//! by a login live for seven days. Expiry is enforced on read, so a stale
//! session simply restores as signed-out.
//!
//! Entries are JSON files under the platform data directory on native
//! builds and live in a process-wide map on WASM.

use crate::types::UserIdentity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use time::OffsetDateTime;

#[cfg(not(target_arch = "wasm32"))]
use std::fs;

#[cfg(target_arch = "wasm32")]
use {once_cell::sync::Lazy, std::collections::HashMap, std::sync::Mutex};

pub const USER_ENTRY: &str = "user";
pub const TOKEN_ENTRY: &str = "auth_token";

/// How long a fresh session stays valid: seven days.
pub const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage: {0}")]
    Io(#[from] std::io::Error),
    #[error("session entry encoding: {0}")]
    Encode(#[from] serde_json::Error),
}

/// One stored value plus its expiry as a unix timestamp.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionEntry {
    pub value: String,
    pub expires_at: i64,
}

impl SessionEntry {
    fn is_expired(&self, now: i64) -> bool {
        self.expires_at <= now
    }
}

/// In-memory store for WASM builds.
#[cfg(target_arch = "wasm32")]
static SESSION_STORE: Lazy<Mutex<HashMap<String, SessionEntry>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// A directory of expiring entries. Separate jar roots never see each
/// other's entries, which keeps tests isolated.
pub struct SessionJar {
    root: PathBuf,
}

impl SessionJar {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The jar used by the running app.
    pub fn default_location() -> Self {
        if let Some(data_dir) = dirs::data_local_dir() {
            return Self::new(data_dir.join("dialogue-forge").join("session"));
        }
        Self::new(PathBuf::from("cache").join("session"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_entry_name(key)))
    }

    #[cfg(target_arch = "wasm32")]
    fn entry_key(&self, key: &str) -> String {
        format!("{}::{}", self.root.display(), sanitize_entry_name(key))
    }

    /// Stores a value with the standard seven-day lifetime.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.set_with_expiry(key, value, now_unix() + SESSION_TTL_SECS)
    }

    /// Stores a value with an explicit expiry timestamp.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expires_at: i64,
    ) -> Result<(), SessionError> {
        let entry = SessionEntry {
            value: value.to_string(),
            expires_at,
        };
        fs::create_dir_all(&self.root)?;
        fs::write(self.entry_path(key), serde_json::to_string(&entry)?)?;
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expires_at: i64,
    ) -> Result<(), SessionError> {
        let entry = SessionEntry {
            value: value.to_string(),
            expires_at,
        };
        if let Ok(mut store) = SESSION_STORE.lock() {
            store.insert(self.entry_key(key), entry);
        }
        Ok(())
    }

    /// Reads a live value. Expired entries are dropped on the spot and read
    /// back as absent.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        let raw = fs::read_to_string(&path).ok()?;
        let entry: SessionEntry = serde_json::from_str(&raw).ok()?;
        if entry.is_expired(now_unix()) {
            let _ = fs::remove_file(&path);
            return None;
        }
        Some(entry.value)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn get(&self, key: &str) -> Option<String> {
        let mut store = SESSION_STORE.lock().ok()?;
        let map_key = self.entry_key(key);
        let entry = store.get(&map_key)?;
        if entry.is_expired(now_unix()) {
            store.remove(&map_key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Removes an entry. Removing an absent entry is not an error.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        let path = self.entry_path(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn remove(&self, key: &str) -> Result<(), SessionError> {
        if let Ok(mut store) = SESSION_STORE.lock() {
            store.remove(&self.entry_key(key));
        }
        Ok(())
    }
}

/// Keeps entry names safe for filesystem use.
fn sanitize_entry_name(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

// ============================================
// Session-level Operations
// ============================================

/// What the jar restored at startup. Absent or expired entries leave their
/// field `None`; a session counts as signed-in only while a token is held.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserIdentity>,
    pub token: Option<String>,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Restores the session from the app's default jar.
pub fn restore() -> Session {
    restore_from(&SessionJar::default_location())
}

/// Restores whatever live entries `jar` holds.
pub fn restore_from(jar: &SessionJar) -> Session {
    let user = jar
        .get(USER_ENTRY)
        .and_then(|raw| serde_json::from_str(&raw).ok());
    let token = jar.get(TOKEN_ENTRY);
    Session { user, token }
}

/// Writes both session entries with a fresh seven-day lifetime.
pub fn persist(jar: &SessionJar, user: &UserIdentity, token: &str) -> Result<(), SessionError> {
    jar.set(USER_ENTRY, &serde_json::to_string(user)?)?;
    jar.set(TOKEN_ENTRY, token)
}

/// Drops both session entries.
pub fn discard(jar: &SessionJar) -> Result<(), SessionError> {
    jar.remove(USER_ENTRY)?;
    jar.remove(TOKEN_ENTRY)
}
