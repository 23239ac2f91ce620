//! Persisted authentication state: one bearer token and one user profile,
//! stored together as a JSON file. Written at login, read when attaching the
//! Authorization header, cleared at logout. The two values share a lifecycle
//! and are never stored separately.

use crate::error::ApiError;
use core_types::UserProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the stored session. A missing or unreadable file is treated as
    /// "not logged in" (with a warning for corruption), never an error.
    pub fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding corrupt session file");
                None
            }
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), ApiError> {
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| ApiError::Session(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| ApiError::Session(e.to_string()))
    }

    /// Removes the session file. Clearing an already-absent session is fine.
    pub fn clear(&self) -> Result<(), ApiError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Session(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Session {
        Session {
            token: "bearer-token".to_string(),
            user: UserProfile {
                name: "Ada".to_string(),
                role: "admin".to_string(),
                email: None,
            },
        }
    }

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        assert_eq!(store.load(), None);

        store.save(&sample()).unwrap();
        assert_eq!(store.load(), Some(sample()));

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        // Clearing twice is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SessionStore::new(path);
        assert_eq!(store.load(), None);
    }
}
