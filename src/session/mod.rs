//! Session token persistence.
//!
//! A single named slot in the application directory holds one opaque session
//! token. The token is a stand-in credential: it exists while a user is
//! logged in and carries no structure. Callers decide the failure policy;
//! the session event handler treats a failed read as "no token" and logs
//! (but does not propagate) failed writes and clears.

mod error;

pub use error::SessionError;

use log::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "session";

/// Oversees the on-disk session token slot.
///
pub struct SessionStore {
    file_path: Option<PathBuf>,
}

impl SessionStore {
    /// Return a store bound to the slot inside the given application
    /// directory. The directory is created on the first write.
    ///
    pub fn new(dir_path: &Path) -> SessionStore {
        SessionStore {
            file_path: Some(dir_path.join(Path::new(FILE_NAME))),
        }
    }

    /// Read the token slot. Returns `None` when no token has been stored.
    ///
    pub fn get(&self) -> Result<Option<String>, SessionError> {
        let file_path = self.file_path.as_ref().ok_or(SessionError::FilePathNotSet)?;
        if !file_path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(file_path).map_err(|e| SessionError::ReadFailed {
            path: file_path.clone(),
            source: e,
        })?;
        let token = contents.trim();
        if token.is_empty() {
            Ok(None)
        } else {
            Ok(Some(token.to_string()))
        }
    }

    /// Write a token into the slot, replacing any previous value.
    ///
    pub fn set(&self, token: &str) -> Result<(), SessionError> {
        let file_path = self.file_path.as_ref().ok_or(SessionError::FilePathNotSet)?;
        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| SessionError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        debug!("Persisting session token...");
        fs::write(file_path, token).map_err(|e| SessionError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })
    }

    /// Remove the token slot. Clearing an already-empty slot is not an error.
    ///
    pub fn clear(&self) -> Result<(), SessionError> {
        let file_path = self.file_path.as_ref().ok_or(SessionError::FilePathNotSet)?;
        if !file_path.exists() {
            return Ok(());
        }
        debug!("Clearing session token...");
        fs::remove_file(file_path).map_err(|e| SessionError::ClearFailed {
            path: file_path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> (SessionStore, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "apiary-tui-session-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        (SessionStore::new(&dir), dir)
    }

    #[test]
    fn test_get_without_token_returns_none() {
        let (store, dir) = temp_store("empty");
        assert!(store.get().unwrap().is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_set_then_get_returns_token() {
        let (store, dir) = temp_store("set-get");
        store.set("dummy-token").unwrap();
        assert_eq!(store.get().unwrap().as_deref(), Some("dummy-token"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_clear_removes_token() {
        let (store, dir) = temp_store("clear");
        store.set("dummy-token").unwrap();
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_clear_on_empty_slot_is_ok() {
        let (store, dir) = temp_store("clear-empty");
        assert!(store.clear().is_ok());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_blank_token_reads_as_none() {
        let (store, dir) = temp_store("blank");
        store.set("   ").unwrap();
        assert!(store.get().unwrap().is_none());
        let _ = fs::remove_dir_all(&dir);
    }
}
