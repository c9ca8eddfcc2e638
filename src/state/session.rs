//! Session store with pluggable persistence.
//!
//! The store owns the authenticated session for the lifetime of the
//! application run. Persistence is behind the [`SessionStorage`] trait:
//! load at startup, save on every change, clear on logout. The filesystem
//! adapter keeps the session as JSON under the user config directory; the
//! in-memory adapter backs tests.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing::warn;

use crate::domain::Session;

// ============================================================================
// Storage Adapter
// ============================================================================

/// Persistence seam for the session store.
pub trait SessionStorage {
    /// Load a previously saved session, if any. Unreadable or corrupt
    /// state reads as "no session".
    fn load(&self) -> Option<Session>;

    /// Persist the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be written.
    fn save(&self, session: &Session) -> Result<()>;

    /// Remove any persisted session.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted state cannot be removed.
    fn clear(&self) -> Result<()>;
}

// ============================================================================
// Filesystem Adapter
// ============================================================================

/// Session file name inside the config directory.
const SESSION_FILE: &str = "session.json";

/// Stores the session as JSON at
/// `<config_dir>/carlosphere/session.json`.
#[derive(Debug, Clone)]
pub struct FsSessionStorage {
    path: PathBuf,
}

impl FsSessionStorage {
    /// Adapter at the default config-directory location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or
    /// created.
    pub fn new() -> Result<Self> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!("Could not determine config directory")
        })?;
        path.push("carlosphere");
        fs::create_dir_all(&path)?;
        path.push(SESSION_FILE);
        Ok(Self { path })
    }

    /// Adapter at an explicit path.
    #[must_use]
    #[allow(dead_code)] // Part of storage API
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStorage for FsSessionStorage {
    fn load(&self) -> Option<Session> {
        let content = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(err) => {
                warn!(%err, "discarding unreadable session file");
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

// ============================================================================
// In-Memory Adapter
// ============================================================================

/// Keeps the session in memory only. Used by tests and by `--no-persist`.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<Session>>,
}

impl MemorySessionStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> Option<Session> {
        self.slot.lock().expect("session slot poisoned").clone()
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.slot.lock().expect("session slot poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.slot.lock().expect("session slot poisoned") = None;
        Ok(())
    }
}

// ============================================================================
// Session Store
// ============================================================================

/// Owner of the current session. All reads of the token or user profile go
/// through here; writes happen only on login/signup success and logout.
pub struct SessionStore {
    session: Option<Session>,
    storage: Box<dyn SessionStorage + Send>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.session.is_some())
            .finish()
    }
}

impl SessionStore {
    /// Creates a store, loading any persisted session at startup.
    #[must_use]
    pub fn new(storage: Box<dyn SessionStorage + Send>) -> Self {
        let session = storage.load();
        Self { session, storage }
    }

    /// Returns `true` when a session token is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The bearer token, when signed in.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// The current session.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Installs a freshly authenticated session and persists it.
    pub fn establish(&mut self, session: Session) {
        if let Err(err) = self.storage.save(&session) {
            warn!(%err, "failed to persist session");
        }
        self.session = Some(session);
    }

    /// Logs out: drops the session and removes the persisted copy.
    pub fn clear(&mut self) {
        if let Err(err) = self.storage.clear() {
            warn!(%err, "failed to clear persisted session");
        }
        self.session = None;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        Session::new(token, None)
    }

    #[test]
    fn test_store_starts_empty_with_empty_storage() {
        let store = SessionStore::new(Box::new(MemorySessionStorage::new()));
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_establish_saves_and_exposes_token() {
        let mut store = SessionStore::new(Box::new(MemorySessionStorage::new()));
        store.establish(session("tok123"));

        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("tok123"));
    }

    #[test]
    fn test_clear_removes_session() {
        let mut store = SessionStore::new(Box::new(MemorySessionStorage::new()));
        store.establish(session("tok123"));
        store.clear();

        assert!(!store.is_authenticated());
        assert!(store.session().is_none());
    }

    #[test]
    fn test_fs_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FsSessionStorage::at_path(dir.path().join("session.json"));

        storage.save(&session("tok")).unwrap();
        assert_eq!(storage.load(), Some(session("tok")));

        storage.clear().unwrap();
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_fs_storage_ignores_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FsSessionStorage::at_path(path);
        assert!(storage.load().is_none());
    }

    #[test]
    fn test_store_loads_persisted_session_at_startup() {
        let storage = MemorySessionStorage::new();
        storage.save(&session("persisted")).unwrap();

        let store = SessionStore::new(Box::new(storage));
        assert_eq!(store.token(), Some("persisted"));
    }
}
