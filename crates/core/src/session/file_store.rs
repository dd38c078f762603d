use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use super::session_model::{Session, SessionEvent};
use super::session_traits::{SessionNotifier, SessionStore};
use crate::errors::{Error, Result};

/// Environment variable overriding the session file location.
pub const SESSION_PATH_ENV: &str = "ECOFI_SESSION_PATH";

const DEFAULT_SESSION_PATH: &str = ".ecofi/session.json";

/// Session persisted as a JSON file, so it survives restarts.
///
/// The file is re-read on every `load`, which keeps several processes
/// sharing one file consistent. Writes made through this handle publish
/// events immediately. Writes made by another handle or process are picked
/// up by [`FileSessionStore::poll_changes`], which
/// [`FileSessionStore::spawn_watcher`] runs on an interval.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    /// Last session this handle wrote or observed. Held for every write.
    observed: Mutex<Option<Session>>,
    notifier: SessionNotifier,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let store = Self {
            path: path.into(),
            observed: Mutex::new(None),
            notifier: SessionNotifier::new(),
        };
        if let Ok(current) = store.read_file() {
            if let Ok(mut observed) = store.observed.lock() {
                *observed = current;
            }
        }
        store
    }

    /// Uses `ECOFI_SESSION_PATH`, falling back to `.ecofi/session.json`.
    pub fn from_env() -> Self {
        let path = std::env::var(SESSION_PATH_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_SESSION_PATH.to_string());
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compares the file with the last observed session and publishes the
    /// difference, if any.
    pub fn poll_changes(&self) -> Result<Option<SessionEvent>> {
        let mut observed = self.lock()?;
        let current = self.read_file()?;

        let event = match (observed.as_ref(), current.as_ref()) {
            (None, Some(_)) => Some(SessionEvent::SignedIn),
            (Some(_), None) => Some(SessionEvent::SignedOut),
            (Some(before), Some(after)) if before != after => Some(SessionEvent::Updated),
            _ => None,
        };
        *observed = current;

        if let Some(event) = event {
            debug!("[Session] External change to {}", self.path.display());
            self.notifier.notify(event);
        }
        Ok(event)
    }

    /// Polls the file every `every` until the store is dropped.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_watcher(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let store = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    debug!("[Session] Store dropped; stopping file watcher");
                    break;
                };
                if let Err(e) = store.poll_changes() {
                    warn!("[Session] Could not check {}: {}", store.path.display(), e);
                }
            }
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<Session>>> {
        self.observed
            .lock()
            .map_err(|_| Error::Session("Session file lock poisoned".to_string()))
    }

    fn read_file(&self) -> Result<Option<Session>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Session>(&contents) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                // A corrupt entry is treated as signed out, like the dashboard does.
                warn!(
                    "[Session] Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn write_file(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(session)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        debug!("[Session] Saved session to {}", self.path.display());
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        self.read_file()
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut observed = self.lock()?;
        let existed = self.path.exists();
        self.write_file(session)?;
        *observed = Some(session.clone());

        self.notifier.notify(if existed {
            SessionEvent::Updated
        } else {
            SessionEvent::SignedIn
        });
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut observed = self.lock()?;
        let removed = match fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => return Err(e.into()),
        };
        *observed = None;
        if removed {
            self.notifier.notify(SessionEvent::SignedOut);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.notifier.subscribe()
    }

    fn replace_tokens(&self, token: String, refresh_token: String) -> Result<Session> {
        let mut observed = self.lock()?;
        let Some(current) = self.read_file()? else {
            info!("[Session] Signed out before the refreshed tokens arrived");
            return Err(Error::Session("No active session to refresh".to_string()));
        };
        let updated = current.with_tokens(token, refresh_token);
        self.write_file(&updated)?;
        *observed = Some(updated.clone());
        self.notifier.notify(SessionEvent::Updated);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let store = FileSessionStore::new(&path);
        let mut events = store.subscribe();

        let mut session = Session::new("token-1", Some("refresh-1".to_string()));
        session.salary = Some(dec!(20000));
        store.save(&session).unwrap();

        // A second handle on the same file sees the session.
        let reopened = FileSessionStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(session));

        store.replace_tokens("token-2".to_string(), "refresh-2".to_string()).unwrap();
        assert_eq!(reopened.token().unwrap().as_deref(), Some("token-2"));

        store.clear().unwrap();
        assert_eq!(reopened.load().unwrap(), None);

        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedIn);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::Updated);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedOut);
    }

    #[test]
    fn test_second_handle_sees_external_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let writer = FileSessionStore::new(&path);
        let reader = FileSessionStore::new(&path);
        let mut events = reader.subscribe();

        assert_eq!(reader.poll_changes().unwrap(), None);

        writer.save(&Session::new("token-1", Some("refresh-1".to_string()))).unwrap();
        assert_eq!(reader.poll_changes().unwrap(), Some(SessionEvent::SignedIn));
        assert_eq!(reader.poll_changes().unwrap(), None);

        writer.replace_tokens("token-2".to_string(), "refresh-2".to_string()).unwrap();
        assert_eq!(reader.poll_changes().unwrap(), Some(SessionEvent::Updated));

        writer.clear().unwrap();
        assert_eq!(reader.poll_changes().unwrap(), Some(SessionEvent::SignedOut));

        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedIn);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::Updated);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedOut);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_own_writes_are_not_reported_twice() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        let mut events = store.subscribe();

        store.save(&Session::new("token-1", None)).unwrap();
        assert_eq!(store.poll_changes().unwrap(), None);
        store.clear().unwrap();
        assert_eq!(store.poll_changes().unwrap(), None);

        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedIn);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedOut);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_replace_tokens_after_external_sign_out_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::new(&path);
        store.save(&Session::new("token-1", Some("refresh-1".to_string()))).unwrap();
        let mut events = store.subscribe();

        FileSessionStore::new(&path).clear().unwrap();

        assert!(matches!(
            store.replace_tokens("token-2".to_string(), "refresh-2".to_string()),
            Err(Error::Session(_))
        ));
        assert!(!path.exists());
        assert_eq!(store.load().unwrap(), None);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_watcher_publishes_external_sign_in() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = Arc::new(FileSessionStore::new(&path));
        let mut events = store.subscribe();
        let watcher = store.spawn_watcher(Duration::from_millis(20));

        FileSessionStore::new(&path).save(&Session::new("token-1", None)).unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), events.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event, SessionEvent::SignedIn);

        drop(store);
        tokio::time::timeout(Duration::from_secs(5), watcher)
            .await
            .unwrap()
            .unwrap();
    }

    #[test]
    fn test_corrupt_file_reads_as_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.is_signed_in());
    }

    #[test]
    fn test_clear_missing_file_is_noop() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("absent.json"));
        let mut events = store.subscribe();
        store.clear().unwrap();
        assert!(events.try_recv().is_err());
    }
}
