use std::sync::RwLock;

use tokio::sync::broadcast;

use super::session_model::{Session, SessionEvent};
use super::session_traits::{SessionNotifier, SessionStore};
use crate::errors::{Error, Result};

/// Session store kept in memory only. Used by tests and short-lived tools.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: RwLock<Option<Session>>,
    notifier: SessionNotifier,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
            notifier: SessionNotifier::new(),
        }
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Session("Session lock poisoned".to_string())
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.session.read().map_err(poisoned)?.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        let previous = self
            .session
            .write()
            .map_err(poisoned)?
            .replace(session.clone());
        self.notifier.notify(match previous {
            Some(_) => SessionEvent::Updated,
            None => SessionEvent::SignedIn,
        });
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let previous = self.session.write().map_err(poisoned)?.take();
        if previous.is_some() {
            self.notifier.notify(SessionEvent::SignedOut);
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.notifier.subscribe()
    }

    fn replace_tokens(&self, token: String, refresh_token: String) -> Result<Session> {
        let mut guard = self.session.write().map_err(poisoned)?;
        let current = guard
            .as_ref()
            .ok_or_else(|| Error::Session("No active session to refresh".to_string()))?;
        let updated = current.with_tokens(token, refresh_token);
        *guard = Some(updated.clone());
        drop(guard);
        self.notifier.notify(SessionEvent::Updated);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear_cycle() {
        let store = InMemorySessionStore::new();
        let mut events = store.subscribe();

        assert!(!store.is_signed_in());
        store.save(&Session::new("a", Some("r".to_string()))).unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("a"));

        store.replace_tokens("b".to_string(), "r2".to_string()).unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("b"));

        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.is_signed_in());

        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedIn);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::Updated);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedOut);
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_replace_tokens_without_session_fails() {
        let store = InMemorySessionStore::new();
        assert!(matches!(
            store.replace_tokens("t".to_string(), "r".to_string()),
            Err(Error::Session(_))
        ));
    }

    #[test]
    fn test_replace_tokens_after_clear_does_not_sign_in_again() {
        let store = InMemorySessionStore::with_session(Session::new("a", Some("r".to_string())));
        let mut events = store.subscribe();

        store.clear().unwrap();
        assert!(store.replace_tokens("b".to_string(), "r2".to_string()).is_err());

        assert_eq!(store.load().unwrap(), None);
        assert_eq!(events.try_recv().unwrap(), SessionEvent::SignedOut);
        assert!(events.try_recv().is_err());
    }
}
