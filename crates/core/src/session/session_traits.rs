use log::debug;
use tokio::sync::broadcast;

use super::session_model::{Session, SessionEvent};
use crate::errors::Result;

/// Capacity of the change channel; slow subscribers only miss old events.
const SESSION_EVENT_CAPACITY: usize = 16;

/// Process-wide store for the signed-in user's session.
///
/// The API client reads it before every request and writes it on login,
/// refresh and logout. Implementations publish a [`SessionEvent`] on every
/// effective change so independent views can react to sign-ins and
/// sign-outs made elsewhere.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>>;

    fn save(&self, session: &Session) -> Result<()>;

    /// Removes the session. Clearing an empty store is a no-op.
    fn clear(&self) -> Result<()>;

    fn subscribe(&self) -> broadcast::Receiver<SessionEvent>;

    /// Current access token, if signed in.
    fn token(&self) -> Result<Option<String>> {
        Ok(self.load()?.map(|session| session.token))
    }

    fn is_signed_in(&self) -> bool {
        matches!(self.load(), Ok(Some(_)))
    }

    /// Swaps in a refreshed token pair, keeping the profile fields.
    ///
    /// Reading and writing happen under one lock, so a concurrent `clear`
    /// wins: once signed out this fails and the session stays gone.
    fn replace_tokens(&self, token: String, refresh_token: String) -> Result<Session>;
}

/// Broadcast helper shared by the store implementations.
#[derive(Debug, Clone)]
pub struct SessionNotifier {
    sender: broadcast::Sender<SessionEvent>,
}

impl SessionNotifier {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    pub fn notify(&self, event: SessionEvent) {
        debug!("[Session] {:?}", event);
        // No subscribers is fine.
        let _ = self.sender.send(event);
    }
}

impl Default for SessionNotifier {
    fn default() -> Self {
        Self::new()
    }
}
