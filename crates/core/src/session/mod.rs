//! Session module - the persisted sign-in state shared by every request.

mod file_store;
mod memory_store;
mod session_model;
mod session_traits;

pub use file_store::{FileSessionStore, SESSION_PATH_ENV};
pub use memory_store::InMemorySessionStore;
pub use session_model::{Session, SessionEvent};
pub use session_traits::{SessionNotifier, SessionStore};
