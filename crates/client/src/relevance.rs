//! Discarding stale responses.
//!
//! A view that refetches on every input change (filters, date ranges) issues a
//! ticket per request and only applies results whose ticket is still the
//! latest. The superseded request is left to finish; its result is dropped.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;

#[derive(Debug, Clone, Default)]
pub struct ResponseGuard {
    generation: Arc<AtomicU64>,
}

/// Proof of which request generation a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl ResponseGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation, invalidating every earlier ticket.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Invalidates outstanding tickets without issuing a new request, e.g.
    /// when the view is closed.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Runs `future` under a fresh ticket and returns its output only if no
    /// newer request was issued meanwhile.
    pub async fn run_latest<F, T>(&self, future: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let ticket = self.issue();
        let output = future.await;
        if self.is_current(ticket) {
            Some(output)
        } else {
            debug!("[ApiClient] Discarding stale response (ticket {})", ticket.0);
            None
        }
    }
}
