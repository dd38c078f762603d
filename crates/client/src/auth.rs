//! Token refresh and forced logout.
//!
//! Concurrent requests that hit a 401 share one in-flight refresh. The
//! refresh future is stored in a slot, every caller awaits a clone of it, and
//! the slot is cleared once it resolves.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::{BoxFuture, FutureExt, Shared};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use ecofi_core::session::SessionStore;

use crate::config::ClientConfig;
use crate::transport::{ApiRequest, HttpTransport};

/// Receives the hard-logout signal after a failed refresh.
///
/// Called at most once per failed refresh, after the session was cleared.
pub trait LogoutHandler: Send + Sync {
    fn on_fatal_logout(&self, login_route: &str);
}

/// Default handler: logs the logout and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOnlyLogoutHandler;

impl LogoutHandler for LogOnlyLogoutHandler {
    fn on_fatal_logout(&self, login_route: &str) {
        warn!("[Session] Signed out after failed token refresh; redirect to {}", login_route);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RefreshOutcome {
    /// A valid access token to retry with.
    Refreshed(String),
    /// Nothing to refresh with; the session is left untouched.
    Unavailable,
    /// The refresh was rejected; the session was cleared and logout signalled.
    Failed,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenRequest {
    access_token: String,
    refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenResponse {
    #[serde(default, alias = "accessToken")]
    token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

type SharedRefresh = Shared<BoxFuture<'static, RefreshOutcome>>;

pub(crate) struct RefreshCoordinator {
    in_flight: Mutex<Option<SharedRefresh>>,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    logout: Arc<dyn LogoutHandler>,
    config: Arc<ClientConfig>,
}

impl RefreshCoordinator {
    pub(crate) fn new(
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
        logout: Arc<dyn LogoutHandler>,
        config: Arc<ClientConfig>,
    ) -> Self {
        Self {
            in_flight: Mutex::new(None),
            transport,
            session,
            logout,
            config,
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<SharedRefresh>> {
        self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Obtains a fresh token for a request that was rejected with `stale_token`.
    ///
    /// Joins a refresh already in flight. If the stored token no longer matches
    /// `stale_token`, another refresh has completed and its token is returned
    /// without refreshing again.
    pub(crate) async fn refresh(&self, stale_token: Option<&str>) -> RefreshOutcome {
        let shared = {
            let mut slot = self.slot();
            match slot.as_ref() {
                Some(existing) => existing.clone(),
                None => {
                    if let Ok(Some(current)) = self.session.load() {
                        if Some(current.token.as_str()) != stale_token {
                            return RefreshOutcome::Refreshed(current.token);
                        }
                    }
                    let future = run_refresh(
                        Arc::clone(&self.transport),
                        Arc::clone(&self.session),
                        Arc::clone(&self.logout),
                        Arc::clone(&self.config),
                    )
                    .boxed()
                    .shared();
                    *slot = Some(future.clone());
                    future
                }
            }
        };

        let outcome = shared.clone().await;

        let mut slot = self.slot();
        if slot.as_ref().is_some_and(|current| current.ptr_eq(&shared)) {
            *slot = None;
        }
        outcome
    }
}

async fn run_refresh(
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    logout: Arc<dyn LogoutHandler>,
    config: Arc<ClientConfig>,
) -> RefreshOutcome {
    let current = match session.load() {
        Ok(Some(current)) => current,
        Ok(None) => return RefreshOutcome::Unavailable,
        Err(e) => {
            warn!("[Refresh] Could not read session: {}", e);
            return RefreshOutcome::Unavailable;
        }
    };
    let Some(refresh_token) = current.refresh_token.clone().filter(|t| !t.is_empty()) else {
        warn!("[Refresh] No refresh token stored; not refreshing");
        return RefreshOutcome::Unavailable;
    };

    info!("[Refresh] Refreshing access token");
    let payload = RefreshTokenRequest {
        access_token: current.token.clone(),
        refresh_token: refresh_token.clone(),
    };
    let request = match ApiRequest::post(config.refresh_path.as_str()).with_json(&payload) {
        Ok(request) => request.with_bearer(Some(current.token.clone())).without_refresh(),
        Err(e) => {
            error!("[Refresh] {}", e);
            return force_logout(session.as_ref(), logout.as_ref(), &config);
        }
    };

    let response = match transport.send(request).await {
        Ok(response) => response,
        Err(e) => {
            warn!("[Refresh] Token refresh failed: {}", e);
            return force_logout(session.as_ref(), logout.as_ref(), &config);
        }
    };
    if !response.is_success() {
        warn!("[Refresh] Token refresh rejected with status {}", response.status);
        return force_logout(session.as_ref(), logout.as_ref(), &config);
    }

    let tokens = serde_json::from_str::<RefreshTokenResponse>(&response.body)
        .ok()
        .and_then(|r| {
            let token = r.token.filter(|t| !t.is_empty())?;
            Some((token, r.refresh_token.filter(|t| !t.is_empty())))
        });
    let Some((token, new_refresh_token)) = tokens else {
        warn!("[Refresh] Refresh response did not contain a token");
        return force_logout(session.as_ref(), logout.as_ref(), &config);
    };

    match session.replace_tokens(token.clone(), new_refresh_token.unwrap_or(refresh_token)) {
        Ok(_) => {
            info!("[Refresh] Access token refreshed");
            RefreshOutcome::Refreshed(token)
        }
        Err(_) if matches!(session.load(), Ok(None)) => {
            info!("[Refresh] Signed out during refresh; discarding new tokens");
            RefreshOutcome::Unavailable
        }
        Err(e) => {
            error!("[Refresh] Failed to store refreshed tokens: {}", e);
            force_logout(session.as_ref(), logout.as_ref(), &config)
        }
    }
}

fn force_logout(
    session: &dyn SessionStore,
    logout: &dyn LogoutHandler,
    config: &ClientConfig,
) -> RefreshOutcome {
    if let Err(e) = session.clear() {
        error!("[Session] Failed to clear session: {}", e);
    }
    logout.on_fatal_logout(&config.login_route);
    RefreshOutcome::Failed
}
