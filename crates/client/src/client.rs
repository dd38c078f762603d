//! HTTP client for the EcoFi REST API.
//!
//! Every request goes through [`ApiClient::execute`], which attaches the
//! session's bearer token, classifies failures and runs the 401
//! refresh-and-retry cycle. Endpoint groups live in `crate::endpoints`.

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use ecofi_core::session::SessionStore;

use crate::auth::{LogOnlyLogoutHandler, LogoutHandler, RefreshCoordinator, RefreshOutcome};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};

// ─────────────────────────────────────────────────────────────────────────────
// EcoFi API Client
// ─────────────────────────────────────────────────────────────────────────────

/// Authenticated client for the EcoFi backend.
///
/// Cheap to clone; clones share the transport, the session store and the
/// in-flight refresh.
///
/// # Example
///
/// ```ignore
/// let session = Arc::new(FileSessionStore::from_env());
/// let client = ApiClient::new(ClientConfig::from_env()?, session)?;
/// let purchases = client.list_purchases().await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn HttpTransport>,
    session: Arc<dyn SessionStore>,
    refresh: Arc<RefreshCoordinator>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client backed by reqwest.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: ClientConfig, session: Arc<dyn SessionStore>) -> Result<Self> {
        let transport = ReqwestTransport::new(config.clone())?;
        Ok(Self::with_transport(config, Arc::new(transport), session))
    }

    /// Creates a client over a custom transport.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn HttpTransport>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        let config = Arc::new(config);
        let logout: Arc<dyn LogoutHandler> = Arc::new(LogOnlyLogoutHandler);
        let refresh = Arc::new(RefreshCoordinator::new(
            Arc::clone(&transport),
            Arc::clone(&session),
            logout,
            Arc::clone(&config),
        ));
        Self {
            config,
            transport,
            session,
            refresh,
        }
    }

    /// Replaces the handler notified on forced logout.
    pub fn with_logout_handler(mut self, logout: Arc<dyn LogoutHandler>) -> Self {
        self.refresh = Arc::new(RefreshCoordinator::new(
            Arc::clone(&self.transport),
            Arc::clone(&self.session),
            logout,
            Arc::clone(&self.config),
        ));
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Sends `request` with the current bearer token.
    ///
    /// On a 401 the token is refreshed once and the request re-sent with the
    /// new token. A failed refresh clears the session, fires the logout
    /// handler and returns [`ApiError::AuthFatal`].
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let token = self.session.token()?;
        debug!("[ApiClient] {} {}", request.method, request.path);

        let response = self
            .transport
            .send(request.clone().with_bearer(token.clone()))
            .await?;
        if response.status != 401 || !request.allow_refresh {
            return check_status(response);
        }

        debug!("[ApiClient] {} {} returned 401", request.method, request.path);
        match self.refresh.refresh(token.as_deref()).await {
            RefreshOutcome::Refreshed(new_token) => {
                let retried = self
                    .transport
                    .send(request.with_bearer(Some(new_token)))
                    .await?;
                if retried.status == 401 {
                    warn!("[ApiClient] Request still unauthorized after token refresh");
                }
                check_status(retried)
            }
            RefreshOutcome::Unavailable => Err(ApiError::AuthExpired),
            RefreshOutcome::Failed => Err(ApiError::AuthFatal),
        }
    }

    /// Sends `request` and decodes the JSON response body.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let label = format!("{} {}", request.method, request.path);
        let response = self.execute(request).await?;
        decode_body(&label, &response.body)
    }

    /// Sends `request`, ignoring the response body.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<()> {
        self.execute(request).await.map(|_| ())
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json(ApiRequest::get(path)).await
    }
}

fn check_status(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response.status, &response.body))
    }
}

/// Decodes a JSON body. An empty body decodes as `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(label: &str, body: &str) -> Result<T> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| {
        ApiError::decode(format!(
            "{}: {} - {}",
            label,
            e,
            body.chars().take(200).collect::<String>()
        ))
    })
}
