use log::info;
use rust_decimal::Decimal;
use serde::Deserialize;

use ecofi_core::session::Session;
use ecofi_core::users::{LoginRequest, ProfileUpdate, RawLoginResponse, UserInformation, UserSummary};

use super::paths;
use crate::client::ApiClient;
use crate::error::{ApiError, Result};
use crate::transport::ApiRequest;

const NO_SUGGESTION: &str = "No suggestion found.";

#[derive(Debug, Default, Deserialize)]
struct SuggestionResponse {
    #[serde(default)]
    suggestion: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Session Endpoints
// ─────────────────────────────────────────────────────────────────────────────

impl ApiClient {
    /// Sign in and persist the returned session.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(ApiError::invalid_request("Email and password are required"));
        }

        let credentials = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let request = ApiRequest::post(paths::LOGIN)
            .with_json(&credentials)?
            .without_refresh();

        let raw: RawLoginResponse = match self.send_json(request).await {
            Ok(raw) => raw,
            Err(ApiError::AuthExpired) => {
                return Err(ApiError::Client {
                    status: 401,
                    message: "Invalid email or password".to_string(),
                    field_errors: Default::default(),
                })
            }
            Err(e) => return Err(e),
        };

        let session = raw.into_session(email)?;
        self.session().save(&session)?;
        info!("[Session] Signed in");
        Ok(session)
    }

    /// Sign out locally. The backend keeps no server-side session to end.
    pub fn logout(&self) -> Result<()> {
        self.session().clear()?;
        info!("[Session] Signed out");
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Profile Endpoints
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn user_information(&self) -> Result<UserInformation> {
        let info: Option<UserInformation> = self.get_json(paths::USER_INFORMATION).await?;
        Ok(info.unwrap_or_default())
    }

    /// Submit a profile edit. A changed salary is mirrored into the session.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(ApiError::invalid_request("Nothing to update"));
        }
        update.validate()?;

        self.send_unit(ApiRequest::put(paths::UPDATE_PROFILE).with_json(update)?)
            .await?;

        if let Some(salary) = update.salary {
            if let Some(mut session) = self.session().load()? {
                session.salary = Some(salary);
                self.session().save(&session)?;
            }
        }
        Ok(())
    }

    /// Budgeting advice for the given salary, or a placeholder when the
    /// service has none.
    pub async fn financial_suggestion(&self, salary: Decimal) -> Result<String> {
        let request = ApiRequest::get(paths::FINANCIAL_SUGGESTION).with_query("salary", salary);
        let response: Option<SuggestionResponse> = self.send_json(request).await?;
        Ok(response
            .and_then(|r| r.suggestion)
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| NO_SUGGESTION.to_string()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Admin Endpoints
    // ─────────────────────────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let users: Option<Vec<UserSummary>> = self.get_json(paths::ALL_USERS).await?;
        Ok(users.unwrap_or_default())
    }

    pub async fn delete_user(&self, email: &str) -> Result<()> {
        if email.trim().is_empty() {
            return Err(ApiError::invalid_request("Email is required"));
        }
        let path = format!("{}{}", paths::DELETE_USER, urlencoding::encode(email));
        self.send_unit(ApiRequest::delete(path)).await
    }
}
