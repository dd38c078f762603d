//! User and authentication payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, ValidationError};
use crate::session::Session;
use crate::utils::json_utils::{bool_from_value, decimal_from_value};

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response. Only `token` is mandatory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLoginResponse {
    #[serde(default, alias = "accessToken")]
    pub token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: Option<Value>,
    #[serde(default)]
    pub salary: Option<Value>,
}

impl RawLoginResponse {
    /// Turns the login response into the session to persist.
    ///
    /// Falls back to the submitted email when the response omits it.
    pub fn into_session(self, submitted_email: &str) -> Result<Session> {
        let token = self
            .token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ValidationError::MissingField("token".to_string()))?;
        let email = self.email.unwrap_or_else(|| submitted_email.to_string());

        Ok(Session {
            token,
            refresh_token: self.refresh_token.filter(|token| !token.is_empty()),
            is_admin: bool_from_value(self.is_admin.as_ref()).unwrap_or(false),
            salary: decimal_from_value(self.salary.as_ref()),
            email: Some(email),
        })
    }
}

/// Row of the admin user list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub user_name: String,
}

/// Profile edit form.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saving_goal: Option<Decimal>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::InvalidInput("Name cannot be blank".to_string()).into());
            }
        }
        for (field, value) in [("salary", self.salary), ("savingGoal", self.saving_goal)] {
            if matches!(value, Some(v) if v < Decimal::ZERO) {
                return Err(
                    ValidationError::InvalidInput(format!("{} cannot be negative", field)).into(),
                );
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.salary.is_none() && self.saving_goal.is_none()
    }
}

/// Profile details shown in the header menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInformation {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInformation {
    /// "First Last", falling back to the email and then to "User".
    pub fn display_name(&self) -> String {
        let full = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let full = full.trim();
        if !full.is_empty() {
            return full.to_string();
        }
        self.email
            .clone()
            .filter(|email| !email.is_empty())
            .unwrap_or_else(|| "User".to_string())
    }
}
