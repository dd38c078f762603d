//! Alert domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::json_utils::{date_from_value, integer_from_value, string_from_value};

/// Severity derived from the backend's alert `type` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertSeverity {
    Info,
    Success,
    Warning,
    Critical,
}

impl AlertSeverity {
    /// Classifies a discriminator, sent either as a name or a numeric code.
    ///
    /// Unknown discriminators are informational.
    pub fn classify(discriminator: &str) -> Self {
        let normalized: String = discriminator
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "1" | "success" | "achieved" | "goalachieved" | "savinggoal" => AlertSeverity::Success,
            "2" | "warning" | "warn" | "spendinglimit" | "pricedrop" => AlertSeverity::Warning,
            "3" | "critical" | "danger" | "error" | "overbudget" => AlertSeverity::Critical,
            _ => AlertSeverity::Info,
        }
    }
}

/// A notification shown in the alerts dropdown. Read-only on the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub date: Option<NaiveDate>,
    pub product_id: Option<i64>,
    pub kind: String,
    pub severity: AlertSeverity,
}

impl Alert {
    pub fn from_raw(raw: RawAlert) -> Self {
        let kind = string_from_value(raw.kind.as_ref()).unwrap_or_default();
        Alert {
            id: integer_from_value(raw.id.as_ref()).unwrap_or_default(),
            title: string_from_value(raw.title.as_ref()).unwrap_or_default(),
            message: string_from_value(raw.message.as_ref()).unwrap_or_default(),
            date: date_from_value(raw.date.as_ref()),
            product_id: integer_from_value(raw.product_id.as_ref()),
            severity: AlertSeverity::classify(&kind),
            kind,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlert {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default)]
    pub product_id: Option<Value>,
    #[serde(default, rename = "type", alias = "alertType")]
    pub kind: Option<Value>,
}

/// Sorts alerts newest first; undated alerts go last.
pub fn sort_alerts_newest_first(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| match (a.date, b.date) {
        (Some(left), Some(right)) => right.cmp(&left),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
