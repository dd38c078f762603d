//! EcoFi Client - authenticated access to the EcoFi REST API.
//!
//! Wraps every outbound call with bearer-token attachment, the 401
//! refresh-and-retry cycle and failure classification. Responses are
//! normalized into `ecofi-core` records; metrics are left to callers.

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod relevance;
pub mod transport;

pub use auth::{LogOnlyLogoutHandler, LogoutHandler};
pub use client::ApiClient;
pub use config::ClientConfig;
pub use endpoints::DashboardInputs;
pub use error::{ApiError, Result};
pub use relevance::{RequestTicket, ResponseGuard};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
