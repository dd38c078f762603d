//! Users module - login payloads, profile updates, and admin listings.

mod users_model;

pub use users_model::{
    LoginRequest, ProfileUpdate, RawLoginResponse, UserInformation, UserSummary,
};
