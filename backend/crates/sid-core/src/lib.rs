pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::credential_record::CredentialRecord;
pub use models::dashboard_route::DashboardRoute;
pub use models::email::normalize_email;
pub use models::identity::Identity;
pub use models::page::{AUTH_PATH, HOME_PATH, Page, SIMULATED_AUTH_PATH};
pub use models::role::Role;
pub use models::sign_up_request::SignUpRequest;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
