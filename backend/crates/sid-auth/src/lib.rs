pub mod auth_outcome;
pub mod credential_registry;
pub mod error;
pub mod route_guard;
pub mod session_manager;
pub mod session_settings;
pub mod session_state;
pub mod storage_keys;

pub use auth_outcome::AuthOutcome;
pub use credential_registry::{CredentialRegistry, FixedAccount};
pub use error::{AuthError, Result};
pub use route_guard::{Access, RouteGuard};
pub use session_manager::SessionManager;
pub use session_settings::SessionSettings;
pub use session_state::SessionState;

#[cfg(test)]
mod tests;
