use error_location::ErrorLocation;
use sid_store::StoreError;
use thiserror::Error;

use std::panic::Location;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately indistinguishable
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Account already exists for {email} {location}")]
    AccountAlreadyExists {
        email: String,
        location: ErrorLocation,
    },

    #[error("Corrupt session snapshot discarded: {source} {location}")]
    CorruptSession {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Authentication request already in progress {location}")]
    OperationInProgress { location: ErrorLocation },

    #[error("Session storage error: {source} {location}")]
    Store {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },

    #[error("Session serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "INVALID_CREDENTIALS",
            Self::AccountAlreadyExists { .. } => "ACCOUNT_ALREADY_EXISTS",
            Self::CorruptSession { .. } => "CORRUPT_SESSION",
            Self::OperationInProgress { .. } => "OPERATION_IN_PROGRESS",
            Self::Store { .. } => "STORAGE_UNAVAILABLE",
            Self::Serialization { .. } => "SERIALIZATION_FAILED",
        }
    }

    /// Message handed back to the person at the form. Never names the email
    /// on sign-in failures and never carries source locations.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { .. } => "invalid credentials",
            Self::AccountAlreadyExists { .. } => "account already exists",
            Self::CorruptSession { .. } => "stored session was unreadable",
            Self::OperationInProgress { .. } => "an authentication request is already in progress",
            Self::Store { .. } | Self::Serialization { .. } => "session storage unavailable",
        }
    }

    #[track_caller]
    pub(crate) fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
