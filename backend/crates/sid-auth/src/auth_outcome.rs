use crate::{AuthError, Result as AuthErrorResult};

use serde::Serialize;

/// `{success, error?}` result handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: &AuthError) -> Self {
        Self {
            success: false,
            error: Some(error.user_message().to_string()),
        }
    }
}

impl<T> From<&AuthErrorResult<T>> for AuthOutcome {
    fn from(result: &AuthErrorResult<T>) -> Self {
        match result {
            Ok(_) => Self::succeeded(),
            Err(e) => Self::failed(e),
        }
    }
}
