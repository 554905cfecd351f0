use serde::{Deserialize, Serialize};

/// Fields collected by the registration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

impl SignUpRequest {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
        }
    }

    /// Attach a phone number; blank input is treated as absent.
    pub fn with_phone(mut self, phone: Option<impl Into<String>>) -> Self {
        self.phone = phone
            .map(Into::into)
            .filter(|phone: &String| !phone.trim().is_empty());
        self
    }
}
