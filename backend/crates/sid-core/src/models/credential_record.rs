use crate::Identity;

use serde::{Deserialize, Serialize};

/// A registered account: the password plus the identity it unlocks.
///
/// Passwords are kept in the clear. The whole portal is a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub password: String,
    pub user: Identity,
}

impl CredentialRecord {
    pub fn new(password: String, user: Identity) -> Self {
        Self { password, user }
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    /// Exact, case-sensitive comparison
    pub fn matches_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
