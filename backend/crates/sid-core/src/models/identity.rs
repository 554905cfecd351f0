//! Identity - the authenticated principal.

use crate::{Role, SignUpRequest, normalize_email};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Profile and role of whoever is signed in.
///
/// The role is fixed at construction and only readable through [`Identity::role`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    role: Role,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Identity {
    pub fn new(
        id: String,
        email: String,
        role: Role,
        first_name: String,
        last_name: String,
        phone: Option<String>,
    ) -> Self {
        Self {
            id,
            email,
            role,
            first_name,
            last_name,
            phone,
        }
    }

    /// Create a citizen identity for a fresh registration
    pub fn citizen(request: &SignUpRequest) -> Self {
        Self::new(
            Self::generate_id(),
            normalize_email(&request.email),
            Role::Citizen,
            request.first_name.clone(),
            request.last_name.clone(),
            request.phone.clone(),
        )
    }

    /// Generate a new unique identifier (`user_<uuid>`)
    pub fn generate_id() -> String {
        format!("user_{}", Uuid::new_v4().simple())
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// True when both identities carry the same profile, ignoring the identifier
    pub fn same_profile(&self, other: &Identity) -> bool {
        self.email == other.email
            && self.role == other.role
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.phone == other.phone
    }
}
