use crate::{CoreError, DashboardRoute, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role of an authenticated principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Citizen requesting identity documents
    #[default]
    Citizen,
    /// Consular agent processing document requests
    Agent,
    /// Portal administrator
    Admin,
}

impl Role {
    /// Convert to storage string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }

    /// Label shown next to the user's name in the portal header
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Citizen => "Citoyen",
            Self::Agent => "Agent Consulaire",
            Self::Admin => "Administrateur",
        }
    }

    /// Dashboard this role lands on after signing in
    pub fn dashboard(&self) -> DashboardRoute {
        match self {
            Self::Citizen => DashboardRoute::Citizen,
            Self::Agent => DashboardRoute::Agent,
            Self::Admin => DashboardRoute::Admin,
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "citizen" => Ok(Self::Citizen),
            "agent" => Ok(Self::Agent),
            "admin" => Ok(Self::Admin),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
