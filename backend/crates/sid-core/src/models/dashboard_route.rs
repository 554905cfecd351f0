use crate::{CoreError, Result as CoreErrorResult, Role};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Role-restricted dashboard pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardRoute {
    Citizen,
    Agent,
    Admin,
}

impl DashboardRoute {
    pub const ALL: [DashboardRoute; 3] = [Self::Citizen, Self::Agent, Self::Admin];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Citizen => "/dashboard",
            Self::Agent => "/agent-dashboard",
            Self::Admin => "/admin-dashboard",
        }
    }

    /// The only role allowed to view this dashboard
    pub fn required_role(&self) -> Role {
        match self {
            Self::Citizen => Role::Citizen,
            Self::Agent => Role::Agent,
            Self::Admin => Role::Admin,
        }
    }
}

impl FromStr for DashboardRoute {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|route| route.path() == s)
            .ok_or_else(|| CoreError::InvalidDashboardPath {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for DashboardRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
