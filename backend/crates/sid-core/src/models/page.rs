use crate::DashboardRoute;

use std::str::FromStr;

pub const HOME_PATH: &str = "/";
pub const AUTH_PATH: &str = "/auth";
pub const SIMULATED_AUTH_PATH: &str = "/simulated-auth";

/// Every page the portal router knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    /// Sign-in / sign-up form, reachable under two paths
    Auth,
    Dashboard(DashboardRoute),
    NotFound,
}

impl Page {
    /// Resolve a path, falling back to `NotFound` like the catch-all route.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => HOME_PATH,
            trimmed => trimmed,
        };

        match path {
            HOME_PATH => Self::Home,
            AUTH_PATH | SIMULATED_AUTH_PATH => Self::Auth,
            other => DashboardRoute::from_str(other)
                .map(Self::Dashboard)
                .unwrap_or(Self::NotFound),
        }
    }

    /// Canonical path; `NotFound` has none.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some(HOME_PATH),
            Self::Auth => Some(AUTH_PATH),
            Self::Dashboard(route) => Some(route.path()),
            Self::NotFound => None,
        }
    }

    pub fn is_public(&self) -> bool {
        !matches!(self, Self::Dashboard(_))
    }
}
