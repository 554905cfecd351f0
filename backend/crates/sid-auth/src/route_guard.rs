//! Role-based access policy applied by the presentation layer.

use sid_core::{AUTH_PATH, DashboardRoute, Identity, Page};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "access", content = "to", rename_all = "snake_case")]
pub enum Access {
    Granted,
    Redirect(&'static str),
}

pub struct RouteGuard;

impl RouteGuard {
    /// Decide whether `identity` may view `page`.
    ///
    /// Dashboards require their exact role; anyone else is sent to the
    /// sign-in page, which in turn forwards a signed-in visitor to their own
    /// dashboard.
    pub fn check(page: Page, identity: Option<&Identity>) -> Access {
        match (page, identity) {
            (Page::Dashboard(route), Some(identity)) if identity.has_role(route.required_role()) => {
                Access::Granted
            }
            (Page::Dashboard(_), _) => Access::Redirect(AUTH_PATH),
            (Page::Auth, Some(identity)) => {
                Access::Redirect(Self::post_sign_in_redirect(identity).path())
            }
            (Page::Home | Page::Auth | Page::NotFound, _) => Access::Granted,
        }
    }

    pub fn check_path(path: &str, identity: Option<&Identity>) -> Access {
        Self::check(Page::from_path(path), identity)
    }

    /// Where a freshly authenticated identity lands
    pub fn post_sign_in_redirect(identity: &Identity) -> DashboardRoute {
        identity.role().dashboard()
    }
}
