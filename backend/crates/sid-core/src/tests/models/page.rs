use crate::{DashboardRoute, Page};

use googletest::prelude::*;

#[test]
fn given_known_paths_when_resolved_then_maps_to_pages() {
    assert_that!(Page::from_path("/"), eq(Page::Home));
    assert_that!(Page::from_path("/auth"), eq(Page::Auth));
    assert_that!(Page::from_path("/simulated-auth"), eq(Page::Auth));
    assert_that!(
        Page::from_path("/dashboard"),
        eq(Page::Dashboard(DashboardRoute::Citizen))
    );
    assert_that!(
        Page::from_path("/agent-dashboard"),
        eq(Page::Dashboard(DashboardRoute::Agent))
    );
    assert_that!(
        Page::from_path("/admin-dashboard"),
        eq(Page::Dashboard(DashboardRoute::Admin))
    );
}

#[test]
fn given_trailing_slash_or_query_when_resolved_then_ignored() {
    assert_that!(
        Page::from_path("/admin-dashboard/?tab=users"),
        eq(Page::Dashboard(DashboardRoute::Admin))
    );
    assert_that!(Page::from_path(""), eq(Page::Home));
}

#[test]
fn given_unknown_path_when_resolved_then_not_found() {
    assert_that!(Page::from_path("/nowhere"), eq(Page::NotFound));
    assert_that!(Page::NotFound.path(), none());
}

#[test]
fn given_pages_when_checking_public_then_only_dashboards_are_restricted() {
    assert_that!(Page::Home.is_public(), eq(true));
    assert_that!(Page::Auth.is_public(), eq(true));
    assert_that!(Page::NotFound.is_public(), eq(true));
    assert_that!(
        Page::Dashboard(DashboardRoute::Citizen).is_public(),
        eq(false)
    );
}
