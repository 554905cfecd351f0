use crate::{DashboardRoute, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Citizen.as_str(), "citizen");
    assert_eq!(Role::Agent.as_str(), "agent");
    assert_eq!(Role::Admin.as_str(), "admin");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("citizen").unwrap(), Role::Citizen);
    assert_eq!(Role::from_str("agent").unwrap(), Role::Agent);
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert!(Role::from_str("superuser").is_err());
    assert!(Role::from_str("Admin").is_err());
}

#[test]
fn test_role_default_is_citizen() {
    assert_eq!(Role::default(), Role::Citizen);
}

#[test]
fn test_role_display_name() {
    assert_eq!(Role::Citizen.display_name(), "Citoyen");
    assert_eq!(Role::Agent.display_name(), "Agent Consulaire");
    assert_eq!(Role::Admin.display_name(), "Administrateur");
}

#[test]
fn test_role_dashboard_round_trips_through_required_role() {
    for role in [Role::Citizen, Role::Agent, Role::Admin] {
        assert_eq!(role.dashboard().required_role(), role);
    }
    assert_eq!(Role::Admin.dashboard(), DashboardRoute::Admin);
    assert_eq!(Role::Agent.dashboard().path(), "/agent-dashboard");
}

#[test]
fn test_role_serializes_as_snake_case_string() {
    assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), "\"agent\"");
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"root\"").is_err());
}
