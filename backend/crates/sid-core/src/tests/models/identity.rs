use crate::{Identity, Role, SignUpRequest};

#[test]
fn test_identity_citizen_from_sign_up_request() {
    let request = SignUpRequest::new("New.User@X.sn", "secret", "Aïda", "Ndao")
        .with_phone(Some("+221 70 000 00 00"));

    let identity = Identity::citizen(&request);

    assert_eq!(identity.email, "new.user@x.sn");
    assert_eq!(identity.role(), Role::Citizen);
    assert_eq!(identity.first_name, "Aïda");
    assert_eq!(identity.last_name, "Ndao");
    assert_eq!(identity.phone.as_deref(), Some("+221 70 000 00 00"));
    assert!(identity.id.starts_with("user_"));
}

#[test]
fn test_identity_generate_id_is_unique() {
    assert_ne!(Identity::generate_id(), Identity::generate_id());
}

#[test]
fn test_identity_blank_phone_is_absent() {
    let request = SignUpRequest::new("a@b.sn", "pw", "A", "B").with_phone(Some("  "));

    assert_eq!(request.phone, None);
}

#[test]
fn test_identity_json_uses_portal_field_names() {
    let identity = Identity::new(
        "user_1".to_string(),
        "test.agent@example.com".to_string(),
        Role::Agent,
        "Amadou".to_string(),
        "Fall".to_string(),
        None,
    );

    let json = serde_json::to_value(&identity).unwrap();

    assert_eq!(json["role"], "agent");
    assert_eq!(json["first_name"], "Amadou");
    assert_eq!(json["last_name"], "Fall");
    assert!(json.get("phone").is_none());
}

#[test]
fn test_identity_same_profile_ignores_id() {
    let request = SignUpRequest::new("a@b.sn", "pw", "A", "B");
    let first = Identity::citizen(&request);
    let second = Identity::citizen(&request);

    assert_ne!(first, second);
    assert!(first.same_profile(&second));
    assert_eq!(first.full_name(), "A B");
}
