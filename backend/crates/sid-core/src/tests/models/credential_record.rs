use crate::{CredentialRecord, Identity, SignUpRequest};

#[test]
fn test_credential_record_password_match_is_exact() {
    let user = Identity::citizen(&SignUpRequest::new("a@b.sn", "Secret", "A", "B"));
    let record = CredentialRecord::new("Secret".to_string(), user);

    assert!(record.matches_password("Secret"));
    assert!(!record.matches_password("secret"));
    assert!(!record.matches_password("Secret "));
    assert_eq!(record.email(), "a@b.sn");
}

#[test]
fn test_credential_record_json_shape() {
    let user = Identity::citizen(&SignUpRequest::new("a@b.sn", "pw", "A", "B"));
    let record = CredentialRecord::new("pw".to_string(), user.clone());

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["password"], "pw");
    assert_eq!(json["user"]["email"], "a@b.sn");
    let parsed: CredentialRecord = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.user, user);
}
