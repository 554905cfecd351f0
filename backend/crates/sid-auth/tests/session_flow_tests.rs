use sid_auth::{
    Access, CredentialRegistry, RouteGuard, SessionManager, SessionSettings, SessionState,
};
use sid_core::{DashboardRoute, Role};
use sid_store::{FileStore, KeyValueStore, MemoryStore};

use std::sync::Arc;

use googletest::prelude::*;
use tempfile::TempDir;

async fn started(store: Arc<dyn KeyValueStore>) -> SessionManager {
    let manager = SessionManager::new(store, SessionSettings::immediate());
    manager.initialize().await.unwrap();
    manager
}

#[tokio::test]
async fn given_each_fixed_account_when_signing_in_then_role_matches_table() {
    let expected = [
        ("test.citizen@example.com", Role::Citizen, "Marie", "Diop"),
        ("test.agent@example.com", Role::Agent, "Amadou", "Fall"),
        ("test.admin@example.com", Role::Admin, "Fatou", "Sall"),
    ];

    for (email, role, first_name, last_name) in expected {
        let manager = started(Arc::new(MemoryStore::new())).await;

        let outcome = manager.sign_in(email, "password").await;

        assert_that!(outcome.success, eq(true));
        let identity = manager.current_identity().unwrap();
        assert_that!(identity.role(), eq(role));
        assert_that!(identity.first_name.as_str(), eq(first_name));
        assert_that!(identity.last_name.as_str(), eq(last_name));
        assert_that!(identity.email.as_str(), eq(email));
    }
}

#[tokio::test]
async fn given_wrong_password_or_unknown_email_when_signing_in_then_identical_failure() {
    let manager = started(Arc::new(MemoryStore::new())).await;

    let wrong_password = manager.sign_in("test.agent@example.com", "wrong").await;
    let unknown_email = manager.sign_in("ghost@example.com", "password").await;

    assert_that!(wrong_password.success, eq(false));
    assert_that!(wrong_password.error.as_deref(), some(eq("invalid credentials")));
    assert_eq!(wrong_password, unknown_email);
}

#[tokio::test]
async fn given_fixed_email_in_any_case_when_signing_up_then_account_already_exists() {
    let manager = started(Arc::new(MemoryStore::new())).await;

    let outcome = manager
        .sign_up("TEST.Admin@Example.COM", "secret", "Fake", "Admin", None)
        .await;

    assert_that!(outcome.success, eq(false));
    assert_that!(outcome.error.as_deref(), some(eq("account already exists")));
    assert_that!(manager.state(), eq(SessionState::Anonymous));
}

#[tokio::test]
async fn given_new_account_when_signed_out_and_back_in_then_profile_identical() {
    // Given
    let manager = started(Arc::new(MemoryStore::new())).await;
    let outcome = manager
        .sign_up("new.user@x.sn", "secret", "Aïda", "Ndao", None)
        .await;
    assert_that!(outcome.success, eq(true));
    let registered = manager.current_identity().unwrap();

    // When
    manager.sign_out().await;
    let outcome = manager.sign_in("NEW.USER@x.sn", "secret").await;

    // Then
    assert_that!(outcome.success, eq(true));
    let identity = manager.current_identity().unwrap();
    assert_that!(identity.first_name.as_str(), eq("Aïda"));
    assert_that!(identity.role(), eq(Role::Citizen));
    assert_that!(identity, eq(&registered));
    assert_that!(
        RouteGuard::post_sign_in_redirect(&identity),
        eq(DashboardRoute::Citizen)
    );
}

#[tokio::test]
async fn given_persisted_session_when_reloaded_then_same_identity_restored() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    let before_reload = {
        let manager = started(Arc::new(FileStore::new(&path))).await;
        manager
            .sign_up("fatima@x.sn", "pw", "Fatima", "Sy", Some("+221 76 000 00 00"))
            .await;
        manager.current_identity().unwrap()
    };

    // When
    let reloaded = started(Arc::new(FileStore::new(&path))).await;

    // Then
    assert_that!(reloaded.state(), eq(SessionState::Authenticated));
    assert_that!(reloaded.current_identity(), some(eq(&before_reload)));
    assert_that!(
        RouteGuard::check_path("/dashboard", reloaded.current_identity().as_ref()),
        eq(Access::Granted)
    );
}

#[tokio::test]
async fn given_sign_out_when_reloaded_then_no_identity() {
    // Given
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let manager = started(store.clone()).await;
    manager.sign_in("test.citizen@example.com", "password").await;

    // When
    manager.sign_out().await;
    let reloaded = started(store).await;

    // Then
    assert_that!(reloaded.current_identity(), none());
    assert_that!(
        RouteGuard::check_path("/dashboard", reloaded.current_identity().as_ref()),
        eq(Access::Redirect("/auth"))
    );
}

#[tokio::test]
async fn given_registered_account_when_new_process_starts_then_account_still_usable() {
    // Given
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let manager = started(store.clone()).await;
    manager.sign_up("awa@x.sn", "pw", "Awa", "Diallo", None).await;
    manager.sign_out().await;

    // When
    let next_process = started(store).await;
    let outcome = next_process.sign_in("awa@x.sn", "pw").await;

    // Then
    assert_that!(outcome.success, eq(true));
    assert!(CredentialRegistry::find_fixed("awa@x.sn").is_none());
}

#[tokio::test]
async fn given_malformed_storage_file_when_started_then_anonymous_and_sign_in_works() {
    // Given
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    std::fs::write(&path, "{\"simulatedUser\": \"{trunc").unwrap();

    // When
    let manager = SessionManager::new(
        Arc::new(FileStore::new(&path)),
        SessionSettings::immediate(),
    );
    let state = manager.initialize().await;
    let outcome = manager.sign_in("test.admin@example.com", "password").await;

    // Then
    assert_that!(state, ok(eq(&SessionState::Anonymous)));
    assert_that!(outcome.success, eq(true));

    let reloaded = started(Arc::new(FileStore::new(&path))).await;
    assert_that!(
        reloaded.current_identity().map(|identity| identity.role()),
        some(eq(Role::Admin))
    );
}

#[tokio::test]
async fn given_padded_fixed_email_when_signing_in_then_rejected_as_invalid() {
    let manager = started(Arc::new(MemoryStore::new())).await;

    let outcome = manager.sign_in(" test.admin@example.com", "password").await;

    assert_that!(outcome.success, eq(false));
    assert_that!(outcome.error.as_deref(), some(eq("invalid credentials")));
    assert_that!(manager.current_identity(), none());
}
