use crate::storage_keys::SESSION_SNAPSHOT_KEY;
use crate::{
    AuthError, AuthOutcome, CredentialRegistry, Result as AuthErrorResult, SessionSettings,
    SessionState,
};

use sid_core::{CredentialRecord, ErrorLocation, Identity, SignUpRequest, normalize_email};
use sid_store::KeyValueStore;

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{error, info, warn};
use tokio::sync::watch;

/// Owns "who is signed in" for one application instance.
///
/// Build it once, call [`SessionManager::initialize`], then share it behind an
/// `Arc`. Identity changes are broadcast to every receiver handed out by
/// [`SessionManager::subscribe`].
///
/// Only one sign-in or sign-up may be in flight at a time; a second call made
/// meanwhile fails immediately with [`AuthError::OperationInProgress`].
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    registry: CredentialRegistry,
    settings: SessionSettings,
    identity: watch::Sender<Option<Identity>>,
    initialized: AtomicBool,
    loading: AtomicBool,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag however the operation ends. Loading stays set
/// until `initialize` has completed.
struct InFlightGuard<'a> {
    manager: &'a SessionManager,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let initialized = self.manager.initialized.load(Ordering::Acquire);
        self.manager.loading.store(!initialized, Ordering::Release);
        self.manager.in_flight.store(false, Ordering::Release);
    }
}

impl SessionManager {
    pub fn new(store: Arc<dyn KeyValueStore>, settings: SessionSettings) -> Self {
        let (identity, _) = watch::channel(None);

        Self {
            registry: CredentialRegistry::new(store.clone()),
            store,
            settings,
            identity,
            initialized: AtomicBool::new(false),
            loading: AtomicBool::new(true),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn registry(&self) -> &CredentialRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.identity.borrow().clone()
    }

    /// True until `initialize` completes and while a sign-in/sign-up runs
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn state(&self) -> SessionState {
        if !self.initialized.load(Ordering::Acquire) {
            SessionState::Uninitialized
        } else if self.identity.borrow().is_some() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }

    /// Receiver that sees every identity change
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.identity.subscribe()
    }

    /// Restore the persisted snapshot. Runs once; later calls only report the
    /// current state.
    ///
    /// A corrupt snapshot is deleted and the session starts anonymous.
    pub async fn initialize(&self) -> AuthErrorResult<SessionState> {
        if self.initialized.load(Ordering::Acquire) {
            return Ok(self.state());
        }

        let restored = match self.restore_snapshot().await {
            Ok(Some(identity)) => {
                info!(
                    "Restored session for {} ({})",
                    identity.email,
                    identity.role()
                );
                Some(identity)
            }
            Ok(None) => {
                info!("No stored session, starting anonymous");
                None
            }
            Err(e @ AuthError::CorruptSession { .. }) => {
                warn!("{}", e);
                if let Err(remove_err) = self.store.remove(SESSION_SNAPSHOT_KEY).await {
                    error!("Failed to discard corrupt session: {}", remove_err);
                }
                None
            }
            // Stays uninitialized so a later call retries
            Err(e) => return Err(e),
        };

        if let Some(identity) = restored {
            self.identity.send_replace(Some(identity));
        }
        self.initialized.store(true, Ordering::Release);
        self.loading
            .store(self.in_flight.load(Ordering::Acquire), Ordering::Release);

        Ok(self.state())
    }

    async fn restore_snapshot(&self) -> AuthErrorResult<Option<Identity>> {
        let Some(raw) = self.store.get(SESSION_SNAPSHOT_KEY).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AuthError::CorruptSession {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Sign in and report the outcome the way the sign-in form expects it
    pub async fn sign_in(&self, email: &str, password: &str) -> AuthOutcome {
        AuthOutcome::from(&self.try_sign_in(email, password).await)
    }

    pub async fn try_sign_in(&self, email: &str, password: &str) -> AuthErrorResult<Identity> {
        let _guard = self.begin()?;
        self.simulate_latency().await;

        let email = normalize_email(email);
        let identity = match self.registry.verify(&email, password).await {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Sign-in rejected for {}: {}", email, e.error_code());
                return Err(e);
            }
        };

        self.activate(identity.clone()).await?;
        info!("Signed in {} ({})", identity.email, identity.role());

        Ok(identity)
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
    ) -> AuthOutcome {
        let request =
            SignUpRequest::new(email, password, first_name, last_name).with_phone(phone);
        AuthOutcome::from(&self.try_sign_up(&request).await)
    }

    /// Register a new citizen account and sign it in
    pub async fn try_sign_up(&self, request: &SignUpRequest) -> AuthErrorResult<Identity> {
        let _guard = self.begin()?;
        self.simulate_latency().await;

        let identity = Identity::citizen(request);
        let record = CredentialRecord::new(request.password.clone(), identity.clone());

        if let Err(e) = self.registry.register(&record).await {
            warn!("Sign-up rejected for {}: {}", identity.email, e.error_code());
            return Err(e);
        }

        self.activate(identity.clone()).await?;
        info!("Registered and signed in {}", identity.email);

        Ok(identity)
    }

    /// Forget the current identity and delete the snapshot. Never fails:
    /// storage errors are only logged.
    pub async fn sign_out(&self) {
        let previous = self.identity.send_replace(None);

        if let Err(e) = self.store.remove(SESSION_SNAPSHOT_KEY).await {
            error!("Failed to delete session snapshot: {}", e);
        }

        match previous {
            Some(identity) => info!("Signed out {}", identity.email),
            None => info!("Sign-out with no active session"),
        }
    }

    #[track_caller]
    fn begin(&self) -> AuthErrorResult<InFlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(AuthError::OperationInProgress {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.loading.store(true, Ordering::Release);
        Ok(InFlightGuard { manager: self })
    }

    async fn simulate_latency(&self) {
        if !self.settings.sign_in_delay.is_zero() {
            tokio::time::sleep(self.settings.sign_in_delay).await;
        }
    }

    /// Persist the snapshot first so a storage failure leaves the session unchanged
    async fn activate(&self, identity: Identity) -> AuthErrorResult<()> {
        let json = serde_json::to_string(&identity).map_err(|e| AuthError::Serialization {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;
        self.store.set(SESSION_SNAPSHOT_KEY, &json).await?;
        self.identity.send_replace(Some(identity));

        Ok(())
    }
}
