//! Wiring between configuration, storage and the session manager.

use crate::commands::Commands;
use crate::error::{CliError, Result as CliErrorResult};

use sid_auth::{AuthOutcome, CredentialRegistry, RouteGuard, SessionManager, SessionSettings};
use sid_config::{Config, StorageBackend, StorageConfig};
use sid_core::Identity;
use sid_store::{FileStore, KeyValueStore, MemoryStore, SqliteStore};

use std::path::Path;
use std::sync::Arc;

use log::info;
use serde_json::{Value, json};

/// Open the store selected by `[storage]`, resolving relative paths
/// against the config directory.
pub async fn open_store(
    storage: &StorageConfig,
    config_dir: &Path,
) -> CliErrorResult<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match (storage.backend, storage.resolve_path(config_dir)) {
        (StorageBackend::File, Some(path)) => {
            info!("Using file store at {}", path.display());
            Arc::new(FileStore::new(path))
        }
        (StorageBackend::Sqlite, Some(path)) => {
            info!("Using SQLite store at {}", path.display());
            Arc::new(SqliteStore::open(path).await?)
        }
        _ => {
            info!("Using in-memory store; the session ends with the process");
            Arc::new(MemoryStore::new())
        }
    };

    Ok(store)
}

pub struct App {
    manager: SessionManager,
}

impl App {
    pub fn new(manager: SessionManager) -> Self {
        Self { manager }
    }

    /// Build the manager from config and restore any persisted session.
    pub async fn open(config: &Config, config_dir: &Path) -> CliErrorResult<Self> {
        let store = open_store(&config.storage, config_dir).await?;
        let settings = SessionSettings::new(config.session.sign_in_delay());
        let manager = SessionManager::new(store, settings);

        let state = manager.initialize().await?;
        info!("Session restored: {}", state);

        Ok(Self::new(manager))
    }

    pub fn manager(&self) -> &SessionManager {
        &self.manager
    }

    /// Run one command and return its JSON report.
    pub async fn execute(&self, command: Commands) -> CliErrorResult<Value> {
        match command {
            Commands::SignIn { email, password } => {
                let outcome = self.manager.sign_in(&email, &password).await;
                self.signed_in_report(outcome)
            }
            Commands::SignUp {
                email,
                password,
                first_name,
                last_name,
                phone,
            } => {
                let outcome = self
                    .manager
                    .sign_up(&email, &password, &first_name, &last_name, phone.as_deref())
                    .await;
                self.signed_in_report(outcome)
            }
            Commands::SignOut => {
                self.manager.sign_out().await;
                Ok(json!({ "success": true, "redirect": sid_core::HOME_PATH }))
            }
            Commands::Whoami => Ok(self.whoami()),
            Commands::Open { path } => {
                let identity = self.manager.current_identity();
                let access = RouteGuard::check_path(&path, identity.as_ref());
                Ok(json!({ "path": path, "result": access }))
            }
            Commands::Accounts { registered: false } => Ok(accounts()),
            Commands::Accounts { registered: true } => self.registered_accounts().await,
        }
    }

    fn signed_in_report(&self, outcome: AuthOutcome) -> CliErrorResult<Value> {
        if !outcome.success {
            return Err(CliError::Rejected {
                message: outcome.error.unwrap_or_default(),
            });
        }

        match self.manager.current_identity() {
            Some(identity) => Ok(json!({
                "success": true,
                "redirect": RouteGuard::post_sign_in_redirect(&identity).path(),
                "user": identity,
            })),
            None => Ok(json!(outcome)),
        }
    }

    async fn registered_accounts(&self) -> CliErrorResult<Value> {
        let records = self.manager.registry().registered().await?;
        let accounts: Vec<Value> = records
            .iter()
            .map(|record| account_report(&record.user))
            .collect();

        Ok(json!(accounts))
    }

    fn whoami(&self) -> Value {
        let state = self.manager.state();
        match self.manager.current_identity() {
            Some(identity) => identity_report(state.as_str(), &identity),
            None => json!({ "state": state.as_str(), "user": Value::Null }),
        }
    }
}

fn identity_report(state: &str, identity: &Identity) -> Value {
    let role = identity.role();
    json!({
        "state": state,
        "user": identity,
        "role": role.display_name(),
        "dashboard": role.dashboard().path(),
    })
}

fn account_report(identity: &Identity) -> Value {
    let role = identity.role();
    json!({
        "email": identity.email,
        "role": role,
        "role_name": role.display_name(),
        "name": identity.full_name(),
        "phone": identity.phone,
    })
}

/// Demo accounts without their passwords
fn accounts() -> Value {
    let accounts: Vec<Value> = CredentialRegistry::fixed()
        .iter()
        .map(|account| {
            json!({
                "email": account.email,
                "role": account.role,
                "role_name": account.role.display_name(),
                "name": format!("{} {}", account.first_name, account.last_name),
                "phone": account.phone,
            })
        })
        .collect();

    json!(accounts)
}
