use crate::storage_keys::{CREDENTIAL_KEY_PREFIX, credential_key};
use crate::{AuthError, Result as AuthErrorResult};

use sid_core::{CredentialRecord, ErrorLocation, Identity, Role};
use sid_store::KeyValueStore;

use std::panic::Location;
use std::sync::Arc;

use log::{debug, warn};

/// One of the built-in demo accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAccount {
    pub email: &'static str,
    pub password: &'static str,
    pub role: Role,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub phone: &'static str,
}

impl FixedAccount {
    /// Synthesize a signed-in identity; each sign-in gets a fresh identifier.
    pub fn to_identity(&self) -> Identity {
        Identity::new(
            Identity::generate_id(),
            self.email.to_string(),
            self.role,
            self.first_name.to_string(),
            self.last_name.to_string(),
            Some(self.phone.to_string()),
        )
    }
}

const FIXED_ACCOUNTS: [FixedAccount; 3] = [
    FixedAccount {
        email: "test.citizen@example.com",
        password: "password",
        role: Role::Citizen,
        first_name: "Marie",
        last_name: "Diop",
        phone: "+221 77 123 45 67",
    },
    FixedAccount {
        email: "test.agent@example.com",
        password: "password",
        role: Role::Agent,
        first_name: "Amadou",
        last_name: "Fall",
        phone: "+221 77 234 56 78",
    },
    FixedAccount {
        email: "test.admin@example.com",
        password: "password",
        role: Role::Admin,
        first_name: "Fatou",
        last_name: "Sall",
        phone: "+221 77 345 67 89",
    },
];

/// Union of the fixed demo accounts and the accounts registered in the store.
///
/// All lookups expect an email already passed through
/// [`sid_core::normalize_email`].
pub struct CredentialRegistry {
    store: Arc<dyn KeyValueStore>,
}

impl CredentialRegistry {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn fixed() -> &'static [FixedAccount] {
        &FIXED_ACCOUNTS
    }

    pub fn find_fixed(email: &str) -> Option<&'static FixedAccount> {
        FIXED_ACCOUNTS.iter().find(|account| account.email == email)
    }

    /// Registered record for `email`. An unreadable record is logged and
    /// reported as absent.
    pub async fn find_registered(&self, email: &str) -> AuthErrorResult<Option<CredentialRecord>> {
        let key = credential_key(email);
        let Some(raw) = self.store.get(&key).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<CredentialRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!("Ignoring unreadable credential record {}: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Every readable registered record, ordered by email
    pub async fn registered(&self) -> AuthErrorResult<Vec<CredentialRecord>> {
        let keys = self.store.keys_with_prefix(CREDENTIAL_KEY_PREFIX).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in keys {
            let email = &key[CREDENTIAL_KEY_PREFIX.len()..];
            if let Some(record) = self.find_registered(email).await? {
                records.push(record);
            }
        }

        Ok(records)
    }

    /// True if the email belongs to a fixed account or has any stored record,
    /// readable or not.
    pub async fn exists(&self, email: &str) -> AuthErrorResult<bool> {
        if Self::find_fixed(email).is_some() {
            return Ok(true);
        }
        Ok(self.store.contains(&credential_key(email)).await?)
    }

    /// Check a password, fixed accounts first, then registered ones.
    pub async fn verify(&self, email: &str, password: &str) -> AuthErrorResult<Identity> {
        if let Some(account) = Self::find_fixed(email)
            && account.password == password
        {
            debug!("Matched fixed account {}", email);
            return Ok(account.to_identity());
        }

        match self.find_registered(email).await? {
            Some(record) if record.matches_password(password) => {
                debug!("Matched registered account {}", email);
                Ok(record.user)
            }
            _ => Err(AuthError::invalid_credentials()),
        }
    }

    /// Persist a new record. Fails if the email is already taken.
    pub async fn register(&self, record: &CredentialRecord) -> AuthErrorResult<()> {
        let email = record.email();

        if self.exists(email).await? {
            return Err(AuthError::AccountAlreadyExists {
                email: email.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let json = serde_json::to_string(record).map_err(|e| AuthError::Serialization {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;
        self.store.set(&credential_key(email), &json).await?;

        Ok(())
    }
}
