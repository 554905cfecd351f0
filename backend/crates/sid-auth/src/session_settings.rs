use std::time::Duration;

pub const DEFAULT_SIGN_IN_DELAY: Duration = Duration::from_millis(500);

/// Tunables for [`crate::SessionManager`]
#[derive(Debug, Clone, Copy)]
pub struct SessionSettings {
    /// Simulated processing time of sign-in and sign-up
    pub sign_in_delay: Duration,
}

impl SessionSettings {
    pub fn new(sign_in_delay: Duration) -> Self {
        Self { sign_in_delay }
    }

    /// No simulated latency
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SIGN_IN_DELAY)
    }
}
