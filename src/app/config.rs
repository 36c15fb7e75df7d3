//! Configuration types for session creation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default cosmetic thinking delay before the computer moves
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Configuration for a game session.
///
/// # Examples
///
/// ```
/// use noughts::app::SessionConfig;
///
/// let config = SessionConfig::new().with_seed(42).with_delay_ms(0);
/// assert_eq!(config.delay_ms, 0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Delay before the computer's move, in milliseconds
    pub delay_ms: u64,
    /// Random seed for the policy's fallback tier (None = non-deterministic)
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn new() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
            seed: None,
        }
    }

    /// Set the seed for deterministic opponent fallback moves
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the thinking delay in milliseconds
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}
