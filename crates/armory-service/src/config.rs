//! Service configuration, loaded from environment variables.
//!
//! Required variables:
//! - `ARMORY_REDIS_URL` -- Redis-compatible store URL (e.g.
//!   `redis://localhost:6379`).
//!
//! Optional variables:
//! - `ARMORY_STARTING_BALANCE` -- AP seeded to brand-new wallets
//!   (defaults to the catalog value, 5000).

use crate::error::ServiceError;

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ArmoryConfig {
    /// Redis-compatible store URL.
    pub redis_url: String,
    /// AP seeded to a wallet on its first balance read.
    pub starting_balance: u64,
}

impl ArmoryConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Config`] when a required variable is
    /// missing or a value fails to parse.
    pub fn from_env() -> Result<Self, ServiceError> {
        let redis_url = std::env::var("ARMORY_REDIS_URL")
            .map_err(|_| ServiceError::Config(String::from("ARMORY_REDIS_URL is not set")))?;

        let starting_balance = match std::env::var("ARMORY_STARTING_BALANCE") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ServiceError::Config(format!(
                    "ARMORY_STARTING_BALANCE is not a valid u64: {e}"
                ))
            })?,
            Err(_) => armory_catalog::STARTING_BALANCE,
        };

        Ok(Self {
            redis_url,
            starting_balance,
        })
    }
}

impl Default for ArmoryConfig {
    fn default() -> Self {
        Self {
            redis_url: String::from("redis://localhost:6379"),
            starting_balance: armory_catalog::STARTING_BALANCE,
        }
    }
}
