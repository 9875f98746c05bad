//! Normalized wallet address newtype.
//!
//! Every save document and balance record is keyed by the owner's wallet
//! address. Addresses arrive from clients in mixed case; storage keys are
//! always lowercase. Parsing an address through [`Wallet`] normalizes it
//! once at the boundary so no downstream code has to remember to.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error returned when a wallet address fails validation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WalletError {
    /// The address was empty or whitespace-only.
    #[error("Wallet address required")]
    Missing,

    /// The address contained interior whitespace.
    #[error("Wallet address must not contain whitespace")]
    Malformed,
}

/// A wallet address, normalized to lowercase.
///
/// Construct via [`Wallet::parse`]; the inner string is guaranteed
/// non-empty, lowercase, and free of whitespace. Serializes as a plain
/// JSON string so the persisted save documents keep their original shape.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct Wallet(String);

impl Wallet {
    /// Parse and normalize a raw wallet address.
    ///
    /// # Errors
    ///
    /// Returns [`WalletError::Missing`] for empty input and
    /// [`WalletError::Malformed`] for input with interior whitespace.
    pub fn parse(raw: &str) -> Result<Self, WalletError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(WalletError::Missing);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(WalletError::Malformed);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Return the normalized address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
