//! Error taxonomy at the service boundary.
//!
//! Four classes, surfaced distinctly so callers can map them to their own
//! transport: validation (bad input, rejected before any state read),
//! not-found (wallet never initialized, unknown entity ID), rejected
//! (expected game-rule violations whose display string is shown to the
//! player verbatim), and internal (store faults). Only the last class is
//! a genuine fault.

use armory_engine::GameError;
use armory_store::StoreError;
use armory_types::WalletError;

/// The broad class of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed request; no state was read.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// An expected game-rule violation; state is unchanged.
    Rejected,
    /// An infrastructure fault (store, configuration).
    Internal,
}

/// Any failure surfaced by a service operation.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The wallet address failed validation.
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// No save document exists for the wallet.
    #[error("Armory save not found")]
    SaveNotFound,

    /// The engine rejected the action; the message is player-facing.
    #[error(transparent)]
    Rejected(#[from] GameError),

    /// The data layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The service configuration is invalid or incomplete.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServiceError {
    /// Classify this error into the boundary taxonomy.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Wallet(_) => ErrorKind::Validation,
            Self::SaveNotFound => ErrorKind::NotFound,
            Self::Rejected(game) => match game {
                GameError::UnknownRecipe(_)
                | GameError::JobNotFound(_)
                | GameError::UnknownItem(_) => ErrorKind::NotFound,
                GameError::ZeroQuantity => ErrorKind::Validation,
                _ => ErrorKind::Rejected,
            },
            Self::Store(_) | Self::Config(_) => ErrorKind::Internal,
        }
    }
}
