use thiserror::Error as ThisError;

use super::Ring;

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("insufficient funds (requested={requested}, balance={balance})")]
    InsufficientFunds { requested: u64, balance: u64 },
}

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejected {
    #[error("no stake placed")]
    NoStake,
    #[error("{0} ring is already spinning")]
    AlreadySpinning(Ring),
    #[error("bonus cascade to the {0} ring is pending")]
    CascadePending(Ring),
}

#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Errors surfaced to callers of the table operations.
#[derive(Debug, ThisError, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Spin(#[from] SpinRejected),
    #[error("betting is closed while the outer ring spins")]
    BettingClosed,
}

impl EngineError {
    /// Stable code for wire responses.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Ledger(LedgerError::InsufficientFunds { .. }) => "INSUFFICIENT_FUNDS",
            EngineError::Spin(SpinRejected::NoStake) => "NO_STAKE",
            EngineError::Spin(SpinRejected::AlreadySpinning(_)) => "ALREADY_SPINNING",
            EngineError::Spin(SpinRejected::CascadePending(_)) => "ROUND_IN_PROGRESS",
            EngineError::BettingClosed => "BETTING_CLOSED",
        }
    }
}
