//! Error handling for the ledger
//!
//! This module provides the error types for all ledger operations.

use std::fmt;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error types for ledger operations
#[derive(Debug, Clone)]
pub enum LedgerError {
    /// Transaction amount is negative
    InvalidAmount(i64),
    /// Sender or recipient address is empty or blank
    InvalidAddress(String),
    /// Canonical block encoding failed
    Serialization(String),
    /// Bounded proof search exhausted its attempt budget
    ProofNotFound { last_proof: u64, max_attempts: u64 },
    /// Supplied proof does not satisfy the difficulty predicate
    InvalidProof { last_proof: u64, proof: u64 },
    /// Supplied previous hash does not match the digest of the last block
    ChainLinkage { expected: String, supplied: String },
    /// System clock errors while stamping a block
    Clock(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerError::InvalidAmount(amount) => {
                write!(f, "Invalid amount: {amount} (must be non-negative)")
            }
            LedgerError::InvalidAddress(addr) => write!(f, "Invalid address: {addr:?}"),
            LedgerError::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            LedgerError::ProofNotFound {
                last_proof,
                max_attempts,
            } => {
                write!(
                    f,
                    "No valid proof found for last proof {last_proof} within {max_attempts} attempts"
                )
            }
            LedgerError::InvalidProof { last_proof, proof } => {
                write!(
                    f,
                    "Proof {proof} is not valid for last proof {last_proof}"
                )
            }
            LedgerError::ChainLinkage { expected, supplied } => {
                write!(
                    f,
                    "Previous hash mismatch: expected {expected}, supplied {supplied}"
                )
            }
            LedgerError::Clock(msg) => write!(f, "Clock error: {msg}"),
        }
    }
}

impl std::error::Error for LedgerError {}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
