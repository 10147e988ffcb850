//! # E-Coin - An In-Process Proof-of-Work Ledger
//!
//! An append-only chain of blocks, each sealing a batch of pending
//! transfers behind a proof-of-work puzzle. The chain lives in process
//! memory for the lifetime of a session; there is no persistence, no
//! networking, and no signature verification.
//!
//! ## How the code is organized
//! - `core/`: the ledger engine (blocks, transactions, pool, hashing,
//!   proof-of-work, the ledger itself)
//! - `config/`: process-wide settings (proof-of-work difficulty)
//! - `error/`: error types shared across the crate
//! - `utils/`: SHA-256 and timestamp helpers
//! - `cli/`: command definitions for the binary
//!
//! ## The mine flow
//! 1. `Ledger::last_block` for the current tip
//! 2. `ProofEngine::search` on the tip's proof
//! 3. `Ledger::submit_transaction("0", 1, miner)` for the reward
//! 4. `block_digest` of the tip
//! 5. `Ledger::seal_block(proof, digest)` - the ledger validates both the
//!    proof and the chain linkage before appending

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::cli::{Command, Opt};
pub use crate::config::{Config, DEFAULT_DIFFICULTY, GLOBAL_CONFIG};
pub use crate::core::{
    block_digest, Block, Ledger, ProofEngine, Transaction, TransactionPool,
    GENESIS_PREVIOUS_HASH, GENESIS_PROOF, REWARD_AMOUNT, REWARD_SENDER,
};
pub use crate::error::{LedgerError, Result};
pub use crate::utils::{current_timestamp, sha256_digest, sha256_hex_digest};
