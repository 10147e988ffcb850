//! Core ledger functionality
//!
//! This module contains the fundamental chain components: blocks,
//! transactions, the pending pool, deterministic block hashing, the
//! proof-of-work engine, and the ledger that orchestrates them.

pub mod block;
pub mod hashing;
pub mod ledger;
pub mod pool;
pub mod proof_of_work;
pub mod transaction;

pub use block::{Block, GENESIS_PREVIOUS_HASH, GENESIS_PROOF};
pub use hashing::block_digest;
pub use ledger::Ledger;
pub use pool::TransactionPool;
pub use proof_of_work::ProofEngine;
pub use transaction::{Transaction, REWARD_AMOUNT, REWARD_SENDER};
