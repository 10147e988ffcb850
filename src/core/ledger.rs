// This is the core ledger implementation - the append-only chain of sealed
// blocks plus the pool of transfers waiting for the next block. The chain
// lives in process memory only; one ledger instance serves one session.

use crate::config::GLOBAL_CONFIG;
use crate::core::hashing::block_digest;
use crate::core::{Block, ProofEngine, TransactionPool};
use crate::error::{LedgerError, Result};
use log::info;
use std::sync::{Arc, RwLock};

// Chain and pool sit behind one lock so that draining the pool and
// appending the block is a single critical section. A transfer submitted
// while a seal is in flight lands in the following block, never nowhere.
struct LedgerState {
    chain: Vec<Block>,
    pool: TransactionPool,
}

/// The append-only ledger. Owns the chain, the pending-transaction pool,
/// and the proof engine used to validate seals.
#[derive(Clone)]
pub struct Ledger {
    state: Arc<RwLock<LedgerState>>,
    engine: ProofEngine,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates a ledger with the configured difficulty and a genesis block
    /// already in place.
    pub fn new() -> Ledger {
        Self::with_difficulty(GLOBAL_CONFIG.get_difficulty())
    }

    pub fn with_difficulty(difficulty: usize) -> Ledger {
        let genesis = Block::generate_genesis_block()
            .expect("Genesis block construction should never fail");
        info!("Created genesis block at index {}", genesis.get_index());

        Ledger {
            state: Arc::new(RwLock::new(LedgerState {
                chain: vec![genesis],
                pool: TransactionPool::new(),
            })),
            engine: ProofEngine::new(difficulty),
        }
    }

    pub fn get_proof_engine(&self) -> &ProofEngine {
        &self.engine
    }

    /// Queues a transfer for the next block and returns the index of the
    /// block it will belong to.
    pub fn submit_transaction(&self, sender: &str, amount: i64, recipient: &str) -> Result<u64> {
        let mut state = self
            .state
            .write()
            .expect("Failed to acquire write lock on ledger - this should never happen");

        let pending = state.pool.submit(sender, amount, recipient)?;
        let next_index = Self::tip(&state).get_index() + 1;
        info!("Queued transaction {pending} for block {next_index}");
        Ok(next_index)
    }

    /// The most recently appended block. The chain always holds at least
    /// the genesis block.
    pub fn last_block(&self) -> Block {
        let state = self
            .state
            .read()
            .expect("Failed to acquire read lock on ledger - this should never happen");
        Self::tip(&state).clone()
    }

    /// Seals the pending pool into a new block and appends it.
    ///
    /// The ledger is the sole enforcer of chain integrity: the supplied
    /// `previous_hash` must match the recomputed digest of the last block,
    /// and `proof` must satisfy the difficulty predicate against the last
    /// block's proof. On any failure the pool and chain are left untouched.
    pub fn seal_block(&self, proof: u64, previous_hash: &str) -> Result<Block> {
        let mut state = self
            .state
            .write()
            .expect("Failed to acquire write lock on ledger - this should never happen");

        let last = Self::tip(&state);
        let expected = block_digest(last)?;
        if expected != previous_hash {
            return Err(LedgerError::ChainLinkage {
                expected,
                supplied: previous_hash.to_string(),
            });
        }
        if !self.engine.valid(last.get_proof(), proof) {
            return Err(LedgerError::InvalidProof {
                last_proof: last.get_proof(),
                proof,
            });
        }

        let index = last.get_index() + 1;
        let transactions = state.pool.drain();
        let block = Block::new_block(index, proof, previous_hash.to_string(), transactions)?;
        state.chain.push(block.clone());

        info!(
            "Sealed block {index} with {} transactions (proof: {proof})",
            block.get_transactions().len()
        );
        Ok(block)
    }

    /// Snapshot of the full chain, genesis first.
    pub fn chain(&self) -> Vec<Block> {
        let state = self
            .state
            .read()
            .expect("Failed to acquire read lock on ledger - this should never happen");
        state.chain.clone()
    }

    /// Number of transfers waiting for the next seal.
    pub fn pending_transactions(&self) -> usize {
        let state = self
            .state
            .read()
            .expect("Failed to acquire read lock on ledger - this should never happen");
        state.pool.len()
    }

    fn tip(state: &LedgerState) -> &Block {
        state
            .chain
            .last()
            .expect("Chain always holds the genesis block")
    }
}
