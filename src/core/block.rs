use crate::core::Transaction;
use crate::error::Result;
use crate::utils::current_timestamp;
use serde::{Deserialize, Serialize};

/// Previous-hash sentinel carried by the genesis block, which has no
/// predecessor to link to.
pub const GENESIS_PREVIOUS_HASH: &str = "1";

/// Proof seed for the genesis block. Nothing precedes the genesis block,
/// so its proof is a fixed value rather than the result of a search.
pub const GENESIS_PROOF: u64 = 100;

/// An immutable unit of the chain: a batch of transactions sealed with a
/// proof and linked to its predecessor's digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    index: u64,
    proof: u64,
    timestamp: i64,
    previous_hash: String,
    transactions: Vec<Transaction>,
}

impl Block {
    /// Builds the next block in the chain. The timestamp is stamped at
    /// construction time; the caller supplies everything else.
    pub(crate) fn new_block(
        index: u64,
        proof: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
    ) -> Result<Block> {
        Ok(Block {
            index,
            proof,
            timestamp: current_timestamp()?,
            previous_hash,
            transactions,
        })
    }

    pub(crate) fn generate_genesis_block() -> Result<Block> {
        Block::new_block(
            1,
            GENESIS_PROOF,
            String::from(GENESIS_PREVIOUS_HASH),
            Vec::new(),
        )
    }

    pub fn get_index(&self) -> u64 {
        self.index
    }

    pub fn get_proof(&self) -> u64 {
        self.proof
    }

    pub fn get_timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn get_previous_hash(&self) -> &str {
        self.previous_hash.as_str()
    }

    pub fn get_transactions(&self) -> &[Transaction] {
        self.transactions.as_slice()
    }

    pub fn is_genesis(&self) -> bool {
        self.index == 1
    }

    /// Create a test block with a custom timestamp (for testing only)
    #[cfg(test)]
    pub fn new_test_block(
        index: u64,
        proof: u64,
        timestamp: i64,
        previous_hash: String,
        transactions: Vec<Transaction>,
    ) -> Block {
        Block {
            index,
            proof,
            timestamp,
            previous_hash,
            transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_block_shape() {
        let genesis = Block::generate_genesis_block().unwrap();
        assert_eq!(genesis.get_index(), 1);
        assert_eq!(genesis.get_proof(), GENESIS_PROOF);
        assert_eq!(genesis.get_previous_hash(), GENESIS_PREVIOUS_HASH);
        assert!(genesis.get_transactions().is_empty());
        assert!(genesis.is_genesis());
    }

    #[test]
    fn test_new_block_preserves_transaction_order() {
        let transactions = vec![
            Transaction::new("a".to_string(), 1, "b".to_string()),
            Transaction::new("c".to_string(), 2, "d".to_string()),
        ];
        let block = Block::new_block(2, 42, "abc".to_string(), transactions.clone()).unwrap();
        assert_eq!(block.get_transactions(), transactions.as_slice());
        assert!(!block.is_genesis());
    }
}
