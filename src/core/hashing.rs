use crate::core::Block;
use crate::error::Result;
use crate::utils::sha256_hex_digest;

/// Computes the canonical SHA-256 digest of a block as a lowercase hex
/// string.
///
/// The block is encoded as a JSON value first, which orders object keys
/// alphabetically, so the digest is independent of field construction
/// order. The transaction sequence is a JSON array and keeps its original
/// order; reordering transactions changes the digest.
pub fn block_digest(block: &Block) -> Result<String> {
    let canonical = serde_json::to_value(block)?;
    let encoded = serde_json::to_string(&canonical)?;
    Ok(sha256_hex_digest(encoded.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;

    fn test_block(transactions: Vec<Transaction>) -> Block {
        Block::new_test_block(2, 42, 1_650_000_000_000, "abc".to_string(), transactions)
    }

    #[test]
    fn test_digest_is_deterministic() {
        let block = test_block(vec![Transaction::new(
            "alice".to_string(),
            5,
            "bob".to_string(),
        )]);
        let first = block_digest(&block).unwrap();
        let second = block_digest(&block).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_digest_is_hex_encoded_sha256() {
        let digest = block_digest(&test_block(vec![])).unwrap();
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_changes_with_any_field() {
        let base = test_block(vec![]);
        let base_digest = block_digest(&base).unwrap();

        let different_proof =
            Block::new_test_block(2, 43, 1_650_000_000_000, "abc".to_string(), vec![]);
        assert_ne!(base_digest, block_digest(&different_proof).unwrap());

        let different_prev =
            Block::new_test_block(2, 42, 1_650_000_000_000, "abd".to_string(), vec![]);
        assert_ne!(base_digest, block_digest(&different_prev).unwrap());
    }

    #[test]
    fn test_transaction_order_changes_digest() {
        let tx_a = Transaction::new("alice".to_string(), 5, "bob".to_string());
        let tx_b = Transaction::new("carol".to_string(), 7, "dave".to_string());

        let forward = test_block(vec![tx_a.clone(), tx_b.clone()]);
        let reversed = test_block(vec![tx_b, tx_a]);

        assert_ne!(
            block_digest(&forward).unwrap(),
            block_digest(&reversed).unwrap()
        );
    }
}
