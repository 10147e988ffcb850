use serde::{Deserialize, Serialize};

/// Sender address used for mining reward transactions. The zero address
/// signals that the coin was created by the node that forged the block
/// rather than transferred from an existing balance.
pub const REWARD_SENDER: &str = "0";

/// Amount paid out for forging a block.
pub const REWARD_AMOUNT: i64 = 1;

/// A single pending transfer of `amount` from `sender` to `recipient`.
/// Immutable once created; owned by the transaction pool until a sealed
/// block absorbs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    sender: String,
    amount: i64,
    recipient: String,
}

impl Transaction {
    pub(crate) fn new(sender: String, amount: i64, recipient: String) -> Transaction {
        Transaction {
            sender,
            amount,
            recipient,
        }
    }

    pub fn get_sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn get_amount(&self) -> i64 {
        self.amount
    }

    pub fn get_recipient(&self) -> &str {
        self.recipient.as_str()
    }

    /// A reward transaction is the coin minted for the forging node.
    pub fn is_reward(&self) -> bool {
        self.sender == REWARD_SENDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_accessors() {
        let tx = Transaction::new("alice".to_string(), 5, "bob".to_string());
        assert_eq!(tx.get_sender(), "alice");
        assert_eq!(tx.get_amount(), 5);
        assert_eq!(tx.get_recipient(), "bob");
        assert!(!tx.is_reward());
    }

    #[test]
    fn test_reward_transaction_detection() {
        let tx = Transaction::new(
            REWARD_SENDER.to_string(),
            REWARD_AMOUNT,
            "miner".to_string(),
        );
        assert!(tx.is_reward());
    }
}
