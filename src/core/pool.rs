use crate::core::Transaction;
use crate::error::{LedgerError, Result};

/// Ordered sequence of transfers waiting to be sealed into a block.
///
/// Owned by the [`Ledger`](crate::core::Ledger); cleared atomically (under
/// the ledger's lock) whenever a block is sealed.
#[derive(Debug, Default)]
pub struct TransactionPool {
    pending: Vec<Transaction>,
}

impl TransactionPool {
    pub fn new() -> TransactionPool {
        TransactionPool {
            pending: Vec::new(),
        }
    }

    /// Validates and appends a transfer, returning the pending count.
    ///
    /// Zero-value transfers are permitted; negative amounts and blank
    /// addresses are rejected without mutating the pool.
    pub fn submit(&mut self, sender: &str, amount: i64, recipient: &str) -> Result<usize> {
        if amount < 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if sender.trim().is_empty() {
            return Err(LedgerError::InvalidAddress(sender.to_string()));
        }
        if recipient.trim().is_empty() {
            return Err(LedgerError::InvalidAddress(recipient.to_string()));
        }

        self.pending.push(Transaction::new(
            sender.to_string(),
            amount,
            recipient.to_string(),
        ));
        Ok(self.pending.len())
    }

    /// Removes and returns all pending transactions in submission order,
    /// leaving the pool empty.
    pub fn drain(&mut self) -> Vec<Transaction> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
