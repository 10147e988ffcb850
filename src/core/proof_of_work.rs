use crate::config::DEFAULT_DIFFICULTY;
use crate::error::{LedgerError, Result};
use crate::utils::sha256_hex_digest;

/// Brute-force proof-of-work search and validation.
///
/// A proof is valid when the SHA-256 digest of the previous proof
/// concatenated with the candidate proof (both as decimal strings) starts
/// with `difficulty` zero hex characters. The search is a linear scan from
/// zero, so identical inputs always produce identical proofs.
#[derive(Debug, Clone)]
pub struct ProofEngine {
    difficulty: usize,
}

impl Default for ProofEngine {
    fn default() -> Self {
        Self::new(DEFAULT_DIFFICULTY)
    }
}

impl ProofEngine {
    pub fn new(difficulty: usize) -> ProofEngine {
        ProofEngine { difficulty }
    }

    pub fn get_difficulty(&self) -> usize {
        self.difficulty
    }

    /// Returns true iff `proof` satisfies the difficulty predicate for
    /// `last_proof`.
    pub fn valid(&self, last_proof: u64, proof: u64) -> bool {
        let guess = format!("{last_proof}{proof}");
        let guess_hash = sha256_hex_digest(guess.as_bytes());
        guess_hash
            .as_bytes()
            .iter()
            .take(self.difficulty)
            .all(|&c| c == b'0')
    }

    /// Finds the smallest proof valid for `last_proof`.
    ///
    /// Unbounded: runs until a proof is found, which is the dominant cost
    /// center of the engine. Use [`ProofEngine::search_bounded`] when a
    /// failure mode is preferable to an open-ended scan.
    pub fn search(&self, last_proof: u64) -> u64 {
        let mut proof = 0;
        while !self.valid(last_proof, proof) {
            proof += 1;
        }
        proof
    }

    /// Like [`ProofEngine::search`] but gives up after `max_attempts`
    /// candidates.
    pub fn search_bounded(&self, last_proof: u64, max_attempts: u64) -> Result<u64> {
        for proof in 0..max_attempts {
            if self.valid(last_proof, proof) {
                return Ok(proof);
            }
        }
        Err(LedgerError::ProofNotFound {
            last_proof,
            max_attempts,
        })
    }
}
