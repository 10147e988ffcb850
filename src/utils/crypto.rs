use ring::digest::{Context, SHA256};

use crate::error::{LedgerError, Result};
use data_encoding::HEXLOWER;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn current_timestamp() -> Result<i64> {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| LedgerError::Clock(format!("System time error: {e}")))?
        .as_millis();

    // Ensure the timestamp fits in i64
    if duration > i64::MAX as u128 {
        return Err(LedgerError::Clock("Timestamp overflow".to_string()));
    }

    Ok(duration as i64)
}

pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

pub fn sha256_hex_digest(data: &[u8]) -> String {
    HEXLOWER.encode(sha256_digest(data).as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_digest_known_vector() {
        // SHA-256 of the empty input
        assert_eq!(
            sha256_hex_digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_hex_digest_is_deterministic() {
        assert_eq!(sha256_hex_digest(b"100"), sha256_hex_digest(b"100"));
        assert_ne!(sha256_hex_digest(b"100"), sha256_hex_digest(b"101"));
    }

    #[test]
    fn test_current_timestamp_is_non_decreasing() {
        let first = current_timestamp().unwrap();
        let second = current_timestamp().unwrap();
        assert!(second >= first);
    }
}
