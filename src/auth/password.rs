//! Password hashing.
//!
//! Hashes are unsalted SHA-256 hex digests. This is deliberately kept
//! bit-compatible with the hashes already stored in existing deployments;
//! changing the scheme would invalidate every stored credential.

use sha2::{Digest, Sha256};

/// Hash a plaintext password to its lowercase hex SHA-256 digest.
pub fn hash_password(plaintext: &str) -> String {
    let digest = Sha256::digest(plaintext.as_bytes());
    hex::encode(digest)
}

/// Check a plaintext password against a stored digest.
pub fn verify_password(plaintext: &str, password_hash: &str) -> bool {
    hash_password(plaintext) == password_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("s3cret"), hash_password("s3cret"));
    }

    #[test]
    fn test_known_digest() {
        // sha256("admin123"), matching hashes already in production data
        assert_eq!(
            hash_password("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[test]
    fn test_different_inputs_differ() {
        assert_ne!(hash_password("admin123"), hash_password("admin124"));
    }

    #[test]
    fn test_verify() {
        let digest = hash_password("admin123");
        assert!(verify_password("admin123", &digest));
        assert!(!verify_password("admin124", &digest));
    }
}
