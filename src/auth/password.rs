use bcrypt::DEFAULT_COST;

use crate::errors::{AppError, AppResult};

/// Hashes a plaintext password with bcrypt. Each call generates a fresh salt,
/// so hashing the same password twice yields different digests.
pub fn hash_password(plaintext: &str) -> AppResult<String> {
    bcrypt::hash(plaintext, DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a plaintext password against a stored digest. A digest that cannot
/// be parsed counts as a mismatch, never an error.
pub fn verify_password(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let digest = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &digest));
    }

    #[test]
    fn test_wrong_password_fails() {
        let digest = hash_password("correct horse battery staple").unwrap();
        assert!(!verify_password("Tr0ub4dor&3", &digest));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("hunter2", &first));
        assert!(verify_password("hunter2", &second));
    }

    #[test]
    fn test_malformed_digest_is_a_mismatch() {
        assert!(!verify_password("hunter2", "not-a-bcrypt-digest"));
        assert!(!verify_password("hunter2", ""));
    }
}
