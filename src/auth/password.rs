// Password storage for back-office accounts
// Only salted bcrypt hashes reach the users table; comparison happens
// against the hash, never against a stored plaintext

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hashes an account password for persistence
///
/// Each call salts independently, so the same password hashes to a
/// different value every time.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Checks a login attempt against the stored hash
///
/// Returns `Ok(false)` for a well-formed hash that does not match;
/// `Err` only when the stored value is not a bcrypt hash at all.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, BcryptError> {
    verify(password, stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_hash_verifies_original_password() {
        let hash = hash_password("office-login-pw").expect("valid hash");

        assert!(verify_password("office-login-pw", &hash).expect("valid verification"));
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = hash_password("office-login-pw").expect("valid hash");

        assert!(!verify_password("other-pw", &hash).expect("valid verification"));
    }

    #[test]
    fn salting_varies_the_hash() {
        let first = hash_password("office-login-pw").expect("valid hash");
        let second = hash_password("office-login-pw").expect("valid hash");

        assert_ne!(first, second);
        assert!(verify_password("office-login-pw", &first).unwrap());
        assert!(verify_password("office-login-pw", &second).unwrap());
    }

    #[test]
    fn garbage_stored_value_is_an_error() {
        assert!(verify_password("office-login-pw", "not-a-bcrypt-hash").is_err());
    }
}
