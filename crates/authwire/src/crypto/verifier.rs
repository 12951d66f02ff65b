// The hash-comparison seam used by the credentials authorizer.

use std::fmt;

use authwire_core::error::Result;

use super::password::{verify_password, DUMMY_SCRYPT_HASH};

/// Hash verifier consulted by the credentials authorizer.
pub trait PasswordVerifier: Send + Sync + fmt::Debug {
    /// `Ok(true)` iff `password` matches `hash`. `Err` for an unusable hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;

    /// Burn roughly the time of one `verify` call when there is nothing to
    /// verify against, so a missing account answers as slowly as a wrong
    /// password.
    fn equalize(&self, _password: &str) {}
}

/// Verifier for the stored formats [`verify_password`] understands.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPasswordVerifier;

impl PasswordVerifier for DefaultPasswordVerifier {
    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        verify_password(hash, password)
    }

    /// Runs the same scrypt derivation `hash_password` uses for new accounts.
    fn equalize(&self, password: &str) {
        let _ = verify_password(DUMMY_SCRYPT_HASH, password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_verifier_delegates() {
        let hash = crate::crypto::hash_password("secret").unwrap();
        let verifier = DefaultPasswordVerifier;
        assert!(verifier.verify("secret", &hash).unwrap());
        assert!(!verifier.verify("nope", &hash).unwrap());
    }

    #[test]
    fn test_equalize_matches_new_hash_format() {
        let verifier = DefaultPasswordVerifier;
        verifier.equalize("secret");
        let fresh = crate::crypto::hash_password("secret").unwrap();
        let dummy_parts: Vec<usize> = DUMMY_SCRYPT_HASH.split(':').map(str::len).collect();
        let fresh_parts: Vec<usize> = fresh.split(':').map(str::len).collect();
        assert_eq!(dummy_parts, fresh_parts);
    }
}
