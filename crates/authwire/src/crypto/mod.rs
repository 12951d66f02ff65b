// Crypto module — password hashing and the hash-comparison primitive.

pub mod password;
pub mod verifier;

pub use password::{constant_time_equal, hash_password, verify_password};
pub use verifier::{DefaultPasswordVerifier, PasswordVerifier};
