// Password hashing.
//
// Two stored formats are understood:
// - bcrypt modular crypt strings (`$2a$`, `$2b$`, `$2y$`), verified with pwhash
// - scrypt (N=16384, r=16, p=1, dkLen=64) as `hex(salt):hex(key)`
//
// New hashes are always scrypt.

use authwire_core::error::{AuthwireError, Result};
use rand::RngCore;
use scrypt::{scrypt, Params};
use subtle::ConstantTimeEq;

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2y$"];

/// `$2b$` + two-digit cost + `$` + 22 salt chars + 31 hash chars.
const BCRYPT_HASH_LEN: usize = 60;

/// Stored in the scrypt format but matched by no password. Verifying against
/// it costs the same as verifying a real account.
pub(crate) const DUMMY_SCRYPT_HASH: &str = concat!(
    "6e6f2d6163636f756e742d73616c7421",
    ":",
    "00000000000000000000000000000000000000000000000000000000000000000",
    "000000000000000000000000000000000000000000000000000000000000000",
);

/// Hash a password using scrypt.
///
/// Returns `salt:key`, both hex-encoded. The salt is 16 random bytes.
pub fn hash_password(password: &str) -> Result<String> {
    let mut salt_bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut salt_bytes);
    let salt_hex = hex::encode(salt_bytes);

    let key = generate_key(password, &salt_hex)?;
    Ok(format!("{}:{}", salt_hex, hex::encode(key)))
}

/// Verify a password against a stored hash in either supported format.
///
/// `Ok(false)` is a mismatch. `Err` means the stored hash is unusable.
pub fn verify_password(hash: &str, password: &str) -> Result<bool> {
    if is_bcrypt(hash) {
        check_bcrypt_shape(hash)?;
        return Ok(pwhash::bcrypt::verify(password, hash));
    }

    let (salt, key_hex) = hash
        .split_once(':')
        .ok_or_else(|| AuthwireError::Crypto("unrecognized password hash format".into()))?;

    let expected_key = hex::decode(key_hex)
        .map_err(|e| AuthwireError::Crypto(format!("invalid hex in password hash: {e}")))?;

    let derived_key = generate_key(password, salt)?;

    Ok(constant_time_equal(&derived_key, &expected_key))
}

/// Compare two byte slices in constant time.
pub fn constant_time_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

fn is_bcrypt(hash: &str) -> bool {
    BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p))
}

// pwhash reports a corrupt hash as a mismatch, so reject it up front.
fn check_bcrypt_shape(hash: &str) -> Result<()> {
    let malformed = || AuthwireError::Crypto("malformed bcrypt hash".into());
    if hash.len() != BCRYPT_HASH_LEN {
        return Err(malformed());
    }
    let cost = hash
        .get(4..6)
        .and_then(|c| c.parse::<u32>().ok())
        .ok_or_else(malformed)?;
    if !(4..=31).contains(&cost) || hash.as_bytes()[6] != b'$' {
        return Err(malformed());
    }
    let body_ok = hash[7..]
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'/');
    if !body_ok {
        return Err(malformed());
    }
    Ok(())
}

/// Derive a 64-byte key using scrypt.
fn generate_key(password: &str, salt: &str) -> Result<Vec<u8>> {
    // N=16384 → log2(N)=14
    let params = Params::new(14, 16, 1, 64)
        .map_err(|e| AuthwireError::Crypto(format!("invalid scrypt params: {e}")))?;

    let mut output = vec![0u8; 64];
    scrypt(password.as_bytes(), salt.as_bytes(), &params, &mut output)
        .map_err(|e| AuthwireError::Crypto(format!("scrypt failed: {e}")))?;

    Ok(output)
}
