//! Password digests.
//!
//! Passwords are stored as a single unsalted SHA-256 pass, hex encoded. This
//! matches the records already in the tables, so changing the scheme needs a
//! migration.

use sha2::{Digest, Sha256};

/// Placeholder returned in place of a stored digest on read paths.
pub const PASSWORD_MASK: &str = "********";

/// Length of a hex-encoded digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Hashes a plaintext password into a lowercase hex digest.
///
/// # Examples
///
/// ```
/// use garage_core::password::hash_password;
///
/// let digest = hash_password("hunter2");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, hash_password("hunter2"));
/// ```
pub fn hash_password(plaintext: &str) -> String {
    hex::encode(Sha256::digest(plaintext.as_bytes()))
}
