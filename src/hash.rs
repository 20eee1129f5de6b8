//! SHA-256 digest helpers shared by the Merkleization routines.

use sha2::{Digest, Sha256};

/// Width in bytes of every digest produced by this crate.
pub const DIGEST_SIZE: usize = 32;

/// Hashes a byte string into a 32-byte digest.
pub fn hash(bytes: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher.finalize().into()
}

/// Hashes the concatenation of two byte strings without materializing it.
pub fn hash_pair(left: &[u8], right: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}
