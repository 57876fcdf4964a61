//! Password digests.
//!
//! Passwords are stored as the lowercase hex SHA-256 of their UTF-8 bytes. There is no salt:
//! the digest format is shared with data written by earlier versions and must stay stable.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded SHA-256 digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Returns the lowercase hex SHA-256 digest of `password`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// True when `s` has the exact shape of a stored digest: 64 lowercase hex characters.
///
/// A plaintext password that happens to have this shape is indistinguishable from a digest.
pub fn looks_like_digest(s: &str) -> bool {
    s.len() == DIGEST_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_known_vector() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn digest_is_lowercase_hex_of_fixed_length() {
        let d = hash_password("hunter2");
        assert_eq!(d.len(), DIGEST_HEX_LEN);
        assert!(looks_like_digest(&d));
    }

    #[test]
    fn rejects_non_digest_shapes() {
        assert!(!looks_like_digest("hunter2"));
        assert!(!looks_like_digest(""));
        // uppercase hex is not what we write
        assert!(!looks_like_digest(&hash_password("x").to_uppercase()));
        // one character short
        assert!(!looks_like_digest(&hash_password("x")[1..]));
    }
}
