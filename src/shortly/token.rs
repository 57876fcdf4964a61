//! Session tokens.
//!
//! A token is `base64(<email>:<digest>)`. It is opaque to clients and only ever decoded to
//! recover the email on startup; the digest half is never re-checked.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

pub fn encode(email: &str, digest: &str) -> String {
    STANDARD.encode(format!("{}:{}", email, digest))
}

/// Recovers the email from a token, or `None` if the token is not valid base64 UTF-8.
pub fn decode_email(token: &str) -> Option<String> {
    let bytes = STANDARD.decode(token.trim()).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;
    let email = decoded.split(':').next().unwrap_or_default();
    if email.is_empty() {
        Some(decoded)
    } else {
        Some(email.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_email() {
        let tok = encode("me@example.com", "abcd");
        assert_eq!(tok, "bWVAZXhhbXBsZS5jb206YWJjZA==");
        assert_eq!(decode_email(&tok).as_deref(), Some("me@example.com"));
    }

    #[test]
    fn empty_email_part_falls_back_to_whole_string() {
        let tok = STANDARD.encode(":xyz");
        assert_eq!(decode_email(&tok).as_deref(), Some(":xyz"));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(decode_email("not base64 !!"), None);
        assert_eq!(decode_email(&STANDARD.encode([0xff, 0xfe])), None);
    }
}
