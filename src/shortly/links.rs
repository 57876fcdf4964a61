//! URL normalization and short-code generation.

use url::Url;

/// Namespace tag every short code starts with. Also the display prefix.
pub const SHORT_PREFIX: &str = "short.ly/";

/// Number of random characters after the prefix.
pub const CODE_LEN: usize = 6;

const CODE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Turns free-text input into an absolute URL.
///
/// Input that already parses as an absolute URL is returned as typed. Otherwise `https://`
/// is prepended and the result is accepted if that parses. Anything else yields `None`.
pub fn normalize(raw: &str) -> Option<String> {
    if Url::parse(raw).is_ok() {
        return Some(raw.to_string());
    }
    let prefixed = format!("https://{}", raw);
    Url::parse(&prefixed).ok().map(|_| prefixed)
}

/// Draws a fresh prefixed code: `short.ly/` followed by 6 lowercase base-36 characters.
pub fn generate_code() -> String {
    let mut code = String::with_capacity(SHORT_PREFIX.len() + CODE_LEN);
    code.push_str(SHORT_PREFIX);
    code.extend(
        std::iter::repeat_with(|| CODE_ALPHABET[rand::random_range(0..CODE_ALPHABET.len())] as char)
            .take(CODE_LEN),
    );
    code
}

/// Supplies candidate short codes to `shorten`.
///
/// Production uses [`RandomCodes`]; any `FnMut() -> String` works, which lets tests script
/// collisions.
pub trait CodeSource {
    fn next_code(&mut self) -> String;
}

pub struct RandomCodes;

impl CodeSource for RandomCodes {
    fn next_code(&mut self) -> String {
        generate_code()
    }
}

impl<F: FnMut() -> String> CodeSource for F {
    fn next_code(&mut self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        assert_eq!(normalize("example.com").as_deref(), Some("https://example.com"));
    }

    #[test]
    fn absolute_url_is_kept_verbatim() {
        assert_eq!(normalize("http://a.b").as_deref(), Some("http://a.b"));
        assert_eq!(
            normalize("https://Example.com/Path?q=1").as_deref(),
            Some("https://Example.com/Path?q=1")
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(normalize("not a url!!"), None);
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn generated_codes_have_expected_shape() {
        for _ in 0..50 {
            let code = generate_code();
            let tail = code.strip_prefix(SHORT_PREFIX).unwrap();
            assert_eq!(tail.len(), CODE_LEN);
            assert!(tail.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
        }
    }

    #[test]
    fn closures_are_code_sources() {
        let mut n = 0;
        let mut src = || {
            n += 1;
            format!("{}{:06}", SHORT_PREFIX, n)
        };
        assert_eq!(src.next_code(), "short.ly/000001");
        assert_eq!(src.next_code(), "short.ly/000002");
    }
}
