//! Short key generation and validation.
//!
//! Keys are 16 characters drawn uniformly from `[a-zA-Z0-9]` using the
//! operating system's CSPRNG.

use regex::Regex;
use std::sync::LazyLock;

/// Number of characters in a short key.
pub const KEY_LENGTH: usize = 16;

const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are rejected so every character is equally likely.
const ACCEPT_BELOW: u8 = 248;

/// Random bytes requested from the OS per refill.
const BATCH_BYTES: usize = 32;

/// Compiled pattern every short key must match.
static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{16}$").expect("key pattern is valid"));

/// The system random source could not be read.
#[derive(Debug, thiserror::Error)]
#[error("Failed to read from the system random source: {0}")]
pub struct KeyGenerationError(String);

/// Generates a random short key.
///
/// # Errors
///
/// Returns [`KeyGenerationError`] if the OS random source is unavailable.
/// The failure is not retried.
///
/// # Examples
///
/// ```ignore
/// let key = generate_key()?;
/// assert_eq!(key.len(), 16);
/// assert!(is_valid_key(&key));
/// ```
pub fn generate_key() -> Result<String, KeyGenerationError> {
    let mut key = String::with_capacity(KEY_LENGTH);
    let mut buffer = [0u8; BATCH_BYTES];

    while key.len() < KEY_LENGTH {
        getrandom::fill(&mut buffer).map_err(|e| KeyGenerationError(e.to_string()))?;

        for &byte in buffer.iter().filter(|&&b| b < ACCEPT_BELOW) {
            key.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
            if key.len() == KEY_LENGTH {
                break;
            }
        }
    }

    Ok(key)
}

/// Returns true if `key` is exactly 16 ASCII alphanumeric characters.
pub fn is_valid_key(key: &str) -> bool {
    KEY_REGEX.is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_key_has_correct_length() {
        let key = generate_key().unwrap();
        assert_eq!(key.len(), KEY_LENGTH);
    }

    #[test]
    fn test_generate_key_matches_pattern() {
        for _ in 0..200 {
            let key = generate_key().unwrap();
            assert!(is_valid_key(&key), "generated key '{}' is invalid", key);
        }
    }

    #[test]
    fn test_generate_key_produces_unique_keys() {
        let keys: HashSet<String> = (0..1000).map(|_| generate_key().unwrap()).collect();
        assert_eq!(keys.len(), 1000);
    }

    #[test]
    fn test_generate_key_uses_whole_alphabet() {
        let seen: HashSet<char> = (0..500)
            .flat_map(|_| generate_key().unwrap().chars().collect::<Vec<_>>())
            .collect();

        // 8000 draws over 62 symbols; missing any one is vanishingly unlikely.
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn test_alphabet_and_rejection_bound_agree() {
        assert_eq!(ALPHABET.len(), 62);
        assert_eq!(usize::from(ACCEPT_BELOW) % ALPHABET.len(), 0);
        assert!(usize::from(ACCEPT_BELOW) + ALPHABET.len() > 256);
    }

    #[test]
    fn test_is_valid_key_accepts_alphanumeric() {
        assert!(is_valid_key("abcdEFGH12345678"));
        assert!(is_valid_key("0000000000000000"));
        assert!(is_valid_key("ZZZZZZZZZZZZZZZZ"));
    }

    #[test]
    fn test_is_valid_key_rejects_wrong_length() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("abc"));
        assert!(!is_valid_key("abcdEFGH1234567"));
        assert!(!is_valid_key("abcdEFGH123456789"));
    }

    #[test]
    fn test_is_valid_key_rejects_other_characters() {
        assert!(!is_valid_key("abcdEFGH1234567-"));
        assert!(!is_valid_key("abcdEFGH1234567_"));
        assert!(!is_valid_key("abcdEFGH 1234567"));
        assert!(!is_valid_key("abcdEFGH1234567é"));
    }
}
