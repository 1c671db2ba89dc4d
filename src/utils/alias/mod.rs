//! Short alias generation.
//!
//! Two interchangeable strategies implement [`AliasGenerator`]:
//!
//! - [`RandomAliasGenerator`] - independent samples from a secure random source
//! - [`CounterAliasGenerator`] - an atomic counter XORed with a secret, encoded
//!   into a fixed-width string
//!
//! Both draw from the same URL-safe [`ALPHABET`].

mod counter;
mod random;

pub use counter::CounterAliasGenerator;
pub use random::RandomAliasGenerator;

use thiserror::Error;

/// Alias length used when none is configured.
pub const DEFAULT_LENGTH: usize = 10;

/// Symbols an alias may contain. The first symbol doubles as the zero digit
/// of the counter encoding.
pub const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789_";

/// Errors produced while constructing a generator or issuing an alias.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("alias generator: invalid length")]
    InvalidLength,

    /// The counter value no longer fits into the configured alias length.
    #[error("alias generator: counter value overflow")]
    Overflow,

    #[error("alias generator: secure random source failed: {0}")]
    Entropy(getrandom::Error),
}

/// Capability to issue new short aliases.
///
/// Aliases are not guaranteed to be unique; callers resolve collisions
/// against storage.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Issues a new alias.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError`] if the strategy cannot produce an alias.
    fn new_alias(&self) -> Result<String, GenerationError>;
}

/// Encodes `value` into exactly `length` alphabet symbols, most significant first.
///
/// Shorter values are left-padded with the zero symbol.
///
/// # Errors
///
/// Returns [`GenerationError::Overflow`] if `value` needs more than `length` symbols.
pub fn encode(mut value: u64, length: usize) -> Result<String, GenerationError> {
    let base = ALPHABET.len() as u64;
    let mut out = vec![ALPHABET[0]; length];

    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(value % base) as usize];
        value /= base;
    }

    if value != 0 {
        return Err(GenerationError::Overflow);
    }

    Ok(out.into_iter().map(char::from).collect())
}

/// Returns true if every character of `alias` belongs to [`ALPHABET`].
pub fn is_alphabet_only(alias: &str) -> bool {
    alias.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_has_no_duplicates() {
        let mut symbols = ALPHABET.to_vec();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), ALPHABET.len());
    }

    #[test]
    fn test_alphabet_is_url_safe() {
        assert!(
            ALPHABET
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || *b == b'_')
        );
    }

    #[test]
    fn test_encode_zero_is_all_zero_symbols() {
        assert_eq!(encode(0, 4).unwrap(), "aaaa");
    }

    #[test]
    fn test_encode_most_significant_first() {
        let base = ALPHABET.len() as u64;
        assert_eq!(encode(1, 3).unwrap(), "aab");
        assert_eq!(encode(base, 3).unwrap(), "aba");
        assert_eq!(encode(base - 1, 1).unwrap(), "_");
    }

    #[test]
    fn test_encode_overflow() {
        let base = ALPHABET.len() as u64;
        let err = encode(base, 1).unwrap_err();
        assert!(matches!(err, GenerationError::Overflow));
    }

    #[test]
    fn test_encode_max_value_fits_in_eleven_symbols() {
        assert_eq!(encode(u64::MAX, 11).unwrap().len(), 11);
        assert!(matches!(
            encode(u64::MAX, 10),
            Err(GenerationError::Overflow)
        ));
    }

    #[test]
    fn test_is_alphabet_only() {
        assert!(is_alphabet_only("abc_XYZ_019"));
        assert!(!is_alphabet_only("abc-def"));
        assert!(!is_alphabet_only("a b"));
    }
}
