//! Deterministic alias generation from an atomic counter.

use std::sync::atomic::{AtomicU64, Ordering};

use super::{AliasGenerator, GenerationError, encode};

/// Issues aliases by encoding `counter ^ secret` into a fixed-width string.
///
/// The counter is seeded from the last id in storage, so aliases never repeat
/// for a given secret and length. XOR with the secret only hides the sequence
/// from casual guessing. Capacity is bounded: once the mixed value needs more
/// symbols than `length`, every call fails with [`GenerationError::Overflow`].
#[derive(Debug)]
pub struct CounterAliasGenerator {
    next_id: AtomicU64,
    secret: u64,
    length: usize,
}

impl CounterAliasGenerator {
    /// Creates a generator whose first alias encodes `start_from + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLength`] if `length` is zero.
    pub fn new(start_from: u64, secret: u64, length: usize) -> Result<Self, GenerationError> {
        if length == 0 {
            return Err(GenerationError::InvalidLength);
        }

        Ok(Self {
            next_id: AtomicU64::new(start_from),
            secret,
            length,
        })
    }
}

impl AliasGenerator for CounterAliasGenerator {
    fn new_alias(&self) -> Result<String, GenerationError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        encode(id ^ self.secret, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::alias::{ALPHABET, DEFAULT_LENGTH, is_alphabet_only};
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_rejects_zero_length() {
        let result = CounterAliasGenerator::new(0, 123, 0);
        assert!(matches!(result, Err(GenerationError::InvalidLength)));
    }

    #[test]
    fn test_generates_requested_length() {
        for length in [5, 10, 100] {
            let generator = CounterAliasGenerator::new(0, 123_456, length).unwrap();
            let alias = generator.new_alias().unwrap();
            assert_eq!(alias.len(), length);
            assert!(is_alphabet_only(&alias));
        }
    }

    #[test]
    fn test_consecutive_aliases_differ() {
        let generator = CounterAliasGenerator::new(0, 42, DEFAULT_LENGTH).unwrap();

        let first = generator.new_alias().unwrap();
        let second = generator.new_alias().unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_first_alias_encodes_seed_plus_one() {
        let generator = CounterAliasGenerator::new(41, 0, 3).unwrap();
        assert_eq!(generator.new_alias().unwrap(), encode(42, 3).unwrap());
    }

    #[test]
    fn test_secret_changes_output() {
        let plain = CounterAliasGenerator::new(0, 0, DEFAULT_LENGTH).unwrap();
        let mixed = CounterAliasGenerator::new(0, 0xdead_beef, DEFAULT_LENGTH).unwrap();

        assert_ne!(plain.new_alias().unwrap(), mixed.new_alias().unwrap());
    }

    #[test]
    fn test_overflow_when_value_exceeds_length() {
        let base = ALPHABET.len() as u64;
        let generator = CounterAliasGenerator::new(base - 1, 0, 1).unwrap();

        let result = generator.new_alias();
        assert!(matches!(result, Err(GenerationError::Overflow)));
    }

    #[test]
    fn test_last_value_that_fits() {
        let base = ALPHABET.len() as u64;
        let generator = CounterAliasGenerator::new(base - 2, 0, 1).unwrap();

        assert_eq!(generator.new_alias().unwrap(), "_");
        assert!(matches!(
            generator.new_alias(),
            Err(GenerationError::Overflow)
        ));
    }

    #[test]
    fn test_concurrent_callers_never_share_a_value() {
        let generator = Arc::new(CounterAliasGenerator::new(0, 7, DEFAULT_LENGTH).unwrap());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let generator = Arc::clone(&generator);
            handles.push(std::thread::spawn(move || {
                (0..500)
                    .map(|_| generator.new_alias().unwrap())
                    .collect::<Vec<_>>()
            }));
        }

        let mut aliases = HashSet::new();
        for handle in handles {
            for alias in handle.join().unwrap() {
                assert!(aliases.insert(alias));
            }
        }

        assert_eq!(aliases.len(), 4000);
    }
}
