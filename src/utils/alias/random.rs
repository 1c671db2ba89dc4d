//! Random alias generation backed by the operating system's secure source.

use super::{ALPHABET, AliasGenerator, GenerationError};

/// Random bytes requested from the OS per refill.
const BUFFER_LEN: usize = 32;

/// Issues aliases of independent, uniformly distributed alphabet symbols.
///
/// Collisions are possible by construction and must be resolved by the caller.
#[derive(Debug, Clone)]
pub struct RandomAliasGenerator {
    length: usize,
}

impl RandomAliasGenerator {
    /// Creates a generator for aliases of `length` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, GenerationError> {
        if length == 0 {
            return Err(GenerationError::InvalidLength);
        }

        Ok(Self { length })
    }
}

impl AliasGenerator for RandomAliasGenerator {
    fn new_alias(&self) -> Result<String, GenerationError> {
        let mut alias = String::with_capacity(self.length);
        let mut buffer = [0u8; BUFFER_LEN];

        while alias.len() < self.length {
            getrandom::fill(&mut buffer).map_err(GenerationError::Entropy)?;

            // Six low bits are uniform over 0..64; values past the alphabet are rejected.
            for index in buffer.iter().map(|b| usize::from(b & 0x3f)) {
                if index >= ALPHABET.len() {
                    continue;
                }
                alias.push(char::from(ALPHABET[index]));
                if alias.len() == self.length {
                    break;
                }
            }
        }

        Ok(alias)
    }
}
