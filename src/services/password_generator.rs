//! Random password generation for PassVault.
//!
//! Generates a string of exactly the requested length, each character
//! drawn independently and uniformly from the union of the enabled
//! charsets. Each invocation produces an independent result.

use ring::rand::{SecureRandom, SystemRandom};

use crate::types::credential::PasswordGenOptions;
use crate::types::errors::GeneratorError;

const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBER_CHARS: &str = "0123456789";
const SYMBOL_CHARS: &str = "!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// Length bounds matching the generator UI's slider.
pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 64;

/// Password generator backed by the system random source.
pub struct PasswordGenerator {
    rng: SystemRandom,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    /// Generates a password per `options`.
    ///
    /// The length is clamped to `[MIN_LENGTH, MAX_LENGTH]`. Fails with
    /// `EmptyCharset` when all four charset toggles are off.
    pub fn generate(&self, options: &PasswordGenOptions) -> Result<String, GeneratorError> {
        let mut pool = String::new();
        if options.uppercase {
            pool.push_str(UPPERCASE_CHARS);
        }
        if options.lowercase {
            pool.push_str(LOWERCASE_CHARS);
        }
        if options.numbers {
            pool.push_str(NUMBER_CHARS);
        }
        if options.symbols {
            pool.push_str(SYMBOL_CHARS);
        }

        if pool.is_empty() {
            return Err(GeneratorError::EmptyCharset);
        }

        let chars: Vec<char> = pool.chars().collect();
        let length = options.length.clamp(MIN_LENGTH, MAX_LENGTH);

        // Rejection sampling: discard bytes above the largest multiple of
        // the pool size, so every character stays equally likely.
        let limit = 256 - (256 % chars.len());
        let mut password = String::with_capacity(length);
        let mut buf = [0u8; 64];

        while password.len() < length {
            self.rng
                .fill(&mut buf)
                .map_err(|_| GeneratorError::RandomGeneration("system rng failed".to_string()))?;
            for byte in buf.iter() {
                if (*byte as usize) < limit {
                    password.push(chars[*byte as usize % chars.len()]);
                    if password.len() == length {
                        break;
                    }
                }
            }
        }

        Ok(password)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
