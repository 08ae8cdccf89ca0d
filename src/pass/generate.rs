//! Password generation.
//!
//! Sampling uses whatever `Rng` the caller hands in. The application passes a
//! `SmallRng`, a fast general-purpose generator that is *not* suitable for
//! secrets that must resist a motivated attacker.

use std::fmt;

use rand::Rng;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    EmptyPool,
    InvalidLength(usize),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::EmptyPool => write!(f, "Select at least one character type"),
            GenerationError::InvalidLength(_) => write!(
                f,
                "Password length must be between {} and {}",
                MIN_LENGTH, MAX_LENGTH
            ),
        }
    }
}

impl std::error::Error for GenerationError {}

/// A generated password. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Draw `length` characters uniformly, with replacement, from `pool`.
pub fn generate<R: Rng>(
    pool: &[char],
    length: usize,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerationError> {
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GenerationError::InvalidLength(length));
    }

    let password: String = (0..length)
        .map(|_| pool[rng.random_range(0..pool.len())])
        .collect();

    tracing::debug!(length, pool = pool.len(), "generated password");
    Ok(GeneratedPassword(password))
}
