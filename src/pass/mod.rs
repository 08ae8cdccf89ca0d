//! Password generation and scoring.

pub mod charset;
mod generate;
pub mod strength;

pub use charset::{CharClass, CharsetConfig};
pub use generate::{GeneratedPassword, GenerationError, MAX_LENGTH, MIN_LENGTH, generate};
pub use strength::{StrengthScore, StrengthTier, score, security_tips};
