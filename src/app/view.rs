//! What the presentation layer shows after each command.

use crate::pass::{GeneratedPassword, GenerationError, StrengthScore, StrengthTier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Password {
        password: GeneratedPassword,
        score: StrengthScore,
        tips: Vec<&'static str>,
    },
    /// Generation was refused; the message replaces the password and the
    /// meter reads zero.
    Advisory(GenerationError),
}

impl View {
    pub fn password(&self) -> Option<&GeneratedPassword> {
        match self {
            View::Password { password, .. } => Some(password),
            View::Advisory(_) => None,
        }
    }

    pub fn score(&self) -> StrengthScore {
        match self {
            View::Password { score, .. } => *score,
            View::Advisory(_) => StrengthScore::ZERO,
        }
    }

    pub fn tier(&self) -> StrengthTier {
        self.score().tier()
    }

    pub fn tips(&self) -> &[&'static str] {
        match self {
            View::Password { tips, .. } => tips,
            View::Advisory(_) => &[],
        }
    }

    /// Text for the password field.
    pub fn text(&self) -> String {
        match self {
            View::Password { password, .. } => password.to_string(),
            View::Advisory(err) => err.to_string(),
        }
    }

    pub fn is_advisory(&self) -> bool {
        matches!(self, View::Advisory(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Clipboard refused; show the password for manual copying instead.
    Unavailable(String),
    /// Only an advisory message is showing.
    NothingToCopy,
}
