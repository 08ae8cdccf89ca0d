//! Heuristic strength scoring and improvement tips.
//!
//! The score is a rule-of-thumb estimate in 0..=100, not an entropy
//! measurement.

use std::fmt;

/// Substrings that mark a sequential or keyboard-walk pattern. Matched
/// against the lowercased password.
const SEQUENCES: &[&str] = &["123", "abc", "qwe"];

const TIP_LENGTH: &str = "Use at least 12 characters";
const TIP_LOWERCASE: &str = "Add lowercase letters";
const TIP_UPPERCASE: &str = "Add uppercase letters";
const TIP_DIGIT: &str = "Add numbers";
const TIP_SYMBOL: &str = "Add symbols";
const TIP_REPEAT: &str = "Avoid repeating the same character 3 or more times in a row";
const TIP_SEQUENCE: &str = "Avoid sequences like \"123\", \"abc\" or \"qwe\"";

/// Tips are only offered below this score.
pub const TIPS_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrengthScore(u8);

impl StrengthScore {
    pub const ZERO: StrengthScore = StrengthScore(0);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn tier(self) -> StrengthTier {
        StrengthTier::from_score(self)
    }
}

impl fmt::Display for StrengthScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    pub fn from_score(score: StrengthScore) -> Self {
        match score.value() {
            0..=29 => StrengthTier::Weak,
            30..=59 => StrengthTier::Medium,
            60..=79 => StrengthTier::Strong,
            _ => StrengthTier::VeryStrong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Strong => "Strong",
            StrengthTier::VeryStrong => "Very Strong",
        }
    }

    /// ANSI foreground color: red, yellow, green, blue.
    pub fn color(self) -> &'static str {
        match self {
            StrengthTier::Weak => "\x1b[38;5;9m",
            StrengthTier::Medium => "\x1b[38;5;11m",
            StrengthTier::Strong => "\x1b[38;5;10m",
            StrengthTier::VeryStrong => "\x1b[38;5;12m",
        }
    }
}

/// What a password contains, shared by scoring and tips.
struct Traits {
    length: usize,
    lowercase: bool,
    uppercase: bool,
    digit: bool,
    symbol: bool,
    repeated_run: bool,
    sequence: bool,
}

impl Traits {
    fn of(password: &str) -> Self {
        let chars: Vec<char> = password.chars().collect();
        let lowered = password.to_lowercase();

        Self {
            length: chars.len(),
            lowercase: chars.iter().any(|c| c.is_ascii_lowercase()),
            uppercase: chars.iter().any(|c| c.is_ascii_uppercase()),
            digit: chars.iter().any(|c| c.is_ascii_digit()),
            symbol: chars.iter().any(|c| !c.is_ascii_alphanumeric()),
            repeated_run: chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]),
            sequence: SEQUENCES.iter().any(|s| lowered.contains(s)),
        }
    }

    fn class_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.digit, self.symbol]
            .iter()
            .filter(|&&present| present)
            .count()
    }
}

/// Score a password.
pub fn score(password: &str) -> StrengthScore {
    let t = Traits::of(password);
    let mut score: i32 = 0;

    if t.length >= 8 {
        score += 15;
    }
    if t.length >= 12 {
        score += 15;
    }
    if t.length >= 16 {
        score += 10;
    }

    if t.lowercase {
        score += 10;
    }
    if t.uppercase {
        score += 10;
    }
    if t.digit {
        score += 10;
    }
    if t.symbol {
        score += 15;
    }

    let classes = t.class_count();
    if classes >= 3 {
        score += 10;
    }
    if classes == 4 {
        score += 5;
    }

    if t.repeated_run {
        score -= 10;
    }
    if t.sequence {
        score -= 10;
    }

    StrengthScore(score.clamp(0, 100) as u8)
}

/// Tips for each unmet criterion, in scoring order. Empty at or above
/// `TIPS_THRESHOLD`.
pub fn security_tips(password: &str, score: StrengthScore) -> Vec<&'static str> {
    if score.value() >= TIPS_THRESHOLD {
        return Vec::new();
    }

    let t = Traits::of(password);
    let checks = [
        (t.length < 12, TIP_LENGTH),
        (!t.lowercase, TIP_LOWERCASE),
        (!t.uppercase, TIP_UPPERCASE),
        (!t.digit, TIP_DIGIT),
        (!t.symbol, TIP_SYMBOL),
        (t.repeated_run, TIP_REPEAT),
        (t.sequence, TIP_SEQUENCE),
    ];

    checks
        .into_iter()
        .filter_map(|(unmet, tip)| unmet.then_some(tip))
        .collect()
}
