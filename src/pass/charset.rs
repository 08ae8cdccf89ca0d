//! Character pool building for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Look-alike characters dropped by `exclude_similar`.
pub const SIMILAR: &[char] = &['0', 'O', '1', 'l', 'I'];
/// Bracket characters dropped by `exclude_ambiguous`.
pub const AMBIGUOUS: &[char] = &['{', '}', '[', ']', '(', ')'];

/// A toggleable character class, in canonical pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn chars(self) -> Vec<char> {
        match self {
            CharClass::Uppercase => UPPERCASE.chars().collect(),
            CharClass::Lowercase => LOWERCASE.chars().collect(),
            CharClass::Numbers => DIGITS.to_vec(),
            CharClass::Symbols => SYMBOLS.chars().collect(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase (A-Z)",
            CharClass::Lowercase => "Lowercase (a-z)",
            CharClass::Numbers => "Numbers (0-9)",
            CharClass::Symbols => "Symbols (!@#...)",
        }
    }
}

/// Which characters may appear in a generated password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetConfig {
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub custom: String,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl CharsetConfig {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Uppercase => self.uppercase,
            CharClass::Lowercase => self.lowercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Uppercase => &mut self.uppercase,
            CharClass::Lowercase => &mut self.lowercase,
            CharClass::Numbers => &mut self.numbers,
            CharClass::Symbols => &mut self.symbols,
        };
        *flag = !*flag;
    }
}

impl Default for CharsetConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            custom: String::new(),
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

/// Build the character pool: enabled classes in canonical order, then the
/// custom characters, then one exclusion pass over the whole pool.
///
/// An empty pool is a valid result. Duplicates are kept and weight sampling.
pub fn build(config: &CharsetConfig) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    for class in CharClass::ALL {
        if config.is_enabled(class) {
            chars.extend(class.chars());
        }
    }

    chars.extend(config.custom.chars());

    exclude(&mut chars, config);
    chars
}

/// Number of characters `build` would produce.
pub fn size(config: &CharsetConfig) -> usize {
    build(config).len()
}

fn exclude(chars: &mut Vec<char>, config: &CharsetConfig) {
    if config.exclude_similar {
        chars.retain(|c| !SIMILAR.contains(c));
    }
    if config.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass) -> CharsetConfig {
        CharsetConfig {
            uppercase: class == CharClass::Uppercase,
            lowercase: class == CharClass::Lowercase,
            numbers: class == CharClass::Numbers,
            symbols: class == CharClass::Symbols,
            ..Default::default()
        }
    }

    #[test]
    fn class_sizes() {
        assert_eq!(build(&only(CharClass::Uppercase)).len(), 26);
        assert_eq!(build(&only(CharClass::Lowercase)).len(), 26);
        assert_eq!(build(&only(CharClass::Numbers)).len(), 10);
        assert_eq!(build(&only(CharClass::Symbols)).len(), 32);
    }

    #[test]
    fn canonical_order() {
        let pool = build(&CharsetConfig::default());
        assert_eq!(pool.len(), 94);
        assert_eq!(pool[0], 'A');
        assert_eq!(pool[26], 'a');
        assert_eq!(pool[52], '0');
        assert_eq!(pool[62], '!');
        assert_eq!(*pool.last().unwrap(), '~');
    }

    #[test]
    fn custom_is_appended_with_duplicates() {
        let config = CharsetConfig {
            custom: "aé".to_string(),
            ..only(CharClass::Lowercase)
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 28);
        assert_eq!(&pool[26..], &['a', 'é']);
    }

    #[test]
    fn nothing_enabled_is_empty() {
        let config = CharsetConfig {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            ..Default::default()
        };
        assert!(build(&config).is_empty());
        assert_eq!(size(&config), 0);
    }

    #[test]
    fn exclude_similar_removes_lookalikes() {
        let config = CharsetConfig {
            exclude_similar: true,
            ..Default::default()
        };
        let pool = build(&config);
        assert_eq!(pool.len(), 94 - SIMILAR.len());
        assert!(pool.iter().all(|c| !SIMILAR.contains(c)));
    }

    #[test]
    fn exclude_ambiguous_applies_to_custom_chars() {
        let config = CharsetConfig {
            custom: "()x".to_string(),
            exclude_ambiguous: true,
            ..only(CharClass::Numbers)
        };
        assert_eq!(build(&config), "0123456789x".chars().collect::<Vec<_>>());
    }

    #[test]
    fn everything_excluded_is_empty() {
        let config = CharsetConfig {
            uppercase: false,
            lowercase: false,
            numbers: false,
            symbols: false,
            custom: "0O1lI[]".to_string(),
            exclude_similar: true,
            exclude_ambiguous: true,
        };
        assert!(build(&config).is_empty());
    }

    #[test]
    fn exclusion_is_idempotent() {
        let config = CharsetConfig {
            exclude_similar: true,
            ..Default::default()
        };
        let once = build(&config);
        let mut twice = once.clone();
        exclude(&mut twice, &config);
        assert_eq!(once, twice);
    }

    #[test]
    fn toggle_flips_class() {
        let mut config = CharsetConfig::default();
        config.toggle(CharClass::Symbols);
        assert!(!config.symbols);
        assert!(!config.is_enabled(CharClass::Symbols));
        config.toggle(CharClass::Symbols);
        assert!(config.symbols);
    }
}
