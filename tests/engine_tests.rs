//! Integration tests for the generation and scoring engine.
//!
//! - Pool building from class toggles, custom characters and exclusions
//! - Generation bounds and membership
//! - Score worked examples and tips

use genpass::pass::charset::{self, AMBIGUOUS, SIMILAR};
use genpass::pass::{
    CharClass, CharsetConfig, GenerationError, MAX_LENGTH, MIN_LENGTH, generate, score,
    security_tips,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn config(classes: &[CharClass], custom: &str) -> CharsetConfig {
    CharsetConfig {
        uppercase: classes.contains(&CharClass::Uppercase),
        lowercase: classes.contains(&CharClass::Lowercase),
        numbers: classes.contains(&CharClass::Numbers),
        symbols: classes.contains(&CharClass::Symbols),
        custom: custom.to_string(),
        exclude_similar: false,
        exclude_ambiguous: false,
    }
}

// ============================================================================
// Charset Builder
// ============================================================================

#[test]
fn pool_size_is_sum_of_classes_plus_custom() {
    let sizes = [
        (CharClass::Uppercase, 26),
        (CharClass::Lowercase, 26),
        (CharClass::Numbers, 10),
        (CharClass::Symbols, 32),
    ];

    // every non-empty subset of the four classes
    for mask in 1u8..16 {
        let enabled: Vec<CharClass> = sizes
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, (class, _))| *class)
            .collect();
        let expected: usize = sizes
            .iter()
            .filter(|(class, _)| enabled.contains(class))
            .map(|(_, n)| n)
            .sum();

        for custom in ["", "x", "€€€"] {
            let cfg = config(&enabled, custom);
            assert_eq!(
                charset::build(&cfg).len(),
                expected + custom.chars().count(),
                "mask {mask:04b}, custom {custom:?}"
            );
            assert_eq!(charset::size(&cfg), charset::build(&cfg).len());
        }
    }
}

#[test]
fn custom_only_pool() {
    let cfg = config(&[], "xyz");
    assert_eq!(charset::build(&cfg), vec!['x', 'y', 'z']);
}

#[test]
fn both_exclusions_cover_whole_pool() {
    let cfg = CharsetConfig {
        exclude_similar: true,
        exclude_ambiguous: true,
        ..CharsetConfig::default()
    };
    let pool = charset::build(&cfg);
    assert_eq!(pool.len(), 94 - SIMILAR.len() - AMBIGUOUS.len());
    assert!(
        pool.iter()
            .all(|c| !SIMILAR.contains(c) && !AMBIGUOUS.contains(c))
    );
}

// ============================================================================
// Password Synthesizer
// ============================================================================

#[test]
fn every_valid_length_uses_only_pool_chars() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let cfg = CharsetConfig {
        exclude_similar: true,
        ..CharsetConfig::default()
    };
    let pool = charset::build(&cfg);

    for len in MIN_LENGTH..=MAX_LENGTH {
        let pwd = generate(&pool, len, &mut rng).unwrap();
        assert_eq!(pwd.len(), len);
        assert!(pwd.as_str().chars().all(|c| pool.contains(&c)));
    }
}

#[test]
fn out_of_range_lengths() {
    let mut rng = SmallRng::seed_from_u64(1);
    let pool = charset::build(&CharsetConfig::default());
    for len in [0, 1, 3, 129, 1000] {
        assert_eq!(
            generate(&pool, len, &mut rng),
            Err(GenerationError::InvalidLength(len))
        );
    }
}

#[test]
fn empty_pool_for_any_length() {
    let mut rng = SmallRng::seed_from_u64(1);
    let pool = charset::build(&config(&[], ""));
    for len in [0, 4, 12, 128, 129] {
        assert_eq!(generate(&pool, len, &mut rng), Err(GenerationError::EmptyPool));
    }
}

#[test]
fn duplicates_bias_sampling() {
    // 'a' is 9 of 10 pool slots
    let mut rng = SmallRng::seed_from_u64(99);
    let pool: Vec<char> = "aaaaaaaaab".chars().collect();
    let pwd = generate(&pool, 128, &mut rng).unwrap();
    let a = pwd.as_str().chars().filter(|&c| c == 'a').count();
    assert!(a > 90, "expected mostly 'a', got {a}");
}

// ============================================================================
// Scorer
// ============================================================================

#[test]
fn worked_examples() {
    assert_eq!(score("wxyz").value(), 10);
    assert_eq!(score("abcd").value(), 0);
    assert_eq!(score("Abc12345!@#$").value(), 80);
    assert_eq!(score("aaa111").value(), 10);
    assert_eq!(score("Xk9#mP2$vL7!tR4&").value(), 100);
}

#[test]
fn length_bonuses_are_additive() {
    assert_eq!(score("mnbvcxz").value(), 10);
    assert_eq!(score("mnbvcxzl").value(), 25);
    assert_eq!(score("mnbvcxzlkjhg").value(), 40);
    assert_eq!(score("mnbvcxzlkjhgfdsp").value(), 50);
}

#[test]
fn tips_empty_at_or_above_threshold() {
    let mut rng = SmallRng::seed_from_u64(5);
    let pool = charset::build(&CharsetConfig::default());
    for _ in 0..200 {
        let pwd = generate(&pool, 8, &mut rng).unwrap();
        let s = score(pwd.as_str());
        if s.value() >= 50 {
            assert!(security_tips(pwd.as_str(), s).is_empty());
        }
    }
    assert!(security_tips("Hjkmnp47", score("Hjkmnp47")).is_empty());
}

#[test]
fn weak_password_gets_ordered_tips() {
    let tips = security_tips("qwerty", score("qwerty"));
    assert_eq!(tips.len(), 5);
    assert!(tips[0].contains("12 characters"));
    assert!(tips[1].contains("uppercase"));
    assert!(tips[2].contains("numbers"));
    assert!(tips[3].contains("symbols"));
    assert!(tips[4].contains("sequences"));
}
