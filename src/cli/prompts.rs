//! Centralized warning, report and prompt messages for CLI output.

use std::io::Write;

use super::quiet;
use crate::pass::StrengthScore;
use crate::terminal::meter_line;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength meter and tips on stderr, suppressed in quiet mode.
pub fn strength_report(score: StrengthScore, tips: &[&str]) {
    if quiet::enabled() {
        return;
    }
    eprintln!("{}", meter_line(score));
    for tip in tips {
        eprintln!("{DIM}  - {tip}{RESET}");
    }
}

/// Advisory message with a zeroed meter. Shown even in quiet mode.
pub fn advisory(msg: &str) {
    error(msg);
    if !quiet::enabled() {
        eprintln!("{}", meter_line(StrengthScore::ZERO));
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Ask whether to print passwords when the clipboard fails. Returns true to
/// print them. Non-interactive and quiet runs print without asking.
pub fn clipboard_fallback_prompt(reason: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprintln!("Clipboard unavailable: {reason}");
    eprint!("Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true;
    }

    eprintln!("Aborted.");
    false
}

pub fn history_cleared() {
    if !quiet::enabled() {
        eprintln!("History cleared.");
    }
}

pub fn history_empty() {
    if !quiet::enabled() {
        eprintln!("(history is empty)");
    }
}
