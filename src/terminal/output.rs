//! Terminal output utilities.
//!
//! Box drawing, the strength meter, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use crate::pass::{StrengthScore, StrengthTier};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any lingering style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// ┌─ Title ──────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// │ content          │
pub fn box_line(content: &str) {
    println!("{}", boxed(content));
}

/// │     content      │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// └──────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 26;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap(desc, desc_col);

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

fn boxed(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);
    let padding = inner_width.saturating_sub(display_len);
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// Greedy word wrap.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.chars().count() + 1 + word.chars().count() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Meter bar whose filled width is the score as a percentage of `width`.
pub fn meter_bar(score: StrengthScore, width: usize) -> String {
    let tier = StrengthTier::from_score(score);
    let filled = (score.value() as usize * width) / 100;
    format!(
        "{}{}{}{}{}",
        tier.color(),
        "█".repeat(filled),
        DIM,
        "░".repeat(width - filled),
        RESET
    )
}

/// Meter line with label: `████░░░░ 72% Strong`.
pub fn meter_line(score: StrengthScore) -> String {
    let tier = StrengthTier::from_score(score);
    format!(
        "{} {:>3}% {}{}{}",
        meter_bar(score, 30),
        score.value(),
        tier.color(),
        tier.label(),
        RESET
    )
}

/// Boxed strength meter.
pub fn print_meter(score: StrengthScore) {
    box_line(&format!("Strength: {}", meter_line(score)));
}
