use crate::app::View;
use crate::pass::charset::{AMBIGUOUS, SIMILAR};
use crate::pass::{CharClass, MAX_LENGTH, MIN_LENGTH};
use crate::settings::Settings;
use crate::terminal::{
    BOLD, BOX_WIDTH, DIM, RED, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt,
    box_top, clear, flush, print_error, print_meter, print_rule, wrap,
};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to regenerate)"
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn spaced(chars: &[char]) -> String {
    chars
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_help() {
    box_top("Genpass");
    box_line_center("Password generator with strength scoring");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: run without arguments for the menu.");
    box_line("  2) Client: pass flags (e.g. -l 20 -n 5) to print");
    box_line("     passwords and exit.");
    box_line("");
    box_line("USAGE:");
    box_line("  genpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password, 4 to 128 (default: 12)");
    box_opt("  -n, --number <N>", "How many to generate (1-10000, default: 1)");
    box_opt("      --no-upper", "Leave out A-Z");
    box_opt("      --no-lower", "Leave out a-z");
    box_opt("      --no-numbers", "Leave out 0-9");
    box_opt("      --no-symbols", "Leave out punctuation");
    box_opt("      --custom <CHARS>", "Extra characters to add to the pool");
    box_opt("      --exclude-similar", "Drop 0 O 1 l I");
    box_opt("      --exclude-ambiguous", "Drop { } [ ] ( )");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print passwords only, no strength report");
    box_opt("      --score <PASSWORD>", "Score a password and show tips");
    box_line("");
    box_line(" History:");
    box_opt("      --history", "Show the last 10 generated passwords");
    box_opt("      --clear-history", "Forget all remembered passwords");
    box_opt("      --no-history", "Do not remember passwords from this run");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings instead of defaults");
    box_opt("      --verbose", "Debug logging to stderr");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("NOTE:");
    box_line("  Uses a fast general-purpose RNG, not a cryptographic one.");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  genpass -l 16               One 16-character password");
    box_line("  genpass -l 20 -n 3          Three passwords");
    box_line("  genpass --no-symbols -b     Alphanumeric, to clipboard");
    box_line("  genpass --score 'hunter2'   Rate an existing password");
    box_line("");
    box_bottom();
    println!();
}

/// The generator screen: password, meter, tips and the option list.
pub fn print_main_menu(view: &View, settings: &Settings, error: Option<&str>) {
    clear();
    box_top("Password");
    match view {
        View::Password { password, .. } => {
            for chunk in password.as_str().chars().collect::<Vec<_>>().chunks(BOX_WIDTH - 4) {
                box_line(&format!("{BOLD}{}{RESET}", chunk.iter().collect::<String>()));
            }
        }
        View::Advisory(err) => box_line(&format!("{RED}{err}{RESET}")),
    }
    print_meter(view.score());
    for tip in view.tips() {
        for (i, line) in wrap(tip, BOX_WIDTH - 8).iter().enumerate() {
            let bullet = if i == 0 { "-" } else { " " };
            box_line(&format!("{DIM}  {bullet} {line}{RESET}"));
        }
    }
    print_rule();

    let cs = &settings.charset;
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!(
        "  1) Length ({MIN_LENGTH}-{MAX_LENGTH}): {}",
        settings.pass_length
    ));
    for (n, class) in CharClass::ALL.iter().enumerate() {
        box_line(&format!(
            "  {}) {}: {}",
            n + 2,
            class.label(),
            on_off(cs.is_enabled(*class))
        ));
    }
    box_line(&format!("  6) Custom characters: {}", cs.custom));
    box_line(&format!(
        "  7) Exclude similar ({}): {}",
        spaced(SIMILAR),
        on_off(cs.exclude_similar)
    ));
    box_line(&format!(
        "  8) Exclude ambiguous ({}): {}",
        spaced(AMBIGUOUS),
        on_off(cs.exclude_ambiguous)
    ));
    box_line(&format!(
        "  9) Remember history: {}",
        on_off(settings.history_enabled)
    ));
    print_rule();
    box_line("  c) copy  |  h) history  |  x) clear history  |  ?) help");
    box_line("  s) save settings  |  r) load defaults  |  q) quit");
    box_bottom();

    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_history(entries: &[String]) {
    clear();
    box_top("History");
    if entries.is_empty() {
        box_line_center("(empty)");
    }
    for (i, entry) in entries.iter().enumerate() {
        box_line(&format!("{:>2}. {}", i + 1, entry));
    }
    box_bottom();
    println!();
}

/// Shown when the clipboard refuses; the user copies by hand.
pub fn print_copy_fallback(password: &str, reason: &str) {
    print_error(&format!("Clipboard unavailable: {reason}"));
    box_top("Copy manually");
    box_line(password);
    box_bottom();
}
