//! CLI context - bundles settings and flags for one run.

use super::{CliFlags, ParseError, prompts, quiet};
use crate::app::{App, Command, View};
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::history::{History, HistoryStore, JsonFileStore, NullStore};
use crate::pass::{self, CharClass};
use crate::settings::Settings;
use crate::tui::print_help;

/// Early exit with a process status. Zero is not an error, just done.
#[derive(Debug, PartialEq, Eq)]
pub struct Done(pub i32);

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        Ok(Self {
            settings: Settings::default(),
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        quiet::set(self.flags.quiet);
        self.handle_info_flags()?;
        self.handle_score()?;
        self.load_settings();
        self.apply_flags();
        self.handle_history()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done(0));
        }
        if self.flags.version {
            println!("genpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done(0));
        }
        Ok(())
    }

    fn handle_score(&self) -> Result<(), Done> {
        let Some(password) = self.flags.score.as_deref() else {
            return Ok(());
        };
        let score = pass::score(password);
        if quiet::enabled() {
            println!("{}", score);
        } else {
            println!("{} ({})", score, score.tier().label());
            for tip in pass::security_tips(password, score) {
                println!("  - {}", tip);
            }
        }
        Err(Done(0))
    }

    fn load_settings(&mut self) {
        if self.flags.saved {
            self.settings = Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            });
        }
    }

    /// Apply CLI flags on top of the starting settings.
    pub fn apply_flags(&mut self) {
        let flags = &self.flags;
        let cs = &mut self.settings.charset;

        if let Some(len) = flags.length {
            self.settings.pass_length = len;
        }
        for (off, class) in [
            (flags.no_upper, CharClass::Uppercase),
            (flags.no_lower, CharClass::Lowercase),
            (flags.no_numbers, CharClass::Numbers),
            (flags.no_symbols, CharClass::Symbols),
        ] {
            if off && cs.is_enabled(class) {
                cs.toggle(class);
            }
        }
        if let Some(ref custom) = flags.custom {
            cs.custom = custom.clone();
        }
        cs.exclude_similar |= flags.exclude_similar;
        cs.exclude_ambiguous |= flags.exclude_ambiguous;
        if flags.no_history {
            self.settings.history_enabled = false;
        }
    }

    fn handle_history(&self) -> Result<(), Done> {
        if self.flags.clear_history {
            History::open(JsonFileStore::open_default()).clear();
            prompts::history_cleared();
            return Err(Done(0));
        }
        if self.flags.show_history {
            let history = History::open(JsonFileStore::open_default());
            if history.is_empty() {
                prompts::history_empty();
            }
            for (i, entry) in history.entries().iter().enumerate() {
                println!("{:>2}. {}", i + 1, entry);
            }
            return Err(Done(0));
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&self) -> Result<(), Done> {
        if self.settings.history_enabled {
            self.generate_with(JsonFileStore::open_default())
        } else {
            self.generate_with(NullStore)
        }
    }

    fn generate_with<S: HistoryStore>(&self, store: S) -> Result<(), Done> {
        let count = self.flags.number.unwrap_or(1).max(1);
        let mut app = App::new(self.settings.clone(), store);
        let mut passwords = Vec::new();

        for n in 0..count {
            if n > 0 {
                app.dispatch(Command::Generate);
            }
            match app.view() {
                View::Advisory(err) => {
                    prompts::advisory(&err.to_string());
                    return Err(Done(1));
                }
                View::Password {
                    password,
                    score,
                    tips,
                } => {
                    if self.flags.clipboard {
                        passwords.push(password.to_string());
                    } else {
                        println!("{}", password);
                        prompts::strength_report(*score, tips);
                    }
                }
            }
        }

        if self.flags.clipboard {
            copy_or_print(
                &mut SystemClipboard::new(),
                &passwords,
                prompts::clipboard_fallback_prompt,
            )?;
        }
        Ok(())
    }
}

/// Copy `passwords`, or print them if the clipboard fails and `confirm`
/// agrees.
fn copy_or_print<C, F>(clipboard: &mut C, passwords: &[String], confirm: F) -> Result<(), Done>
where
    C: Clipboard,
    F: FnOnce(&str) -> bool,
{
    match clipboard.set_text(&passwords.join("\n")) {
        Ok(()) => {
            prompts::clipboard_copied(passwords.len());
            Ok(())
        }
        Err(reason) => {
            if !confirm(&reason) {
                return Err(Done(1));
            }
            for password in passwords {
                println!("{}", password);
            }
            Ok(())
        }
    }
}
