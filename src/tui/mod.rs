//! Interactive TUI menu.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::cli::{prompts, quiet};
use crate::history::JsonFileStore;
use crate::settings::Settings;

/// Run TUI interactive mode from saved settings. Returns the process exit
/// status.
pub fn run() -> i32 {
    crate::logging::init(false);

    if !quiet::is_interactive() {
        prompts::error("Interactive mode needs a terminal. Try 'genpass --help'");
        return 1;
    }

    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        prompts::warn(&format!("Error loading settings: {}", e));
        Settings::default()
    });

    // History can be switched on mid-session
    gen_main_menu(settings, JsonFileStore::open_default());
    0
}
