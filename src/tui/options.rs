use crate::app::{App, Command, CopyOutcome};
use crate::clipboard::SystemClipboard;
use crate::history::HistoryStore;
use crate::pass::CharClass;
use crate::settings::Settings;
use crate::terminal::{clear, reset_terminal};

use super::{
    enter_prompt, get_editable_input, get_numeric_input, print_copy_fallback, print_help,
    print_history, print_main_menu,
};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// What a menu choice asks for, before any prompting.
#[derive(Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Regenerate,
    Length,
    Toggle(CharClass),
    Custom,
    ExcludeSimilar,
    ExcludeAmbiguous,
    History,
    Copy,
    ShowHistory,
    ClearHistory,
    Save,
    Defaults,
    Help,
    Quit,
    Invalid,
}

pub fn parse_choice(input: &str) -> MenuChoice {
    match input.trim() {
        "" => MenuChoice::Regenerate,
        "1" => MenuChoice::Length,
        "2" => MenuChoice::Toggle(CharClass::Uppercase),
        "3" => MenuChoice::Toggle(CharClass::Lowercase),
        "4" => MenuChoice::Toggle(CharClass::Numbers),
        "5" => MenuChoice::Toggle(CharClass::Symbols),
        "6" => MenuChoice::Custom,
        "7" => MenuChoice::ExcludeSimilar,
        "8" => MenuChoice::ExcludeAmbiguous,
        "9" => MenuChoice::History,
        "c" => MenuChoice::Copy,
        "h" => MenuChoice::ShowHistory,
        "x" => MenuChoice::ClearHistory,
        "s" => MenuChoice::Save,
        "r" => MenuChoice::Defaults,
        "?" | "help" => MenuChoice::Help,
        "q" => MenuChoice::Quit,
        _ => MenuChoice::Invalid,
    }
}

/// Choice for a main prompt result. A cancelled prompt or exhausted input
/// quits.
pub fn menu_choice(input: Option<&str>) -> MenuChoice {
    match input {
        Some(input) => parse_choice(input),
        None => MenuChoice::Quit,
    }
}

pub fn gen_main_menu<S: HistoryStore>(settings: Settings, store: S) {
    reset_terminal();
    clear();

    let mut app = App::new(settings, store);
    let mut clipboard = SystemClipboard::new();
    let mut message: Option<String> = None;

    loop {
        print_main_menu(app.view(), app.settings(), message.as_deref());
        message = None;

        let input = get_editable_input(enter_prompt(), "");

        if let Break = menu_option(
            menu_choice(input.as_deref()),
            &mut app,
            &mut clipboard,
            &mut message,
        ) {
            clear();
            break;
        }
    }
}

fn menu_option<S: HistoryStore>(
    choice: MenuChoice,
    app: &mut App<S>,
    clipboard: &mut SystemClipboard,
    message: &mut Option<String>,
) -> LoopAction {
    match choice {
        MenuChoice::Regenerate => {
            app.dispatch(Command::Generate);
        }
        MenuChoice::Length => {
            if let Some(len) = get_numeric_input("Enter password length", app.settings().pass_length)
            {
                app.dispatch(Command::SetLength(len));
            }
        }
        MenuChoice::Toggle(class) => {
            app.dispatch(Command::Toggle(class));
        }
        MenuChoice::Custom => {
            let current = app.settings().charset.custom.clone();
            if let Some(chars) = get_editable_input("Enter custom characters", &current) {
                app.dispatch(Command::SetCustom(chars));
            }
        }
        MenuChoice::ExcludeSimilar => {
            app.dispatch(Command::ToggleExcludeSimilar);
        }
        MenuChoice::ExcludeAmbiguous => {
            app.dispatch(Command::ToggleExcludeAmbiguous);
        }
        MenuChoice::History => {
            app.dispatch(Command::ToggleHistory);
        }
        MenuChoice::Copy => match app.copy(clipboard) {
            CopyOutcome::Copied => *message = Some("Copied!".to_string()),
            CopyOutcome::NothingToCopy => *message = Some("Nothing to copy".to_string()),
            CopyOutcome::Unavailable(reason) => {
                clear();
                if let Some(password) = app.view().password() {
                    print_copy_fallback(password.as_str(), &reason);
                }
                pause();
            }
        },
        MenuChoice::ShowHistory => {
            print_history(app.history().entries());
            pause();
        }
        MenuChoice::ClearHistory => {
            app.dispatch(Command::ClearHistory);
            *message = Some("History cleared".to_string());
        }
        MenuChoice::Save => {
            *message = Some(match app.settings().save_to_file() {
                Ok(()) => "Settings saved".to_string(),
                Err(e) => format!("Error saving settings: {}", e),
            });
        }
        MenuChoice::Defaults => {
            app.dispatch(Command::Reset);
        }
        MenuChoice::Help => {
            clear();
            print_help();
            pause();
        }
        MenuChoice::Quit => return Break,
        MenuChoice::Invalid => {
            *message = Some("Invalid option.".to_string());
        }
    }
    Continue
}

fn pause() {
    let _ = get_editable_input("Press Enter to return", "");
}
