//! Integration tests for command dispatch, history and clipboard glue.

use std::cell::RefCell;
use std::rc::Rc;

use genpass::app::{App, Command, CopyOutcome, View};
use genpass::clipboard::Clipboard;
use genpass::history::{HISTORY_LIMIT, History, HistoryStore, JsonFileStore, StoreError};
use genpass::pass::{CharClass, GenerationError, StrengthScore};
use genpass::settings::Settings;
use rand::SeedableRng;
use rand::rngs::SmallRng;

// ============================================================================
// Test doubles
// ============================================================================

#[derive(Default)]
struct Recorded {
    entries: Vec<String>,
    saves: usize,
    clears: usize,
}

/// Store whose state the test can inspect after handing it to the app.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Recorded>>);

impl HistoryStore for SharedStore {
    fn load(&mut self) -> Result<Vec<String>, StoreError> {
        Ok(self.0.borrow().entries.clone())
    }

    fn save(&mut self, entries: &[String]) -> Result<(), StoreError> {
        let mut rec = self.0.borrow_mut();
        rec.entries = entries.to_vec();
        rec.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        let mut rec = self.0.borrow_mut();
        rec.entries.clear();
        rec.clears += 1;
        Ok(())
    }
}

#[derive(Default)]
struct FakeClipboard {
    contents: Option<String>,
    broken: bool,
}

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        if self.broken {
            return Err("no clipboard".to_string());
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

fn app_with(settings: Settings, store: SharedStore) -> App<SharedStore> {
    App::with_rng(settings, store, SmallRng::seed_from_u64(11))
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn every_option_change_regenerates() {
    let store = SharedStore::default();
    let mut app = app_with(Settings::default(), store.clone());

    app.dispatch(Command::SetLength(16));
    app.dispatch(Command::Toggle(CharClass::Symbols));
    app.dispatch(Command::SetCustom("#".to_string()));
    app.dispatch(Command::ToggleExcludeSimilar);
    app.dispatch(Command::ToggleExcludeAmbiguous);

    let pwd = app.view().password().unwrap().as_str().to_string();
    assert_eq!(pwd.chars().count(), 16);
    assert!(
        pwd.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '#')
    );
    assert!(!pwd.contains(['0', 'O', '1', 'l', 'I']));

    // initial password plus five regenerations
    assert_eq!(store.0.borrow().saves, 6);
}

#[test]
fn view_carries_score_and_tips() {
    let mut settings = Settings::default();
    settings.pass_length = 4;
    settings.charset.uppercase = false;
    settings.charset.numbers = false;
    settings.charset.symbols = false;
    let app = app_with(settings, SharedStore::default());

    let view = app.view();
    let pwd = view.password().unwrap().as_str();
    assert_eq!(view.score(), genpass::pass::score(pwd));
    assert!(view.score().value() < 50);
    assert!(!view.tips().is_empty());
}

#[test]
fn errors_replace_the_password_and_zero_the_meter() {
    let store = SharedStore::default();
    let mut app = app_with(Settings::default(), store.clone());

    let view = app.dispatch(Command::SetLength(3)).clone();
    assert_eq!(view, View::Advisory(GenerationError::InvalidLength(3)));
    assert_eq!(view.score(), StrengthScore::ZERO);
    assert_eq!(view.text(), "Password length must be between 4 and 128");

    for class in CharClass::ALL {
        app.dispatch(Command::Toggle(class));
    }
    assert_eq!(app.view(), &View::Advisory(GenerationError::EmptyPool));

    // only the first password reached the store
    assert_eq!(store.0.borrow().saves, 1);

    app.dispatch(Command::Reset);
    assert!(app.view().password().is_some());
}

// ============================================================================
// History
// ============================================================================

#[test]
fn history_is_bounded_and_newest_first() {
    let store = SharedStore::default();
    let mut app = app_with(Settings::default(), store.clone());
    let mut generated = vec![app.view().text()];

    for _ in 0..14 {
        app.dispatch(Command::Generate);
        generated.push(app.view().text());
    }

    let expected: Vec<String> = generated.iter().rev().take(HISTORY_LIMIT).cloned().collect();
    assert_eq!(app.history().entries(), expected.as_slice());
    assert_eq!(store.0.borrow().entries, expected);
}

#[test]
fn history_disabled_records_nothing() {
    let mut settings = Settings::default();
    settings.history_enabled = false;
    let store = SharedStore::default();
    let mut app = app_with(settings, store.clone());
    app.dispatch(Command::Generate);
    assert!(app.history().is_empty());
    assert_eq!(store.0.borrow().saves, 0);
}

#[test]
fn clear_history_command() {
    let store = SharedStore::default();
    let mut app = app_with(Settings::default(), store.clone());
    let before = app.view().clone();

    app.dispatch(Command::ClearHistory);
    assert!(app.history().is_empty());
    assert_eq!(store.0.borrow().clears, 1);
    // clearing does not regenerate
    assert_eq!(app.view(), &before);
}

#[test]
fn history_survives_restart_through_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let first = {
        let mut app = App::with_rng(
            Settings::default(),
            JsonFileStore::new(&path),
            SmallRng::seed_from_u64(3),
        );
        app.dispatch(Command::Generate);
        app.history().entries().to_vec()
    };
    assert_eq!(first.len(), 2);

    let history = History::open(JsonFileStore::new(&path));
    assert_eq!(history.entries(), first.as_slice());
}

// ============================================================================
// Clipboard
// ============================================================================

#[test]
fn copy_puts_current_password_on_clipboard() {
    let app = app_with(Settings::default(), SharedStore::default());
    let mut clipboard = FakeClipboard::default();

    assert_eq!(app.copy(&mut clipboard), CopyOutcome::Copied);
    assert_eq!(
        clipboard.contents.as_deref(),
        Some(app.view().password().unwrap().as_str())
    );
}

#[test]
fn copy_never_copies_advisory_text() {
    let mut app = app_with(Settings::default(), SharedStore::default());
    app.dispatch(Command::SetLength(500));
    let mut clipboard = FakeClipboard::default();

    assert_eq!(app.copy(&mut clipboard), CopyOutcome::NothingToCopy);
    assert!(clipboard.contents.is_none());
}

#[test]
fn copy_failure_reports_fallback() {
    let app = app_with(Settings::default(), SharedStore::default());
    let mut clipboard = FakeClipboard {
        broken: true,
        ..Default::default()
    };
    assert_eq!(
        app.copy(&mut clipboard),
        CopyOutcome::Unavailable("no clipboard".to_string())
    );
}
