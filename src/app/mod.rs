//! Application state and command dispatch.
//!
//! Every user action becomes a `Command`. Option changes regenerate right
//! away so the shown password always matches the current options.

mod view;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::clipboard::Clipboard;
use crate::history::{History, HistoryStore};
use crate::pass::{self, CharClass, charset};
use crate::settings::Settings;

pub use view::{CopyOutcome, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetLength(usize),
    Toggle(CharClass),
    SetCustom(String),
    ToggleExcludeSimilar,
    ToggleExcludeAmbiguous,
    ToggleHistory,
    Generate,
    ClearHistory,
    /// Restore default settings.
    Reset,
}

pub struct App<S: HistoryStore> {
    settings: Settings,
    rng: SmallRng,
    history: History<S>,
    view: View,
}

impl<S: HistoryStore> App<S> {
    /// Create the app and generate a first password. The RNG is a
    /// general-purpose generator seeded from the thread RNG.
    pub fn new(settings: Settings, store: S) -> Self {
        Self::with_rng(settings, store, SmallRng::from_rng(&mut rand::rng()))
    }

    pub fn with_rng(settings: Settings, store: S, rng: SmallRng) -> Self {
        let mut app = Self {
            settings,
            rng,
            history: History::open(store),
            view: View::Advisory(pass::GenerationError::EmptyPool),
        };
        app.regenerate();
        app
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn history(&self) -> &History<S> {
        &self.history
    }

    pub fn dispatch(&mut self, command: Command) -> &View {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::SetLength(len) => self.settings.pass_length = len,
            Command::Toggle(class) => self.settings.charset.toggle(class),
            Command::SetCustom(chars) => self.settings.charset.custom = chars,
            Command::ToggleExcludeSimilar => {
                self.settings.charset.exclude_similar = !self.settings.charset.exclude_similar
            }
            Command::ToggleExcludeAmbiguous => {
                self.settings.charset.exclude_ambiguous = !self.settings.charset.exclude_ambiguous
            }
            Command::ToggleHistory => {
                self.settings.history_enabled = !self.settings.history_enabled;
                return &self.view;
            }
            Command::Generate => {}
            Command::ClearHistory => {
                self.history.clear();
                return &self.view;
            }
            Command::Reset => self.settings = Settings::default(),
        }
        self.regenerate();
        &self.view
    }

    /// Copy the shown password. Advisory messages are never copied.
    pub fn copy<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> CopyOutcome {
        let Some(password) = self.view.password() else {
            return CopyOutcome::NothingToCopy;
        };
        match clipboard.set_text(password.as_str()) {
            Ok(()) => CopyOutcome::Copied,
            Err(reason) => {
                tracing::debug!(%reason, "clipboard copy failed");
                CopyOutcome::Unavailable(reason)
            }
        }
    }

    fn regenerate(&mut self) {
        let pool = charset::build(&self.settings.charset);
        tracing::debug!(pool = pool.len(), "pool built");

        self.view = match pass::generate(&pool, self.settings.pass_length, &mut self.rng) {
            Ok(password) => {
                let score = pass::score(password.as_str());
                let tips = pass::security_tips(password.as_str(), score);
                if self.settings.history_enabled {
                    self.history.record(password.as_str());
                }
                View::Password {
                    password,
                    score,
                    tips,
                }
            }
            Err(err) => View::Advisory(err),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::NullStore;
    use crate::pass::{GenerationError, StrengthScore};

    fn app(settings: Settings) -> App<NullStore> {
        App::with_rng(settings, NullStore, SmallRng::seed_from_u64(42))
    }

    #[test]
    fn starts_with_a_password() {
        let app = app(Settings::default());
        let pwd = app.view().password().unwrap();
        assert_eq!(pwd.len(), 12);
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn disabling_every_class_shows_advisory() {
        let mut app = app(Settings::default());
        for class in CharClass::ALL {
            app.dispatch(Command::Toggle(class));
        }
        let view = app.view();
        assert_eq!(view, &View::Advisory(GenerationError::EmptyPool));
        assert_eq!(view.score(), StrengthScore::ZERO);
        assert_eq!(view.text(), "Select at least one character type");
        assert!(view.tips().is_empty());
    }

    #[test]
    fn bad_length_recovers() {
        let mut app = app(Settings::default());
        assert!(app.dispatch(Command::SetLength(200)).is_advisory());
        let view = app.dispatch(Command::SetLength(20));
        assert_eq!(view.password().unwrap().len(), 20);
    }

    #[test]
    fn toggle_history_does_not_regenerate() {
        let mut app = app(Settings::default());
        let before = app.view().clone();
        app.dispatch(Command::ToggleHistory);
        assert!(!app.settings().history_enabled);
        assert_eq!(app.view(), &before);
        app.dispatch(Command::Generate);
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut app = app(Settings::default());
        app.dispatch(Command::SetLength(40));
        app.dispatch(Command::ToggleExcludeSimilar);
        app.dispatch(Command::Reset);
        assert_eq!(app.settings(), &Settings::default());
    }
}
