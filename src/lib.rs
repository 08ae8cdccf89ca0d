//! Password generation with heuristic strength scoring.
//!
//! The core is [`pass`]: build a character pool, draw a password from it,
//! score it. [`app`] wraps the core in command-driven application state;
//! the remaining modules are terminal and storage glue.

pub mod app;
pub mod cli;
pub mod clipboard;
pub mod exits;
pub mod history;
pub mod logging;
pub mod pass;
pub mod paths;
pub mod settings;
pub mod terminal;
pub mod tui;
