use std::io::BufRead;

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor state shared by the input prompts. `cursor` counts chars.
struct LineEdit {
    chars: Vec<char>,
    cursor: usize,
}

enum Step {
    Continue,
    Submit,
    Cancel,
}

impl LineEdit {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Apply one key. `accept` filters inserted characters.
    fn key(&mut self, code: KeyCode, modifiers: KeyModifiers, accept: fn(char) -> bool) -> Step {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        match code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors, so reset first
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => return Step::Cancel,
            KeyCode::Esc => return Step::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Enter => return Step::Submit,
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Step::Continue
    }
}

fn edit_line(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut line = LineEdit::new(initial);
    let mut drawn_len = line.chars.len();

    // Guard disables raw mode even on early return or panic
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => {
            print!("{}: ", prompt);
            flush();
            return read_plain_line(&mut std::io::stdin().lock(), initial, accept);
        }
    };

    print!("{}: {}", prompt, line.text());
    flush();

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                match line.key(key.code, key.modifiers, accept) {
                    Step::Continue => {}
                    Step::Submit => break Some(line.text()),
                    Step::Cancel => break None,
                }

                print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
                print!("\r{}: {}", prompt, line.text());
                print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor);
                flush();
                drawn_len = line.chars.len();
            }
            Ok(_) => {}
            Err(_) => break None,
        }
    };

    drop(_guard);
    println!();
    outcome
}

/// Line input without raw mode. `None` at end of input; an empty line keeps
/// `initial`.
fn read_plain_line<R: BufRead>(
    reader: &mut R,
    initial: &str,
    accept: fn(char) -> bool,
) -> Option<String> {
    let mut buf = String::new();
    match reader.read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            let text: String = buf
                .trim_end_matches(['\r', '\n'])
                .chars()
                .filter(|&c| accept(c))
                .collect();
            if text.is_empty() {
                Some(initial.to_string())
            } else {
                Some(text)
            }
        }
    }
}

/// Free-text input with cursor movement. `None` on Esc / Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |_| true)
}

/// Digits-only input. `None` on cancel; an empty entry keeps the initial
/// value.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let text = edit_line(prompt, &initial_value.to_string(), |c| c.is_ascii_digit())?;
    if text.is_empty() {
        Some(initial_value)
    } else {
        // Only digits get in; overflow is the one way this fails
        Some(text.parse().unwrap_or(usize::MAX))
    }
}
