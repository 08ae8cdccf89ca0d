//! Settings file persistence.
//!
//! One line of comma-separated fields. Inside the custom character field,
//! `,` and `|` are escaped with a leading `|`, and line breaks are written as
//! `|n` / `|r` so the record stays on one line.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::Settings;

const FIELDS: usize = 9;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(encode(settings).as_bytes())?;
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !decode(line.trim_end_matches(['\r', '\n']), settings) {
        tracing::warn!(path = %path.display(), "settings file malformed, rewriting defaults");
        *settings = Settings::default();
        save(settings, path)?;
    }

    Ok(())
}

fn encode(settings: &Settings) -> String {
    let custom = settings
        .charset
        .custom
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            '\n' => "|n".to_string(),
            '\r' => "|r".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>();

    let cs = &settings.charset;
    format!(
        "{},{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        cs.uppercase,
        cs.lowercase,
        cs.numbers,
        cs.symbols,
        cs.exclude_similar,
        cs.exclude_ambiguous,
        settings.history_enabled,
        custom
    )
}

/// Apply a settings line. Fields that fail to parse keep their current
/// value. Returns false when the field count is wrong.
fn decode(line: &str, settings: &mut Settings) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return false;
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);

    let cs = &mut settings.charset;
    cs.uppercase = parts[1].parse().unwrap_or(cs.uppercase);
    cs.lowercase = parts[2].parse().unwrap_or(cs.lowercase);
    cs.numbers = parts[3].parse().unwrap_or(cs.numbers);
    cs.symbols = parts[4].parse().unwrap_or(cs.symbols);
    cs.exclude_similar = parts[5].parse().unwrap_or(cs.exclude_similar);
    cs.exclude_ambiguous = parts[6].parse().unwrap_or(cs.exclude_ambiguous);
    settings.history_enabled = parts[7].parse().unwrap_or(settings.history_enabled);
    cs.custom = parts[8].clone();

    true
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(match c {
                'n' => '\n',
                'r' => '\r',
                _ => c,
            });
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}
