//! Password generation settings.

mod file;

use crate::pass::CharsetConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub charset: CharsetConfig,
    pub history_enabled: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &crate::paths::settings_file())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &crate::paths::settings_file())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            charset: CharsetConfig::default(),
            history_enabled: true,
        }
    }
}
