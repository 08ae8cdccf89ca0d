#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub show_history: bool,
    pub clear_history: bool,
    pub no_history: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub custom: Option<String>,
    pub score: Option<String>,
}

impl CliFlags {
    /// True when the run should generate passwords, as opposed to only
    /// printing info, scoring, or managing history.
    pub fn generates(&self) -> bool {
        !(self.help
            || self.version
            || self.score.is_some()
            || self.show_history
            || self.clear_history)
    }
}
