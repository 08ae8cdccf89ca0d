use super::CliFlags;

/// Most passwords one `-n` run may ask for.
pub const MAX_COUNT: usize = 10_000;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse `args`, skipping the program name in `args[0]`.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "--verbose" => flags.verbose = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-numbers" => flags.no_numbers = true,
            "--no-symbols" => flags.no_symbols = true,
            "--exclude-similar" => flags.exclude_similar = true,
            "--exclude-ambiguous" => flags.exclude_ambiguous = true,
            "--history" => flags.show_history = true,
            "--clear-history" => flags.clear_history = true,
            "--no-history" => flags.no_history = true,
            "-l" | "--length" => {
                let value = value_of(args, &mut i)?;
                flags.length = Some(number(value)?);
            }
            "-n" | "--number" => {
                let value = value_of(args, &mut i)?;
                let count = number(value)?;
                if count > MAX_COUNT {
                    return Err(ParseError::InvalidNumber(value.to_string()));
                }
                flags.number = Some(count);
            }
            "--custom" => flags.custom = Some(value_of(args, &mut i)?.to_string()),
            "--score" => flags.score = Some(value_of(args, &mut i)?.to_string()),
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_of<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number(value: &str) -> Result<usize, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.to_string()))
}
