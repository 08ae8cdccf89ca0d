//! Flag-driven one-shot mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{MAX_COUNT, ParseError, parse};

/// Run with command-line arguments. Returns the process exit status.
pub fn run(args: Vec<String>) -> i32 {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Try 'genpass --help'");
            return 2;
        }
    };

    crate::logging::init(ctx.flags.verbose);

    match ctx.run() {
        Ok(()) => 0,
        Err(Done(code)) => code,
    }
}
