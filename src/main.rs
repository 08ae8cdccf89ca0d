use std::env;

use genpass::{cli, exits, tui};

fn main() {
    exits::reset_terminal();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    let code = match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    };
    std::process::exit(code);
}
