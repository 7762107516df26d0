mod commands;
mod config;
mod entry;
mod error;
mod formatter;
mod lister;
mod listing;
mod sorter;
mod utils;

use commands::args::Args;
use commands::command_handler::handle_command;
use config::Config;
use error::{LslError, Result};
use log::Level;
use std::process::ExitCode;
use utils::logging;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::load_from(args.config_path.as_deref())?;

    if let Err(err) = logging::init(log_level(&args, &config)) {
        eprintln!("failed to install logger: {}", err);
    }
    sorter::init_locale();

    handle_command(&args, &config)
}

fn log_level(args: &Args, config: &Config) -> Level {
    if args.verbose {
        return Level::Debug;
    }

    config
        .log_level
        .as_deref()
        .and_then(logging::parse_level)
        .or_else(logging::level_from_env)
        .unwrap_or(Level::Warn)
}

fn print_error(error: &LslError) {
    use colored::Colorize;

    let error_type = match error {
        LslError::Io(_) => "IO Error",
        LslError::Config(_) => "Config Error",
    };

    eprintln!("{} {}", "✗".bright_red(), error_type.bright_red().bold());

    for line in error.to_string().lines() {
        eprintln!("  {}", line);
    }
}
