mod cli;
mod commands;

use clap::Parser;
use cli::CliCommands;
use conprobe::vars;
use conprobe::Engine;
use log::LevelFilter;
use std::process::ExitCode;

/// Exit code on failure, converted into `ExitCode` in main
pub type ExitResult = Result<(), u8>;

/// Log level from the environ, defaults to warnings only
fn log_level() -> LevelFilter {
    std::env::var(vars::ENV_LOG_LEVEL)
        .ok()
        .and_then(|x| x.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn get_engine(args: &cli::Cli) -> Result<Engine, ExitCode> {
    if let Some(chosen) = &args.engine {
        Engine::from_user(chosen).map_err(|err| {
            eprintln!("{}", err);
            ExitCode::FAILURE
        })
    } else if let Some(found) = Engine::find_available_engine() {
        log::debug!("Using engine {} at {:?}", found, found.path);
        Ok(found)
    } else {
        eprintln!("No compatible container engine found in PATH, tried {:?}", vars::KNOWN_ENGINES);
        Err(ExitCode::FAILURE)
    }
}

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // a second logger cannot be set anyways
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log_level())
        .with_colors(true)
        .init();

    match command(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(x) => x,
    }
}

fn command(args: &cli::Cli) -> Result<(), ExitCode> {
    match &args.cmd {
        CliCommands::Available => commands::check_available(get_engine(args)?),
        CliCommands::Exists(x) => commands::container_exists(get_engine(args)?, x.clone()),
        CliCommands::List(x) => commands::print_containers(get_engine(args)?, x.clone()),
    }
    .map_err(ExitCode::from)
}
