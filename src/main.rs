use colored::Colorize;
use flakegen::{cli, FlakeError};
use log::{debug, LevelFilter};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match cli::parse_from(std::env::args_os()) {
        Ok(args) => args,
        Err(FlakeError::Clap(err)) => err.exit(),
        Err(err) => return report(&err),
    };

    init_logging(args.verbose);
    debug!("Starting flakegen v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    match cli::run(&args, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn report(err: &FlakeError) -> ExitCode {
    match err {
        // clap already formats these with its own prefix and usage
        FlakeError::FlagParse(message) => eprint!("{}", message),
        FlakeError::Usage { .. } => eprintln!("{}", err),
        _ => eprintln!("{} {}", "error:".red().bold(), err),
    }
    ExitCode::FAILURE
}
