use std::process::ExitCode;

use log::LevelFilter;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod report;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let quiet = match &cli.command {
        cli::Command::Bonds(args) => args.io.quiet,
        cli::Command::Elements(args) => args.io.quiet,
    };
    init_logging(cli.verbose, quiet);

    let ctx = display::Context::detect().with_quiet(quiet);

    if ctx.interactive {
        display::print_banner();
    }

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
