//! Strata CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use strata::StrataError;
use strata_cli::{Args, error_adapter::ErrorAdapter};

fn main() {
    // Pretty panic reports before anything else can panic
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    debug!(args:?; "Parsed arguments");

    if let Err(err) = strata_cli::run(&args) {
        report(&err);
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Install `env_logger` at `level`, falling back to `warn` for unknown names.
fn init_logger(level: &str) {
    let log_level = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Strata");
}

/// Log `err` as a miette report, with the offending TOML span when known.
fn report(err: &StrataError) {
    let reporter = miette::GraphicalReportHandler::new();
    let mut writer = String::new();

    match reporter.render_report(&mut writer, &ErrorAdapter(err)) {
        Ok(()) => error!("{writer}"),
        // Plain message if the graphical handler fails
        Err(_) => error!("{err}"),
    }
}
