//! Command-line argument definitions for the Strata CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`].

use clap::Parser;

/// Command-line arguments for the Strata diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram description (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output TeX file
    #[arg(short, long, default_value = "out.tex")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Write only the picture body, without document preamble
    #[arg(long)]
    pub fragments_only: bool,
}
