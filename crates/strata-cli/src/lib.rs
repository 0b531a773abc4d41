//! CLI logic for the Strata diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use strata::{DiagramBuilder, StrataError};

/// Run the Strata CLI application
///
/// Reads the diagram description, renders it and writes the markup to the
/// output file.
///
/// # Errors
///
/// Returns `StrataError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), StrataError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let tex = if args.fragments_only {
        builder.render_fragments(&diagram)
    } else {
        builder.render(&diagram)?
    };

    fs::write(&args.output, tex)?;

    info!(output_file = args.output; "Markup exported successfully");

    Ok(())
}
