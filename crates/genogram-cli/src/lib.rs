//! CLI logic for the genogram tool.
//!
//! Reads a dataset, lays it out, and writes the rendered SVG.

pub mod error_adapter;

mod args;
mod config;
mod dataset;

pub use args::Args;

use std::fs;

use log::info;

use genogram::{GenogramBuilder, GenogramError};

/// Run the genogram CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GenogramError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Dataset decoding errors
/// - Layout errors, including an empty dataset
/// - Style errors
pub fn run(args: &Args) -> Result<(), GenogramError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing genogram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let data = dataset::load_dataset(&args.input)?;

    let builder = GenogramBuilder::new(app_config);
    let svg = builder.render_svg(&data)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
