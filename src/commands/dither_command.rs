//! Bilevel conversion command
//!
//! Decodes the input, dithers it and writes the result.

use std::path::Path;

use clap::ArgMatches;
use log::info;

use crate::api;
use crate::commands::command_traits::Command;
use crate::raster::DitherMethod;
use crate::tiff::errors::{TiffResult, TiffError};
use crate::utils::logger::Logger;
use crate::utils::write_utils::OutputFormat;

/// Command for converting a TIFF to a bilevel raster
pub struct DitherCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Dithering algorithm
    method: DitherMethod,
    /// Output encoding
    format: OutputFormat,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DitherCommand<'a> {
    /// Create a new dither command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TiffResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| TiffError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| TiffError::GenericError("Missing output file path".to_string()))?
            .clone();

        let method = match args.get_one::<String>("method") {
            Some(name) => DitherMethod::from_name(name)
                .ok_or_else(|| TiffError::GenericError(format!("Unknown dithering method: {}", name)))?,
            None => DitherMethod::FloydSteinberg,
        };

        let format = match args.get_one::<String>("format") {
            Some(name) => OutputFormat::from_name(name)?,
            None => OutputFormat::Raw,
        };

        Ok(DitherCommand {
            input_file,
            output_file,
            method,
            format,
            logger,
        })
    }
}

impl<'a> Command for DitherCommand<'a> {
    fn execute(&self) -> TiffResult<()> {
        info!("Dithering {} to {} using {}", self.input_file, self.output_file, self.method.name());

        let image = api::convert_file(
            Path::new(&self.input_file),
            Path::new(&self.output_file),
            self.method,
            self.format,
        )?;

        let summary = format!("Wrote {}x{} bilevel image to {}",
                              image.width(), image.height(), self.output_file);
        info!("{}", summary);
        self.logger.log(&summary)?;

        Ok(())
    }
}
