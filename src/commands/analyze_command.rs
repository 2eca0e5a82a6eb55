//! TIFF structure analysis command
//!
//! Prints the header, the directory table and the image descriptor.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::tiff::errors::{TiffResult, TiffError};
use crate::tiff::TiffReader;
use crate::tiff::types::TIFF;
use crate::utils::logger::Logger;

/// Command for analyzing TIFF file structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to print the full directory table
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> TiffResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| TiffError::GenericError("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            logger,
        })
    }

    /// Builds the report printed for `tiff`
    pub fn report(&self, tiff: &TIFF) -> String {
        let mut report = format!("Image name:.................{}\n", self.input_file);
        report.push_str(&format!("Byte order:.................{}\n", tiff.header.byte_order.name()));
        report.push_str(&format!("{}\n", tiff.descriptor));

        if self.verbose {
            report.push_str(&tiff.ifd.to_string());
        } else {
            debug!("Directory table omitted, pass --verbose to include it");
        }

        report
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> TiffResult<()> {
        info!("Analyzing file {}", self.input_file);

        let mut reader = TiffReader::new();
        let tiff = reader.load(&self.input_file)?;

        let report = self.report(&tiff);
        println!("{}", report);
        self.logger.log(&report)?;

        Ok(())
    }
}
