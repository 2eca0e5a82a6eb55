//! CLI command implementations
//!
//! Without an output file the input is analyzed; with one it is dithered.

pub mod command_traits;
pub mod analyze_command;
pub mod dither_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use dither_command::DitherCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::utils::logger::Logger;
use crate::tiff::errors::TiffResult;

/// Builds the command-line interface
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("tiffdither")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decode an uncompressed TIFF and dither it to black and white")
        .arg(
            Arg::new("input")
                .help("Input TIFF file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write the dithered image to this file (analyze only when omitted)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("method")
                .long("method")
                .help("Dithering algorithm")
                .value_name("METHOD")
                .value_parser(["floyd-steinberg", "forward"])
                .default_value("floyd-steinberg"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output encoding: raw samples, PNG or PGM")
                .value_name("FORMAT")
                .value_parser(["raw", "png", "pgm"])
                .default_value("raw"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log records to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("report")
                .long("report")
                .help("Save the command report to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}

/// Factory for creating command instances based on CLI arguments
pub struct TiffDitherCommandFactory;

impl TiffDitherCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TiffDitherCommandFactory
    }
}

impl Default for TiffDitherCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for TiffDitherCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> TiffResult<Box<dyn Command + 'a>> {
        if args.get_one::<String>("output").is_some() {
            Ok(Box::new(DitherCommand::new(args, logger)?))
        } else {
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}
