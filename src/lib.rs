pub mod io;
pub mod tiff;
pub mod raster;
pub mod utils;
pub mod commands;
pub mod api;

pub use tiff::{TiffReader, TiffError, TiffResult, TIFF};
pub use raster::{DitherMethod, Raster};
