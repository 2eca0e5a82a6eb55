//! Pixel data stages
//!
//! Loading the strip, reducing it to greyscale and dithering it to a
//! bilevel raster.

pub mod dither;
pub mod greyscale;
pub mod loader;

pub use dither::{floyd_steinberg, simple_forward, DitherMethod};
pub use greyscale::rms_luminance;
pub use loader::Raster;
