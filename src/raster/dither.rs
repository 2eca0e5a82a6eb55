//! Bilevel dithering
//!
//! Floyd-Steinberg error diffusion, plus a one-dimensional forward
//! diffusion variant. Both work in place: the mutated buffer is the output
//! and holds only 0 and 255 afterwards.

use image::GrayImage;
use log::debug;

/// Samples below the threshold become black
pub const THRESHOLD: i32 = 128;

/// Dithering algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DitherMethod {
    /// Two-dimensional Floyd-Steinberg error diffusion
    FloydSteinberg,
    /// Error carried forward to the next sample only
    Forward,
}

impl DitherMethod {
    /// Parses the command-line name of a method
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "floyd-steinberg" => Some(DitherMethod::FloydSteinberg),
            "forward" => Some(DitherMethod::Forward),
            _ => None,
        }
    }

    /// Returns the command-line name of this method
    pub fn name(&self) -> &'static str {
        match self {
            DitherMethod::FloydSteinberg => "floyd-steinberg",
            DitherMethod::Forward => "forward",
        }
    }

    /// Dithers `image` in place with this method
    pub fn apply(&self, image: &mut GrayImage) {
        match self {
            DitherMethod::FloydSteinberg => floyd_steinberg(image),
            DitherMethod::Forward => simple_forward(image),
        }
    }
}

/// Floyd-Steinberg dithering of a greyscale image, in place
pub fn floyd_steinberg(image: &mut GrayImage) {
    let (width, height) = image.dimensions();
    debug!("Applying Floyd-Steinberg dithering to {}x{} image", width, height);
    floyd_steinberg_slice(&mut **image, width as usize, height as usize);
}

/// Floyd-Steinberg dithering of a row-major `width * height` buffer
///
/// Error weights, over 16, go to not-yet-visited neighbours:
/// east 7, south-west 3, south 5, south-east 1. Each share is
/// `(error * weight) >> 4`, an arithmetic shift, so negative shares round
/// toward negative infinity. The neighbour is clamped to [0, 255] after
/// the share is added.
///
/// # Panics
/// If `width * height` overflows or `pixels` holds fewer samples than that.
pub(crate) fn floyd_steinberg_slice(pixels: &mut [u8], width: usize, height: usize) {
    let fits = width
        .checked_mul(height)
        .map_or(false, |needed| needed <= pixels.len());
    assert!(fits, "raster shorter than {}x{}", width, height);

    for y in 0..height {
        for x in 0..width {
            let position = y * width + x;
            let observed = pixels[position] as i32;
            let quantized = quantize(observed);
            let error = observed - quantized;
            pixels[position] = quantized as u8;

            if x + 1 < width {
                diffuse(pixels, position + 1, error, 7);
            }

            if y + 1 == height {
                continue;
            }

            let below = position + width;
            if x > 0 {
                diffuse(pixels, below - 1, error, 3);
            }
            diffuse(pixels, below, error, 5);
            if x + 1 < width {
                diffuse(pixels, below + 1, error, 1);
            }
        }
    }
}

/// Forward error diffusion over the flattened image, in place
///
/// The error of each sample is added to the next one in row-major order,
/// wrapping from the end of a row to the start of the next.
pub fn simple_forward(image: &mut GrayImage) {
    let (width, height) = image.dimensions();
    debug!("Applying forward dithering to {}x{} image", width, height);
    simple_forward_slice(&mut **image);
}

/// Forward error diffusion over a flat buffer, in place
pub fn simple_forward_slice(pixels: &mut [u8]) {
    let mut carried = 0i32;
    for pixel in pixels.iter_mut() {
        let observed = *pixel as i32 + carried;
        let quantized = quantize(observed);
        carried = observed - quantized;
        *pixel = quantized as u8;
    }
}

fn quantize(value: i32) -> i32 {
    if value < THRESHOLD {
        0
    } else {
        255
    }
}

fn diffuse(pixels: &mut [u8], position: usize, error: i32, weight: i32) {
    let value = pixels[position] as i32 + ((error * weight) >> 4);
    pixels[position] = value.clamp(0, 255) as u8;
}
