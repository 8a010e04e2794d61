//! Clears transparency artifacts so no dark frame shows around a cutout.
//!
//! Three rules run per pixel, in order:
//!
//! 1. optional solid-dark background removal (`remove_black_bg`),
//! 2. alpha below `alpha_threshold` becomes fully transparent black,
//! 3. optional dark semi-transparent fringe removal (`black_bleed`).
//!
//! Every rule writes `(0, 0, 0, 0)`, so colour never leaks through a
//! transparent region and a second pass is a no-op.

use std::path::Path;

use anyhow::Result;
use image::{Rgba, RgbaImage};
use serde::Deserialize;

use crate::icon;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Alpha below this becomes fully transparent.
    pub alpha_threshold: u8,
    /// Clear near-black, semi-transparent pixels.
    pub black_bleed: bool,
    /// Channel maximum for a pixel to count as black in the bleed rule.
    pub black_rgb_max: u8,
    /// Clear solid near-black background (login lockup).
    pub remove_black_bg: bool,
    /// Channel maximum for a pixel to count as background.
    pub black_bg_max: u8,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            alpha_threshold: 128,
            black_bleed: true,
            black_rgb_max: 24,
            remove_black_bg: false,
            black_bg_max: 32,
        }
    }
}

fn rgb_at_most(pixel: &Rgba<u8>, max: u8) -> bool {
    pixel[0] <= max && pixel[1] <= max && pixel[2] <= max
}

/// Applies the cleaning rules to a single pixel. Returns `true` if it changed.
pub fn clean_pixel(pixel: &mut Rgba<u8>, opts: &CleanOptions) -> bool {
    let before = *pixel;
    let zero = Rgba([0, 0, 0, 0]);

    if opts.remove_black_bg && rgb_at_most(pixel, opts.black_bg_max) {
        *pixel = zero;
    }

    if pixel[3] < opts.alpha_threshold {
        *pixel = zero;
    }

    if opts.black_bleed {
        let semi = pixel[3] > 0 && pixel[3] < 255;
        if semi && rgb_at_most(pixel, opts.black_rgb_max) {
            *pixel = zero;
        }
    }

    *pixel != before
}

/// Cleans `img` in place and returns the number of pixels that changed.
pub fn clean_image(img: &mut RgbaImage, opts: &CleanOptions) -> usize {
    img.pixels_mut()
        .map(|pixel| clean_pixel(pixel, opts))
        .filter(|changed| *changed)
        .count()
}

/// Cleans the PNG at `path` and overwrites it.
pub fn clean_file(path: &Path, opts: &CleanOptions) -> Result<usize> {
    let mut img = icon::load_rgba(path)?;
    let changed = clean_image(&mut img, opts);
    tracing::debug!(path = %path.display(), changed, "cleaned transparent pixels");
    icon::save_png(&img, path)?;
    Ok(changed)
}
