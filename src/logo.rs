//! Derives the two logo assets from one source image:
//!
//! - the *mark*, the white rounded-square icon without the dark background or
//!   the text under it, squared on transparency at a fixed size;
//! - the *lockup*, icon plus text with the solid dark background removed,
//!   kept at native resolution. It is meant for light containers, not black
//!   surfaces.

use std::path::Path;

use anyhow::{bail, Result};
use image::RgbaImage;
use serde::Deserialize;

use crate::error::AssetError;
use crate::icon;
use crate::mask::Mask;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogoOptions {
    pub pad: f64,
    /// Minimum channel value for the icon area.
    pub white_threshold: u8,
    /// Maximum channel value for the background to remove.
    pub black_threshold: u8,
    /// Side length of the mark output.
    pub mark_size: u32,
}

impl Default for LogoOptions {
    fn default() -> Self {
        Self {
            pad: 0.02,
            white_threshold: 240,
            black_threshold: 16,
            mark_size: 1024,
        }
    }
}

impl LogoOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.pad) {
            bail!("pad must be between 0 and 1, got {}", self.pad);
        }
        if self.mark_size == 0 {
            bail!("mark_size must be greater than 0");
        }
        Ok(())
    }
}

pub fn make_mark(img: &RgbaImage, opts: &LogoOptions) -> Result<RgbaImage, AssetError> {
    let (w, h) = img.dimensions();
    let white = Mask::from_pixels(img, |p| {
        p[0].min(p[1]).min(p[2]) >= opts.white_threshold
    });
    let region = white
        .bounding_box()
        .ok_or(AssetError::NoMarkRegion)?
        .padded(opts.pad, w, h);

    let cropped = icon::crop(img, &region);
    let square = icon::center_on_square(&cropped, icon::TRANSPARENT);
    Ok(icon::resize(&square, opts.mark_size, opts.mark_size))
}

/// Makes near-black pixels transparent. Dark grey text above the threshold
/// survives.
pub fn remove_black_background(img: &mut RgbaImage, black_threshold: u8) {
    for pixel in img.pixels_mut() {
        let max = pixel[0].max(pixel[1]).max(pixel[2]);
        if pixel[3] > 0 && max <= black_threshold {
            pixel[3] = 0;
        }
    }
}

pub fn make_lockup(img: &RgbaImage, opts: &LogoOptions) -> Result<RgbaImage, AssetError> {
    let (w, h) = img.dimensions();
    let mut stripped = img.clone();
    remove_black_background(&mut stripped, opts.black_threshold);

    let region = Mask::from_pixels(&stripped, |p| p[3] > 0)
        .bounding_box()
        .ok_or(AssetError::NoLockupContent)?
        .padded(opts.pad, w, h);

    Ok(icon::crop(&stripped, &region))
}

/// Reads `src` and writes both derived assets. The mark is produced first;
/// if it fails the lockup is not written.
pub fn process_logo(
    src: &Path,
    out_mark: &Path,
    out_lockup: &Path,
    opts: &LogoOptions,
) -> Result<()> {
    let img = icon::load_rgba(src)?;

    let mark = make_mark(&img, opts)?;
    icon::save_png(&mark, out_mark)?;
    tracing::debug!(path = %out_mark.display(), size = opts.mark_size, "wrote mark");

    let lockup = make_lockup(&img, opts)?;
    icon::save_png(&lockup, out_lockup)?;
    tracing::debug!(
        path = %out_lockup.display(),
        width = lockup.width(),
        height = lockup.height(),
        "wrote lockup"
    );

    Ok(())
}
