//! Auto-crops whitespace around an app icon and re-squares it at the
//! original size, which launcher icon generators expect to stay constant.

use std::path::Path;

use anyhow::{bail, Result};
use image::{Rgba, RgbaImage};
use serde::Deserialize;

use crate::error::AssetError;
use crate::icon;
use crate::mask::{BoundingBox, Mask};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Padding around the detected content, as a share of its larger side.
    pub pad: f64,
    /// White-difference threshold; higher crops more aggressively.
    pub threshold: u8,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            pad: 0.025,
            threshold: 12,
        }
    }
}

impl CropOptions {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.pad) {
            bail!("pad must be between 0 and 1, got {}", self.pad);
        }
        Ok(())
    }
}

/// Luma of the pixel's difference from pure white, in 16.16 fixed point
/// (ITU-R 601-2 weights). Alpha is ignored.
pub fn white_difference(pixel: &Rgba<u8>) -> u8 {
    let dr = 255 - pixel[0] as u32;
    let dg = 255 - pixel[1] as u32;
    let db = 255 - pixel[2] as u32;
    ((dr * 19595 + dg * 38470 + db * 7471 + 0x8000) >> 16) as u8
}

/// Bounding box of everything that differs from white by more than `threshold`.
pub fn content_box(img: &RgbaImage, threshold: u8) -> Option<BoundingBox> {
    Mask::from_pixels(img, |p| white_difference(p) > threshold).bounding_box()
}

/// The padded and clamped region that will be cropped out of `img`.
pub fn crop_region(img: &RgbaImage, opts: &CropOptions) -> Result<BoundingBox, AssetError> {
    let (w, h) = img.dimensions();
    let content = content_box(img, opts.threshold).ok_or(AssetError::NoContent)?;
    Ok(content.padded(opts.pad, w, h))
}

/// Crops to content, centres on a white square and resizes back to the
/// input's dimensions.
pub fn crop_and_square(img: &RgbaImage, opts: &CropOptions) -> Result<RgbaImage, AssetError> {
    let (w, h) = img.dimensions();
    let region = crop_region(img, opts)?;
    let cropped = icon::crop(img, &region);
    let square = icon::center_on_square(&cropped, icon::WHITE);
    Ok(icon::resize(&square, w, h))
}

/// Crops the icon at `path` in place.
pub fn crop_icon_file(path: &Path, opts: &CropOptions) -> Result<()> {
    let img = icon::load_rgba(path)?;
    let out = crop_and_square(&img, opts)?;
    tracing::debug!(path = %path.display(), "cropped icon");
    icon::save_png(&out, path)
}
