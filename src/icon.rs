use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::mask::BoundingBox;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Loads an image from disk and converts it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img =
        image::open(path).with_context(|| format!("Failed to open image: {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Writes `img` as PNG, creating missing parent directories.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    Ok(())
}

pub fn crop(img: &RgbaImage, bbox: &BoundingBox) -> RgbaImage {
    imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image()
}

/// Centres `img` on a square canvas of side `max(w, h)` filled with
/// `background`, compositing with the image's own alpha.
pub fn center_on_square(img: &RgbaImage, background: Rgba<u8>) -> RgbaImage {
    let (w, h) = img.dimensions();
    let side = w.max(h);
    let mut canvas = RgbaImage::from_pixel(side, side, background);
    let x = (side - w) / 2;
    let y = (side - h) / 2;
    imageops::overlay(&mut canvas, img, x as i64, y as i64);
    canvas
}

pub fn resize(img: &RgbaImage, w: u32, h: u32) -> RgbaImage {
    if img.dimensions() == (w, h) {
        return img.clone();
    }
    imageops::resize(img, w, h, FilterType::Lanczos3)
}
