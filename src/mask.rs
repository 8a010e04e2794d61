//! Per-pixel boolean masks and the bounding boxes derived from them.

use bit_vec::BitVec;
use image::{Rgba, RgbaImage};

/// A `w × h` grid of flags, one per pixel.
pub struct Mask {
    size: (u32, u32),
    data: BitVec,
}

impl Mask {
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            size: (w, h),
            data: BitVec::from_elem((w as usize) * (h as usize), false),
        }
    }

    /// Builds a mask by evaluating `predicate` on every pixel of `img`.
    pub fn from_pixels<F>(img: &RgbaImage, mut predicate: F) -> Self
    where
        F: FnMut(&Rgba<u8>) -> bool,
    {
        let (w, h) = img.dimensions();
        let mut mask = Self::new(w, h);
        for (x, y, pixel) in img.enumerate_pixels() {
            if predicate(pixel) {
                mask.set(x, y);
            }
        }
        mask
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.data.get(self.index(x, y)).unwrap_or(false)
    }

    pub fn set(&mut self, x: u32, y: u32) {
        let index = self.index(x, y);
        self.data.set(index, true);
    }

    /// Smallest box containing every set pixel, or `None` for an empty mask.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let (w, h) = self.size;
        let mut bbox: Option<BoundingBox> = None;

        for y in 0..h {
            for x in 0..w {
                if !self.get(x, y) {
                    continue;
                }
                bbox = Some(match bbox {
                    None => BoundingBox {
                        left: x,
                        top: y,
                        right: x + 1,
                        bottom: y + 1,
                    },
                    Some(b) => BoundingBox {
                        left: b.left.min(x),
                        top: b.top.min(y),
                        right: b.right.max(x + 1),
                        bottom: b.bottom.max(y + 1),
                    },
                });
            }
        }

        bbox
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (x as usize) + (y as usize) * (self.size.0 as usize)
    }
}

/// Pixel rectangle; `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Grows the box by `pad_ratio` of its larger side on every edge, clamped
    /// to a `w × h` image.
    pub fn padded(&self, pad_ratio: f64, w: u32, h: u32) -> BoundingBox {
        let longest = self.width().max(self.height()) as f64;
        let pad = (longest * pad_ratio).round_ties_even().max(0.0) as u32;

        BoundingBox {
            left: self.left.saturating_sub(pad),
            top: self.top.saturating_sub(pad),
            right: self.right.saturating_add(pad).min(w),
            bottom: self.bottom.saturating_add(pad).min(h),
        }
    }

    pub fn contains(&self, other: &BoundingBox) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}
