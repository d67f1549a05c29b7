//! Image descriptor generation and pixel-buffer reads.
//!
//! The descriptors are synthetic; the interesting part is the contract:
//! descriptors handed to a predicate are transient, and pixel reads never
//! compute an index from an untrusted stride.

use crate::types::ImageData;

/// Stateless image-inspection service
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageProcessor;

impl ImageProcessor {
    /// Create an image processor
    pub fn new() -> Self {
        Self
    }

    /// Produce `count` synthetic image descriptors
    ///
    /// Image `i` is `{ 320 + i*64, 240 + i*48, 3 }`. `count <= 0` yields an
    /// empty vector.
    pub fn generate_images(&self, count: i32) -> Vec<ImageData> {
        if count <= 0 {
            return Vec::new();
        }
        (0..count)
            .map(|i| ImageData {
                width: 320 + i * 64,
                height: 240 + i * 48,
                channels: 3,
            })
            .collect()
    }

    /// Count generated descriptors for which `predicate` holds
    ///
    /// The predicate sees each descriptor once, in generation order, and
    /// must not retain it beyond the call.
    pub fn count_images_where<F>(&self, count: i32, mut predicate: F) -> i32
    where
        F: FnMut(&ImageData) -> bool,
    {
        let mut matched = 0;
        for image in self.generate_images(count) {
            if predicate(&image) {
                matched += 1;
            }
        }
        matched
    }

    /// Row-major pixel read with an explicit stride
    ///
    /// Returns `None` for a non-positive `width`, negative coordinates,
    /// `x >= width`, or an index past the end of the buffer. No index is
    /// ever computed from a rejected stride.
    pub fn pixel_at(&self, pixels: &[u8], width: i32, x: i32, y: i32) -> Option<u8> {
        if width <= 0 || x < 0 || y < 0 || x >= width {
            return None;
        }
        let index = (y as usize).checked_mul(width as usize)?.checked_add(x as usize)?;
        pixels.get(index).copied()
    }

    /// Sum of all pixel values
    pub fn sum_pixels(&self, pixels: &[u8]) -> i64 {
        pixels.iter().map(|&p| i64::from(p)).sum()
    }
}
