//! Shape math over plain value structs.
//!
//! `ShapeProcessor` exercises every struct-parameter convention the boundary
//! supports: by value, by const reference, in-place mutation, and a returned
//! clone whose ownership transfers to the caller.

use crate::types::{BoundingBox, Point};
use glam::DVec2;

/// Stateless shape-math service
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeProcessor;

impl ShapeProcessor {
    /// Create a shape processor
    pub fn new() -> Self {
        Self
    }

    /// width * height (wrapping on overflow)
    pub fn area(&self, boxed: BoundingBox) -> i32 {
        boxed.width.wrapping_mul(boxed.height)
    }

    /// Length of the box diagonal
    pub fn diagonal(&self, boxed: &BoundingBox) -> f64 {
        DVec2::new(f64::from(boxed.width), f64::from(boxed.height)).length()
    }

    /// Shift a point by (dx, dy)
    pub fn translate(&self, p: Point, dx: i32, dy: i32) -> Point {
        Point::new(p.x.wrapping_add(dx), p.y.wrapping_add(dy))
    }

    /// Euclidean distance from the origin, truncated to an integer
    pub fn distance_from_origin(&self, p: &Point) -> i32 {
        DVec2::new(f64::from(p.x), f64::from(p.y)).length() as i32
    }

    /// Half-open containment test
    ///
    /// `(box.x, box.y)` is inside; `(box.x + width, box.y + height)` is not.
    pub fn contains(&self, boxed: &BoundingBox, point: &Point) -> bool {
        point.x >= boxed.x
            && point.x < boxed.x + boxed.width
            && point.y >= boxed.y
            && point.y < boxed.y + boxed.height
    }

    /// Build a box with confidence 1.0
    pub fn create_box(&self, x: i32, y: i32, width: i32, height: i32) -> BoundingBox {
        BoundingBox::new(x, y, width, height, 1.0)
    }

    /// Clamp a box so it lies entirely within `bounds`
    ///
    /// Returns `None` when `bounds` has non-positive width or height; no
    /// partial result is ever produced. The clamped box keeps the original
    /// confidence and never has a negative extent.
    pub fn clamp_box(&self, boxed: &BoundingBox, bounds: &BoundingBox) -> Option<BoundingBox> {
        if bounds.width <= 0 || bounds.height <= 0 {
            return None;
        }

        let right = bounds.x + bounds.width;
        let bottom = bounds.y + bounds.height;
        let x = boxed.x.clamp(bounds.x, right);
        let y = boxed.y.clamp(bounds.y, bottom);
        let width = boxed.width.min(right - x).max(0);
        let height = boxed.height.min(bottom - y).max(0);

        Some(BoundingBox::new(x, y, width, height, boxed.confidence))
    }
}
