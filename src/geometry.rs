//! Point and box generation service.
//!
//! `Geometry` is the payload behind the result-container protocol: both
//! generators produce a fully-counted `Vec` before returning, so a container
//! built from one can never disagree with itself about its length.

use crate::types::{BoundingBox, Point};
use glam::DVec2;

/// Generates point and box sequences; remembers the size of the last batch
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    last_count: i32,
}

impl Geometry {
    /// Create a geometry service
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpolate `num_points` points along the segment (x1,y1) -> (x2,y2)
    ///
    /// - `num_points <= 0` yields an empty vector (not an error)
    /// - `num_points == 1` yields exactly `(x1, y1)`
    /// - otherwise the first point is `(x1, y1)` and the last is `(x2, y2)`
    ///
    /// Interpolation runs in f64 and truncates to integer coordinates.
    pub fn create_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, num_points: i32) -> Vec<Point> {
        if num_points <= 0 {
            self.last_count = 0;
            return Vec::new();
        }

        let a = DVec2::new(x1 as f64, y1 as f64);
        let b = DVec2::new(x2 as f64, y2 as f64);
        let n = num_points as usize;

        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let t = if n == 1 {
                0.0
            } else {
                i as f64 / (n - 1) as f64
            };
            let p = a.lerp(b, t);
            points.push(Point::new(p.x as i32, p.y as i32));
        }

        self.last_count = points.len() as i32;
        points
    }

    /// Produce `count` synthetic detection boxes
    ///
    /// Box `i` sits at `(i*10, i*10)` with side `50 + i` and confidence
    /// `0.9 - i*0.1`. `count <= 0` yields an empty vector.
    pub fn find_bounding_boxes(&mut self, count: i32) -> Vec<BoundingBox> {
        if count <= 0 {
            self.last_count = 0;
            return Vec::new();
        }

        let mut boxes = Vec::with_capacity(count as usize);
        for i in 0..count {
            boxes.push(BoundingBox::new(
                i * 10,
                i * 10,
                50 + i,
                50 + i,
                0.9 - f64::from(i) * 0.1,
            ));
        }

        self.last_count = boxes.len() as i32;
        boxes
    }

    /// Length of the most recently generated batch
    pub fn last_count(&self) -> i32 {
        self.last_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_endpoints_are_exact() {
        let mut geom = Geometry::new();
        let points = geom.create_line(0, 0, 10, 10, 3);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[2], Point::new(10, 10));
        assert_eq!(geom.last_count(), 3);
    }

    #[test]
    fn single_point_line_is_the_start() {
        let mut geom = Geometry::new();
        let points = geom.create_line(7, -3, 100, 100, 1);
        assert_eq!(points, vec![Point::new(7, -3)]);
        assert_eq!(geom.last_count(), 1);
    }

    #[test]
    fn non_positive_counts_yield_empty() {
        let mut geom = Geometry::new();
        assert!(geom.create_line(0, 0, 1, 1, 0).is_empty());
        assert!(geom.create_line(0, 0, 1, 1, -5).is_empty());
        assert_eq!(geom.last_count(), 0);
        assert!(geom.find_bounding_boxes(0).is_empty());
        assert!(geom.find_bounding_boxes(-1).is_empty());
        assert_eq!(geom.last_count(), 0);
    }

    #[test]
    fn boxes_step_by_ten_and_grow_by_one() {
        let mut geom = Geometry::new();
        let boxes = geom.find_bounding_boxes(3);
        assert_eq!(boxes.len(), 3);
        for (i, b) in boxes.iter().enumerate() {
            let i = i as i32;
            assert_eq!(b.x, i * 10);
            assert_eq!(b.y, i * 10);
            assert_eq!(b.width, 50 + i);
            assert_eq!(b.height, 50 + i);
        }
        assert!((boxes[1].confidence - 0.8).abs() < 1e-9);
        assert_eq!(geom.last_count(), 3);
    }
}
