//! # crossbind
//!
//! A small set of in-process computational services exposed through two
//! parallel surfaces:
//!
//! - a native Rust API ([`Calculator`], [`Geometry`], [`ShapeProcessor`],
//!   [`AsyncProcessor`], [`ImageProcessor`], [`ObjectManager`])
//! - a flat, ABI-stable C handle API (the [`ffi`] module) intended for
//!   cross-language consumption
//!
//! The numeric bodies are deliberately trivial. The subject of the crate is
//! the boundary layer: opaque handle lifecycle, ownership transfer of
//! heap-allocated results, callback marshaling, and raw-pointer discipline.
//!
//! ## Example
//!
//! ```rust
//! use crossbind::prelude::*;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), 5);
//!
//! let mut geom = Geometry::new();
//! let points = geom.create_line(0, 0, 10, 10, 3);
//! assert_eq!(points.first(), Some(&Point::new(0, 0)));
//! assert_eq!(points.last(), Some(&Point::new(10, 10)));
//!
//! let proc_ = AsyncProcessor::new();
//! let evens = proc_.count_filtered(1, 10, |v| v % 2 == 0);
//! assert_eq!(evens, 5);
//! ```

#![warn(missing_docs)]

pub mod calculator;
pub mod geometry;
pub mod image;
pub mod objects;
pub mod shapes;
pub mod tasks;
pub mod types;

#[cfg(feature = "ffi")]
pub mod ffi;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and services
pub mod prelude {
    pub use crate::calculator::{Calculator, MathError};
    pub use crate::geometry::Geometry;
    pub use crate::image::ImageProcessor;
    pub use crate::objects::{ManagedObject, ObjectManager};
    pub use crate::shapes::ShapeProcessor;
    pub use crate::tasks::AsyncProcessor;
    pub use crate::types::{BoundingBox, Color, ImageData, Point, Status};
}

// Re-exports for convenience
pub use calculator::Calculator;
pub use geometry::Geometry;
pub use image::ImageProcessor;
pub use objects::ObjectManager;
pub use shapes::ShapeProcessor;
pub use tasks::AsyncProcessor;
