//! Core value types shared by the native API and the C boundary.
//!
//! Everything here is a plain fixed-layout aggregate (`#[repr(C)]`, `Copy`)
//! so the same definition serves both surfaces: the native API passes these
//! by value or reference, the boundary copies them bit-for-bit. None of them
//! own dynamic memory.

use serde::{Deserialize, Serialize};

/// 2D point with integer coordinates (C-compatible layout)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with a detection confidence (C-compatible layout)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width (the right edge `x + width` is exclusive)
    pub width: i32,
    /// Height (the bottom edge `y + height` is exclusive)
    pub height: i32,
    /// Detection confidence in [0, 1] by convention (not enforced)
    pub confidence: f64,
}

impl BoundingBox {
    /// Create a box with the given confidence
    pub fn new(x: i32, y: i32, width: i32, height: i32, confidence: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            confidence,
        }
    }
}

/// Descriptor for an image buffer (dimensions only, C-compatible layout)
///
/// This describes an image; it never owns pixel data. Pixel buffers travel
/// separately as raw slices/pointers.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Channels per pixel (3 = RGB, 4 = RGBA)
    pub channels: i32,
}

/// Processing status code
///
/// Closed set of integer-backed symbols. [`Status::from_code`] is a total
/// function: every `i32` maps to a variant, with undefined codes collapsing
/// to [`Status::Unknown`].
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not started
    Idle = 0,
    /// In progress
    Running = 1,
    /// Finished successfully
    Complete = 2,
    /// Finished with an error
    Failed = 3,
    /// Any code outside the defined set
    Unknown = 99,
}

impl Status {
    /// Decode an integer code (total: undefined codes become `Unknown`)
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Status::Idle,
            1 => Status::Running,
            2 => Status::Complete,
            3 => Status::Failed,
            _ => Status::Unknown,
        }
    }

    /// Integer code for this status
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Symbolic name
    pub fn name(self) -> &'static str {
        match self {
            Status::Idle => "Idle",
            Status::Running => "Running",
            Status::Complete => "Complete",
            Status::Failed => "Failed",
            Status::Unknown => "Unknown",
        }
    }
}

/// Color channel code (same total-conversion contract as [`Status`])
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Red channel
    Red = 0,
    /// Green channel
    Green = 1,
    /// Blue channel
    Blue = 2,
    /// Any code outside the defined set
    Unknown = 99,
}

impl Color {
    /// Decode an integer code (total: undefined codes become `Unknown`)
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Color::Red,
            1 => Color::Green,
            2 => Color::Blue,
            _ => Color::Unknown,
        }
    }

    /// Integer code for this color
    pub fn code(self) -> i32 {
        self as i32
    }
}
