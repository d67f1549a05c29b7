//! Common helpers for crossbind boundary tests

// Not every test binary uses every helper
#![allow(dead_code)]

use crossbind::types::{BoundingBox, Point};
use std::ffi::c_void;

// ============================================================================
// Standard fixtures
// ============================================================================

/// 100x100 box at (10, 10) with partial confidence
pub fn test_box() -> BoundingBox {
    BoundingBox::new(10, 10, 100, 100, 0.9)
}

/// Bounds covering [0, 100) on both axes
pub fn test_bounds() -> BoundingBox {
    BoundingBox::new(0, 0, 100, 100, 1.0)
}

/// Point at the box origin corner
pub fn corner_point() -> Point {
    Point::new(10, 10)
}

// ============================================================================
// Callback recorders
// ============================================================================

/// Borrow `user_data` back as the recorder it was created from.
///
/// Callbacks in these tests thread a `&mut Vec<T>` through `user_data`; the
/// boundary contract guarantees the callback only runs inside the call that
/// received the pointer, so the borrow never escapes the test body.
///
/// # Safety
///
/// `user_data` must be the `*mut Vec<T>` the test passed in, and no other
/// reference to the Vec may be live during the callback.
pub unsafe fn recorder<'a, T>(user_data: *mut c_void) -> &'a mut Vec<T> {
    &mut *(user_data as *mut Vec<T>)
}
