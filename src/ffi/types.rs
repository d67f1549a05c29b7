//! FFI-safe handle aliases and callback signatures.
//!
//! A handle is pointer-sized for ABI convenience but carries a registry id,
//! not an address. Callbacks are nullable C function pointers paired with an
//! opaque `user_data` context that is threaded through unchanged.

use crate::types::ImageData;
use std::ffi::c_void;

/// Raw opaque handle value
pub type RawHandle = *mut c_void;

/// Opaque handle to a Calculator instance
pub type CalculatorHandle = RawHandle;
/// Opaque handle to a Geometry instance
pub type GeometryHandle = RawHandle;
/// Opaque handle to a ShapeProcessor instance
pub type ShapeProcessorHandle = RawHandle;
/// Opaque handle to an AsyncProcessor instance
pub type AsyncProcessorHandle = RawHandle;
/// Opaque handle to an ImageProcessor instance
pub type ImageProcessorHandle = RawHandle;
/// Opaque handle to an ObjectManager instance
pub type ObjectManagerHandle = RawHandle;
/// Opaque handle to a point result container
pub type PointResultHandle = RawHandle;
/// Opaque handle to a bounding-box result container
pub type BoxResultHandle = RawHandle;

/// Null handle constant
pub const HANDLE_NULL: RawHandle = std::ptr::null_mut();

/// Progress callback: `(current, total, user_data)`
///
/// Invoked with `current = 0..total-1` in strictly increasing order.
pub type ProgressCallback =
    Option<unsafe extern "C" fn(current: i32, total: i32, user_data: *mut c_void)>;

/// Filter predicate: `(value, user_data) -> non-zero to keep`
pub type FilterCallback =
    Option<unsafe extern "C" fn(value: i32, user_data: *mut c_void) -> i32>;

/// Transform function: `(value, user_data) -> transformed value`
pub type TransformCallback =
    Option<unsafe extern "C" fn(value: i32, user_data: *mut c_void) -> i32>;

/// Image predicate: `(descriptor, user_data) -> non-zero to count`
///
/// The descriptor pointer is only valid for the duration of the call; the
/// callback must copy anything it wants to keep.
pub type ImagePredicate =
    Option<unsafe extern "C" fn(image: *const ImageData, user_data: *mut c_void) -> i32>;
