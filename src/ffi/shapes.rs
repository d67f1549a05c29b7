#![allow(non_snake_case)]
//! Boundary functions for the ShapeProcessor service.
//!
//! This file exercises every struct-pointer convention: by-value structs,
//! const-pointer reads, in-place mutation through a mutable pointer, and a
//! returned heap clone whose ownership transfers to the caller.

use super::registry::SHAPE_PROCESSORS;
use super::types::ShapeProcessorHandle;
use crate::shapes::ShapeProcessor;
use crate::types::{BoundingBox, Point};
use std::ptr;

/// Create a new ShapeProcessor
#[no_mangle]
pub extern "C" fn ShapeProcessor_create() -> ShapeProcessorHandle {
    SHAPE_PROCESSORS.insert(ShapeProcessor::new())
}

/// Destroy a ShapeProcessor; null or already-destroyed handles are a no-op
#[no_mangle]
pub extern "C" fn ShapeProcessor_destroy(proc_: ShapeProcessorHandle) {
    SHAPE_PROCESSORS.remove(proc_);
}

/// width * height (wrapping). Returns 0 for an invalid handle.
#[no_mangle]
pub extern "C" fn ShapeProcessor_calculateArea(
    proc_: ShapeProcessorHandle,
    boxed: BoundingBox,
) -> i32 {
    match SHAPE_PROCESSORS.get(proc_) {
        Some(p) => p.area(boxed),
        None => 0,
    }
}

/// Length of the box diagonal. Returns -1.0 for an invalid handle or a null
/// box pointer.
///
/// # Safety
///
/// `boxed`, if non-null, must point to a valid `BoundingBox` for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn ShapeProcessor_calculateDiagonal(
    proc_: ShapeProcessorHandle,
    boxed: *const BoundingBox,
) -> f64 {
    if boxed.is_null() {
        return -1.0;
    }
    match SHAPE_PROCESSORS.get(proc_) {
        // SAFETY: null check above; caller guarantees the pointee is valid
        Some(p) => p.diagonal(&*boxed),
        None => -1.0,
    }
}

/// Shift a point by (dx, dy). Returns a zeroed point for an invalid handle.
#[no_mangle]
pub extern "C" fn ShapeProcessor_translate(
    proc_: ShapeProcessorHandle,
    p: Point,
    dx: i32,
    dy: i32,
) -> Point {
    match SHAPE_PROCESSORS.get(proc_) {
        Some(sp) => sp.translate(p, dx, dy),
        None => Point::default(),
    }
}

/// Euclidean distance from the origin, truncated. Returns -1 for an invalid
/// handle or a null point pointer.
///
/// # Safety
///
/// `p`, if non-null, must point to a valid `Point` for the duration of the
/// call.
#[no_mangle]
pub unsafe extern "C" fn ShapeProcessor_distanceFromOrigin(
    proc_: ShapeProcessorHandle,
    p: *const Point,
) -> i32 {
    if p.is_null() {
        return -1;
    }
    match SHAPE_PROCESSORS.get(proc_) {
        // SAFETY: null check above; caller guarantees the pointee is valid
        Some(sp) => sp.distance_from_origin(&*p),
        None => -1,
    }
}

/// Half-open containment test. Returns false for an invalid handle.
#[no_mangle]
pub extern "C" fn ShapeProcessor_boxContainsPoint(
    proc_: ShapeProcessorHandle,
    boxed: BoundingBox,
    point: Point,
) -> bool {
    match SHAPE_PROCESSORS.get(proc_) {
        Some(p) => p.contains(&boxed, &point),
        None => false,
    }
}

/// Build a box with confidence 1.0. Returns a zeroed box for an invalid
/// handle.
#[no_mangle]
pub extern "C" fn ShapeProcessor_createBox(
    proc_: ShapeProcessorHandle,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> BoundingBox {
    match SHAPE_PROCESSORS.get(proc_) {
        Some(p) => p.create_box(x, y, width, height),
        None => BoundingBox::default(),
    }
}

/// Clamp `boxed` in place so it lies within `bounds`
///
/// Atomic from the caller's perspective: on success the full clamped value
/// is written and true is returned; on any failure (invalid handle, null
/// pointer, degenerate bounds) the pointee is left untouched and false is
/// returned.
///
/// # Safety
///
/// `boxed`, if non-null, must point to a valid, writable `BoundingBox`;
/// `bounds`, if non-null, must point to a valid `BoundingBox`. Neither may
/// alias memory mutated concurrently during the call.
#[no_mangle]
pub unsafe extern "C" fn ShapeProcessor_clampBox(
    proc_: ShapeProcessorHandle,
    boxed: *mut BoundingBox,
    bounds: *const BoundingBox,
) -> bool {
    if boxed.is_null() || bounds.is_null() {
        return false;
    }
    let service = match SHAPE_PROCESSORS.get(proc_) {
        Some(p) => p,
        None => return false,
    };
    // SAFETY: null checks above; caller guarantees both pointees are valid
    match service.clamp_box(&*boxed, &*bounds) {
        Some(clamped) => {
            *boxed = clamped;
            true
        }
        None => false,
    }
}

/// Heap-allocate a copy of `boxed` and transfer ownership to the caller
///
/// The caller must free the returned pointer exactly once with
/// `BoundingBox_free`; the library retains no alias to it. Returns null for
/// an invalid handle or a null input.
///
/// # Safety
///
/// `boxed`, if non-null, must point to a valid `BoundingBox` for the
/// duration of the call.
#[no_mangle]
pub unsafe extern "C" fn ShapeProcessor_cloneBox(
    proc_: ShapeProcessorHandle,
    boxed: *const BoundingBox,
) -> *mut BoundingBox {
    if boxed.is_null() || !SHAPE_PROCESSORS.contains(proc_) {
        return ptr::null_mut();
    }
    // SAFETY: null check above; caller guarantees the pointee is valid
    Box::into_raw(Box::new(*boxed))
}
