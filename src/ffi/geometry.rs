#![allow(non_snake_case)]
//! Boundary functions for the Geometry service and its result containers.
//!
//! The generators return container handles. A container owns its buffer;
//! `getData` hands out a borrowed view that is valid exactly until `free`.
//! `getCount` is idempotent: the generator computes the full count before
//! the container exists, so two reads can never disagree.

use super::registry::{BOX_RESULTS, GEOMETRIES, POINT_RESULTS};
use super::types::{BoxResultHandle, GeometryHandle, PointResultHandle, HANDLE_NULL};
use crate::geometry::Geometry;
use crate::types::{BoundingBox, Point};
use std::ptr;
use std::sync::Mutex;

/// Create a new Geometry
#[no_mangle]
pub extern "C" fn Geometry_create() -> GeometryHandle {
    GEOMETRIES.insert(Mutex::new(Geometry::new()))
}

/// Destroy a Geometry; null or already-destroyed handles are a no-op
///
/// Destroying the Geometry does not invalidate containers it produced:
/// each container has its own free.
#[no_mangle]
pub extern "C" fn Geometry_destroy(geom: GeometryHandle) {
    GEOMETRIES.remove(geom);
}

/// Interpolate `numPoints` points along a segment into a new container
///
/// Returns a null handle for an invalid Geometry handle. `numPoints <= 0`
/// is not an error: it yields a live container with count 0.
#[no_mangle]
pub extern "C" fn Geometry_createLine(
    geom: GeometryHandle,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    numPoints: i32,
) -> PointResultHandle {
    let service = match GEOMETRIES.get(geom) {
        Some(g) => g,
        None => return HANDLE_NULL,
    };
    let points = service.lock().unwrap().create_line(x1, y1, x2, y2, numPoints);
    POINT_RESULTS.insert(points)
}

/// Produce `count` synthetic detection boxes into a new container
///
/// Returns a null handle for an invalid Geometry handle. `count <= 0`
/// yields a live container with count 0.
#[no_mangle]
pub extern "C" fn Geometry_findBoundingBoxes(geom: GeometryHandle, count: i32) -> BoxResultHandle {
    let service = match GEOMETRIES.get(geom) {
        Some(g) => g,
        None => return HANDLE_NULL,
    };
    let boxes = service.lock().unwrap().find_bounding_boxes(count);
    BOX_RESULTS.insert(boxes)
}

/// Length of the most recently generated batch. Returns -1 for an invalid
/// handle.
#[no_mangle]
pub extern "C" fn Geometry_getLastCount(geom: GeometryHandle) -> i32 {
    match GEOMETRIES.get(geom) {
        Some(g) => g.lock().unwrap().last_count(),
        None => -1,
    }
}

// ============================================================================
// Point result container
// ============================================================================

/// Number of points in the container. Returns -1 for an invalid or freed
/// container handle.
#[no_mangle]
pub extern "C" fn Geometry_Point_CResult_getCount(result: PointResultHandle) -> i32 {
    match POINT_RESULTS.get(result) {
        Some(points) => points.len() as i32,
        None => -1,
    }
}

/// Borrowed view into the container's buffer
///
/// The pointer is valid until `Geometry_Point_CResult_free` and counts
/// `Geometry_Point_CResult_getCount` elements. Returns null for an invalid
/// or freed container handle. For an empty container the pointer is
/// non-null but must not be read.
#[no_mangle]
pub extern "C" fn Geometry_Point_CResult_getData(result: PointResultHandle) -> *const Point {
    match POINT_RESULTS.get(result) {
        Some(points) => points.as_ptr(),
        None => ptr::null(),
    }
}

/// Free the container and its buffer; all views become invalid
///
/// Null or already-freed handles are a no-op, so double-free cannot corrupt
/// anything.
#[no_mangle]
pub extern "C" fn Geometry_Point_CResult_free(result: PointResultHandle) {
    POINT_RESULTS.remove(result);
}

// ============================================================================
// BoundingBox result container
// ============================================================================

/// Number of boxes in the container. Returns -1 for an invalid or freed
/// container handle.
#[no_mangle]
pub extern "C" fn Geometry_BoundingBox_CResult_getCount(result: BoxResultHandle) -> i32 {
    match BOX_RESULTS.get(result) {
        Some(boxes) => boxes.len() as i32,
        None => -1,
    }
}

/// Borrowed view into the container's buffer (same contract as the Point
/// container)
#[no_mangle]
pub extern "C" fn Geometry_BoundingBox_CResult_getData(
    result: BoxResultHandle,
) -> *const BoundingBox {
    match BOX_RESULTS.get(result) {
        Some(boxes) => boxes.as_ptr(),
        None => ptr::null(),
    }
}

/// Free the container and its buffer; all views become invalid
#[no_mangle]
pub extern "C" fn Geometry_BoundingBox_CResult_free(result: BoxResultHandle) {
    BOX_RESULTS.remove(result);
}
