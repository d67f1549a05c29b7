#![allow(non_snake_case)]
//! Memory management and validity checks for the boundary.

use super::registry::{
    ASYNC_PROCESSORS, CALCULATORS, GEOMETRIES, IMAGE_PROCESSORS, OBJECT_MANAGERS, SHAPE_PROCESSORS,
};
use super::types::{
    AsyncProcessorHandle, CalculatorHandle, GeometryHandle, ImageProcessorHandle,
    ObjectManagerHandle, ShapeProcessorHandle,
};
use crate::types::BoundingBox;

/// Free a box returned by `ShapeProcessor_cloneBox`
///
/// Must be called exactly once per returned pointer. Null is a no-op.
#[no_mangle]
pub extern "C" fn BoundingBox_free(boxed: *mut BoundingBox) {
    if !boxed.is_null() {
        // SAFETY: the pointer was allocated by Box::into_raw in
        // ShapeProcessor_cloneBox; this reclaims ownership and frees it
        unsafe {
            drop(Box::from_raw(boxed));
        }
    }
}

/// Whether the handle refers to a live Calculator
#[no_mangle]
pub extern "C" fn Calculator_isValid(calc: CalculatorHandle) -> bool {
    CALCULATORS.contains(calc)
}

/// Whether the handle refers to a live Geometry
#[no_mangle]
pub extern "C" fn Geometry_isValid(geom: GeometryHandle) -> bool {
    GEOMETRIES.contains(geom)
}

/// Whether the handle refers to a live ShapeProcessor
#[no_mangle]
pub extern "C" fn ShapeProcessor_isValid(proc_: ShapeProcessorHandle) -> bool {
    SHAPE_PROCESSORS.contains(proc_)
}

/// Whether the handle refers to a live AsyncProcessor
#[no_mangle]
pub extern "C" fn AsyncProcessor_isValid(proc_: AsyncProcessorHandle) -> bool {
    ASYNC_PROCESSORS.contains(proc_)
}

/// Whether the handle refers to a live ImageProcessor
#[no_mangle]
pub extern "C" fn ImageProcessor_isValid(proc_: ImageProcessorHandle) -> bool {
    IMAGE_PROCESSORS.contains(proc_)
}

/// Whether the handle refers to a live ObjectManager
#[no_mangle]
pub extern "C" fn ObjectManager_isValid(mgr: ObjectManagerHandle) -> bool {
    OBJECT_MANAGERS.contains(mgr)
}
