#![allow(non_snake_case)]
//! Boundary functions for the ImageProcessor service.
//!
//! Pixel buffers cross the boundary as raw pointer + explicit size/stride;
//! every read validates the stride before any index arithmetic happens.

use super::registry::IMAGE_PROCESSORS;
use super::types::{ImagePredicate, ImageProcessorHandle};
use crate::image::ImageProcessor;
use crate::types::ImageData;
use std::ffi::c_void;
use std::slice;

/// Create a new ImageProcessor
#[no_mangle]
pub extern "C" fn ImageProcessor_create() -> ImageProcessorHandle {
    IMAGE_PROCESSORS.insert(ImageProcessor::new())
}

/// Destroy an ImageProcessor; null or already-destroyed handles are a no-op
#[no_mangle]
pub extern "C" fn ImageProcessor_destroy(proc_: ImageProcessorHandle) {
    IMAGE_PROCESSORS.remove(proc_);
}

/// Count generated descriptors for which `predicate` returns non-zero
///
/// `count` descriptors are generated in order; the predicate sees a pointer
/// to each one, valid only for that invocation. Returns -1 for an invalid
/// handle or a null callback.
#[no_mangle]
pub extern "C" fn ImageProcessor_countImagesWhere(
    proc_: ImageProcessorHandle,
    count: i32,
    predicate: ImagePredicate,
    user_data: *mut c_void,
) -> i32 {
    let service = match IMAGE_PROCESSORS.get(proc_) {
        Some(p) => p,
        None => return -1,
    };
    let callback = match predicate {
        Some(cb) => cb,
        None => return -1,
    };
    service.count_images_where(count, |image| {
        // SAFETY: the descriptor pointer is valid for this invocation only;
        // caller guarantees the callback and user_data stay valid
        unsafe { callback(image as *const ImageData, user_data) != 0 }
    })
}

/// Row-major pixel read: `pixels[y * width + x]`
///
/// Returns -1 for an invalid handle, a null buffer, a non-positive `width`,
/// negative coordinates, or `x >= width`; no index is computed in any of
/// those cases.
///
/// # Safety
///
/// If all arguments pass validation, `pixels` must point to a buffer of at
/// least `(y + 1) * width` bytes that stays valid for the duration of the
/// call.
#[no_mangle]
pub unsafe extern "C" fn ImageProcessor_getPixel(
    proc_: ImageProcessorHandle,
    pixels: *const u8,
    width: i32,
    x: i32,
    y: i32,
) -> i32 {
    if pixels.is_null() || width <= 0 || x < 0 || y < 0 || x >= width {
        return -1;
    }
    if !IMAGE_PROCESSORS.contains(proc_) {
        return -1;
    }
    let index = (y as usize) * (width as usize) + (x as usize);
    // SAFETY: validation above rejected every case where index is not a
    // well-formed row-major offset; caller guarantees the buffer covers it
    i32::from(*pixels.add(index))
}

/// Sum of the first `len` pixel values
///
/// Returns -1 for an invalid handle or a null buffer; `len <= 0` is an
/// empty read and sums to 0.
///
/// # Safety
///
/// `pixels`, if non-null, must point to at least `len` readable bytes that
/// stay valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn ImageProcessor_sumPixels(
    proc_: ImageProcessorHandle,
    pixels: *const u8,
    len: i32,
) -> i64 {
    if pixels.is_null() {
        return -1;
    }
    let service = match IMAGE_PROCESSORS.get(proc_) {
        Some(p) => p,
        None => return -1,
    };
    if len <= 0 {
        return 0;
    }
    // SAFETY: null check above; caller guarantees len readable bytes
    let buffer = slice::from_raw_parts(pixels, len as usize);
    service.sum_pixels(buffer)
}
