#![allow(non_snake_case)]
//! Callback marshaling for the AsyncProcessor service.
//!
//! Each boundary callback is a nullable C function pointer plus an opaque
//! `user_data` context. The pair is captured together into a closure and
//! invoked inline on the caller's stack; it is never stored, never invoked
//! concurrently with itself, and never invoked after the operation returns.
//! A null function pointer is an invalid argument (-1), not a silent skip.

use super::registry::ASYNC_PROCESSORS;
use super::types::{AsyncProcessorHandle, FilterCallback, ProgressCallback, TransformCallback};
use crate::tasks::AsyncProcessor;
use std::ffi::c_void;

/// Create a new AsyncProcessor
#[no_mangle]
pub extern "C" fn AsyncProcessor_create() -> AsyncProcessorHandle {
    ASYNC_PROCESSORS.insert(AsyncProcessor::new())
}

/// Destroy an AsyncProcessor; null or already-destroyed handles are a no-op
#[no_mangle]
pub extern "C" fn AsyncProcessor_destroy(proc_: AsyncProcessorHandle) {
    ASYNC_PROCESSORS.remove(proc_);
}

/// Report progress `count` times: `onProgress(0..count-1, count, user_data)`
///
/// Returns the number of invocations, or -1 for an invalid handle or a null
/// callback. The callback runs synchronously on the caller's thread.
#[no_mangle]
pub extern "C" fn AsyncProcessor_processWithProgress(
    proc_: AsyncProcessorHandle,
    count: i32,
    onProgress: ProgressCallback,
    user_data: *mut c_void,
) -> i32 {
    let service = match ASYNC_PROCESSORS.get(proc_) {
        Some(p) => p,
        None => return -1,
    };
    let callback = match onProgress {
        Some(cb) => cb,
        None => return -1,
    };
    service.process_with_progress(count, |current, total| {
        // SAFETY: caller guarantees the callback and user_data stay valid
        // for the duration of this call
        unsafe { callback(current, total, user_data) }
    })
}

/// Count integers in `[start, end]` for which `filter` returns non-zero
///
/// Every element is evaluated in ascending order with no short-circuiting.
/// Returns -1 for an invalid handle or a null callback.
#[no_mangle]
pub extern "C" fn AsyncProcessor_countFiltered(
    proc_: AsyncProcessorHandle,
    start: i32,
    end: i32,
    filter: FilterCallback,
    user_data: *mut c_void,
) -> i32 {
    let service = match ASYNC_PROCESSORS.get(proc_) {
        Some(p) => p,
        None => return -1,
    };
    let callback = match filter {
        Some(cb) => cb,
        None => return -1,
    };
    service.count_filtered(start, end, |value| {
        // SAFETY: caller guarantees the callback and user_data stay valid
        // for the duration of this call
        unsafe { callback(value, user_data) != 0 }
    })
}

/// Sum `transform(value)` over `[start, end]`, ascending
///
/// The sum is accumulated in 64 bits and saturated to the i32 range.
/// Returns -1 for an invalid handle or a null callback (ambiguous with a
/// legitimate -1 sum; inherited limitation).
#[no_mangle]
pub extern "C" fn AsyncProcessor_sumTransformed(
    proc_: AsyncProcessorHandle,
    start: i32,
    end: i32,
    transform: TransformCallback,
    user_data: *mut c_void,
) -> i32 {
    let service = match ASYNC_PROCESSORS.get(proc_) {
        Some(p) => p,
        None => return -1,
    };
    let callback = match transform {
        Some(cb) => cb,
        None => return -1,
    };
    service.sum_transformed(start, end, |value| {
        // SAFETY: caller guarantees the callback and user_data stay valid
        // for the duration of this call
        unsafe { callback(value, user_data) }
    })
}
