#![allow(non_snake_case)]
//! Boundary functions for the ObjectManager service.
//!
//! Object ids are plain u64 values scoped to their manager; id 0 is the
//! error sentinel and is never issued.

use super::registry::OBJECT_MANAGERS;
use super::types::ObjectManagerHandle;
use crate::objects::ObjectManager;
use std::sync::Mutex;

/// Create a new ObjectManager
#[no_mangle]
pub extern "C" fn ObjectManager_create() -> ObjectManagerHandle {
    OBJECT_MANAGERS.insert(Mutex::new(ObjectManager::new()))
}

/// Destroy an ObjectManager and every object it still owns; null or
/// already-destroyed handles are a no-op
#[no_mangle]
pub extern "C" fn ObjectManager_destroy(mgr: ObjectManagerHandle) {
    OBJECT_MANAGERS.remove(mgr);
}

/// Create a tagged object and return its id. Returns 0 for an invalid
/// handle.
#[no_mangle]
pub extern "C" fn ObjectManager_acquire(mgr: ObjectManagerHandle, tag: i32) -> u64 {
    match OBJECT_MANAGERS.get(mgr) {
        Some(m) => m.lock().unwrap().acquire(tag),
        None => 0,
    }
}

/// Whether `id` refers to a live object. Returns false for an invalid
/// handle.
#[no_mangle]
pub extern "C" fn ObjectManager_isAlive(mgr: ObjectManagerHandle, id: u64) -> bool {
    match OBJECT_MANAGERS.get(mgr) {
        Some(m) => m.lock().unwrap().is_alive(id),
        None => false,
    }
}

/// Tag of a live object. Returns -1 for an invalid handle or an unknown id.
#[no_mangle]
pub extern "C" fn ObjectManager_getTag(mgr: ObjectManagerHandle, id: u64) -> i32 {
    match OBJECT_MANAGERS.get(mgr) {
        Some(m) => m.lock().unwrap().tag_of(id).unwrap_or(-1),
        None => -1,
    }
}

/// Release an object. Returns false for an invalid handle, an unknown id,
/// or an id already released (release is not idempotent success).
#[no_mangle]
pub extern "C" fn ObjectManager_release(mgr: ObjectManagerHandle, id: u64) -> bool {
    match OBJECT_MANAGERS.get(mgr) {
        Some(m) => m.lock().unwrap().release(id),
        None => false,
    }
}

/// Number of live objects. Returns -1 for an invalid handle.
#[no_mangle]
pub extern "C" fn ObjectManager_liveCount(mgr: ObjectManagerHandle) -> i32 {
    match OBJECT_MANAGERS.get(mgr) {
        Some(m) => m.lock().unwrap().live_count() as i32,
        None => -1,
    }
}
