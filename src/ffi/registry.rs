//! Handle registry for the boundary layer.
//!
//! Maps opaque handles to service instances and result containers. A handle
//! value is a registry id cast to a pointer, so a stale handle fails lookup
//! instead of dangling; destroy is a plain remove, so double-destroy is a
//! no-op. Locks are held only around insert/lookup/remove, never while an
//! operation (or a caller-supplied callback) runs.

use super::types::RawHandle;
use crate::calculator::Calculator;
use crate::geometry::Geometry;
use crate::image::ImageProcessor;
use crate::objects::ObjectManager;
use crate::shapes::ShapeProcessor;
use crate::tasks::AsyncProcessor;
use crate::types::{BoundingBox, Point};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

/// A table of live instances keyed by handle id
pub struct Registry<T> {
    items: Mutex<HashMap<u64, Arc<T>>>,
    next_id: AtomicU64,
}

impl<T> Registry<T> {
    /// Create a registry whose ids start at `first_id`
    ///
    /// Each registry gets a distinct high-bit base so handles from
    /// different registries never collide numerically.
    pub fn new(first_id: u64) -> Self {
        Self {
            items: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(first_id),
        }
    }

    /// Register a value and return its handle
    pub fn insert(&self, value: T) -> RawHandle {
        // Relaxed ordering is sufficient - ids only need to be unique
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let entry = Arc::new(value);
        {
            let mut items = self.items.lock().unwrap();
            items.insert(id, entry);
        }
        id as RawHandle
    }

    /// Look up a handle (clones the Arc - cheap)
    pub fn get(&self, handle: RawHandle) -> Option<Arc<T>> {
        if handle.is_null() {
            return None;
        }
        let items = self.items.lock().unwrap();
        items.get(&(handle as u64)).cloned()
    }

    /// Remove a handle; null or stale handles are a no-op
    pub fn remove(&self, handle: RawHandle) {
        if handle.is_null() {
            return;
        }
        let mut items = self.items.lock().unwrap();
        items.remove(&(handle as u64));
    }

    /// Whether the handle refers to a live entry
    pub fn contains(&self, handle: RawHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live entries (for tests)
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        let items = self.items.lock().unwrap();
        items.len()
    }
}

lazy_static! {
    /// Live Calculator instances
    pub static ref CALCULATORS: Registry<Calculator> = Registry::new(0x0100_0000_0000_0001);
    /// Live Geometry instances (stateful, hence the Mutex)
    pub static ref GEOMETRIES: Registry<Mutex<Geometry>> = Registry::new(0x0200_0000_0000_0001);
    /// Live ShapeProcessor instances
    pub static ref SHAPE_PROCESSORS: Registry<ShapeProcessor> = Registry::new(0x0300_0000_0000_0001);
    /// Live AsyncProcessor instances
    pub static ref ASYNC_PROCESSORS: Registry<AsyncProcessor> = Registry::new(0x0400_0000_0000_0001);
    /// Live ImageProcessor instances
    pub static ref IMAGE_PROCESSORS: Registry<ImageProcessor> = Registry::new(0x0500_0000_0000_0001);
    /// Live ObjectManager instances (stateful, hence the Mutex)
    pub static ref OBJECT_MANAGERS: Registry<Mutex<ObjectManager>> = Registry::new(0x0600_0000_0000_0001);
    /// Live point result containers; the Vec buffer backs `getData` views
    pub static ref POINT_RESULTS: Registry<Vec<Point>> = Registry::new(0x0700_0000_0000_0001);
    /// Live bounding-box result containers
    pub static ref BOX_RESULTS: Registry<Vec<BoundingBox>> = Registry::new(0x0800_0000_0000_0001);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let registry: Registry<i32> = Registry::new(1);
        let handle = registry.insert(42);
        assert!(!handle.is_null());
        assert_eq!(*registry.get(handle).unwrap(), 42);
        registry.remove(handle);
    }

    #[test]
    fn remove_invalidates_the_handle() {
        let registry: Registry<i32> = Registry::new(1);
        let handle = registry.insert(7);
        assert!(registry.contains(handle));

        registry.remove(handle);
        assert!(!registry.contains(handle));
        assert!(registry.get(handle).is_none());

        // Double remove is a no-op
        registry.remove(handle);
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn null_handle_is_never_found() {
        let registry: Registry<i32> = Registry::new(1);
        registry.insert(1);
        assert!(registry.get(std::ptr::null_mut()).is_none());
        registry.remove(std::ptr::null_mut());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn handles_are_unique() {
        let registry: Registry<i32> = Registry::new(100);
        let a = registry.insert(1);
        let b = registry.insert(2);
        assert_ne!(a, b);
        assert_eq!(*registry.get(a).unwrap(), 1);
        assert_eq!(*registry.get(b).unwrap(), 2);
    }
}
