//! Managed-object id wrapping.
//!
//! `ObjectManager` is a miniature of the boundary's own handle discipline:
//! it hands out opaque numeric ids for objects it owns, and an id released
//! once can never be released again or resurrect its object.

use std::collections::HashMap;

/// An object tracked by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedObject {
    /// Manager-assigned id, never zero, never reused within a manager
    pub id: u64,
    /// Caller-supplied tag
    pub tag: i32,
}

/// Owns a set of tagged objects behind numeric ids
#[derive(Debug, Clone, Default)]
pub struct ObjectManager {
    objects: HashMap<u64, ManagedObject>,
    next_id: u64,
}

impl ObjectManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            next_id: 1,
        }
    }

    /// Create a new object and return its id (never zero)
    pub fn acquire(&mut self, tag: i32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.insert(id, ManagedObject { id, tag });
        id
    }

    /// Whether `id` refers to a live object
    pub fn is_alive(&self, id: u64) -> bool {
        self.objects.contains_key(&id)
    }

    /// Tag of a live object
    pub fn tag_of(&self, id: u64) -> Option<i32> {
        self.objects.get(&id).map(|obj| obj.tag)
    }

    /// Release an object; a stale or unknown id returns false
    pub fn release(&mut self, id: u64) -> bool {
        self.objects.remove(&id).is_some()
    }

    /// Number of live objects
    pub fn live_count(&self) -> usize {
        self.objects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_release_round_trip() {
        let mut mgr = ObjectManager::new();
        let a = mgr.acquire(7);
        let b = mgr.acquire(8);
        assert_ne!(a, 0);
        assert_ne!(a, b);
        assert_eq!(mgr.live_count(), 2);
        assert_eq!(mgr.tag_of(a), Some(7));

        assert!(mgr.release(a));
        assert!(!mgr.is_alive(a));
        assert_eq!(mgr.live_count(), 1);
    }

    #[test]
    fn double_release_is_rejected() {
        let mut mgr = ObjectManager::new();
        let id = mgr.acquire(1);
        assert!(mgr.release(id));
        assert!(!mgr.release(id));
        assert_eq!(mgr.tag_of(id), None);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut mgr = ObjectManager::new();
        let a = mgr.acquire(1);
        mgr.release(a);
        let b = mgr.acquire(2);
        assert_ne!(a, b);
    }
}
