//! Integration tests: opaque handle lifecycle
//!
//! Verifies the create -> usable -> destroyed state machine: destroyed and
//! null handles are defined errors with no observable effect beyond their
//! sentinel, and destroy itself can never double-free.

mod common;

use crossbind::ffi::*;
use crossbind::types::Point;
use std::ffi::c_void;

// ============================================================================
// Create / destroy pairs
// ============================================================================

#[test]
fn create_returns_live_unique_handles() {
    let a = Calculator_create();
    let b = Calculator_create();
    assert!(!a.is_null());
    assert!(!b.is_null());
    assert_ne!(a, b);
    assert!(Calculator_isValid(a));
    assert!(Calculator_isValid(b));

    Calculator_destroy(a);
    assert!(!Calculator_isValid(a));
    assert!(Calculator_isValid(b), "destroying one handle must not touch another");
    Calculator_destroy(b);
}

#[test]
fn destroy_is_idempotent_and_null_safe() {
    let calc = Calculator_create();
    Calculator_destroy(calc);
    Calculator_destroy(calc); // stale: no-op
    Calculator_destroy(HANDLE_NULL); // null: no-op

    let geom = Geometry_create();
    Geometry_destroy(geom);
    Geometry_destroy(geom);
    Geometry_destroy(HANDLE_NULL);
}

#[test]
fn every_service_has_a_working_pair() {
    let shapes = ShapeProcessor_create();
    let tasks = AsyncProcessor_create();
    let images = ImageProcessor_create();
    let objects = ObjectManager_create();

    assert!(ShapeProcessor_isValid(shapes));
    assert!(AsyncProcessor_isValid(tasks));
    assert!(ImageProcessor_isValid(images));
    assert!(ObjectManager_isValid(objects));

    ShapeProcessor_destroy(shapes);
    AsyncProcessor_destroy(tasks);
    ImageProcessor_destroy(images);
    ObjectManager_destroy(objects);

    assert!(!ShapeProcessor_isValid(shapes));
    assert!(!AsyncProcessor_isValid(tasks));
    assert!(!ImageProcessor_isValid(images));
    assert!(!ObjectManager_isValid(objects));
}

// ============================================================================
// Operations on live handles
// ============================================================================

#[test]
fn calculator_operations_through_the_boundary() {
    let calc = Calculator_create();
    assert_eq!(Calculator_add(calc, 5, 3), 8);
    assert_eq!(Calculator_subtract(calc, 10, 7), 3);
    assert_eq!(Calculator_multiply(calc, 4, 6), 24);
    assert_eq!(Calculator_divide(calc, 15.0, 3.0), 5.0);
    assert_eq!(Calculator_divide(calc, 5.0, 0.0), 0.0); // documented default
    assert_eq!(Calculator_getVersionMajor(calc), 1);
    assert_eq!(Calculator_getVersionMinor(calc), 0);
    Calculator_destroy(calc);
}

#[test]
fn object_manager_ids_through_the_boundary() {
    let mgr = ObjectManager_create();

    let a = ObjectManager_acquire(mgr, 7);
    let b = ObjectManager_acquire(mgr, 8);
    assert_ne!(a, 0);
    assert_ne!(a, b);
    assert_eq!(ObjectManager_liveCount(mgr), 2);
    assert_eq!(ObjectManager_getTag(mgr, a), 7);
    assert!(ObjectManager_isAlive(mgr, b));

    assert!(ObjectManager_release(mgr, a));
    assert!(!ObjectManager_release(mgr, a), "double release must be rejected");
    assert!(!ObjectManager_isAlive(mgr, a));
    assert_eq!(ObjectManager_getTag(mgr, a), -1);
    assert_eq!(ObjectManager_liveCount(mgr), 1);

    ObjectManager_destroy(mgr);
}

// ============================================================================
// Operations on destroyed / null handles
// ============================================================================

#[test]
fn destroyed_handles_report_sentinels_not_stale_state() {
    let calc = Calculator_create();
    Calculator_destroy(calc);

    assert_eq!(Calculator_add(calc, 2, 3), 0);
    assert_eq!(Calculator_divide(calc, 10.0, 2.0), 0.0);
    assert_eq!(Calculator_getVersionMajor(calc), -1);

    let geom = Geometry_create();
    Geometry_destroy(geom);
    assert_eq!(Geometry_getLastCount(geom), -1);
    assert_eq!(Geometry_createLine(geom, 0, 0, 1, 1, 3), HANDLE_NULL);

    let shapes = ShapeProcessor_create();
    ShapeProcessor_destroy(shapes);
    assert_eq!(ShapeProcessor_calculateArea(shapes, common::test_box()), 0);
    assert_eq!(
        ShapeProcessor_translate(shapes, Point::new(5, 5), 1, 1),
        Point::default()
    );
    assert!(!ShapeProcessor_boxContainsPoint(
        shapes,
        common::test_box(),
        common::corner_point()
    ));

    let mgr = ObjectManager_create();
    ObjectManager_destroy(mgr);
    assert_eq!(ObjectManager_acquire(mgr, 1), 0);
    assert_eq!(ObjectManager_liveCount(mgr), -1);
    assert!(!ObjectManager_release(mgr, 1));
}

#[test]
fn callbacks_never_fire_for_destroyed_handles() {
    unsafe extern "C" fn record(current: i32, total: i32, user_data: *mut c_void) {
        common::recorder::<(i32, i32)>(user_data).push((current, total));
    }

    let tasks = AsyncProcessor_create();
    AsyncProcessor_destroy(tasks);

    let mut calls: Vec<(i32, i32)> = Vec::new();
    let result = AsyncProcessor_processWithProgress(
        tasks,
        4,
        Some(record),
        &mut calls as *mut Vec<(i32, i32)> as *mut c_void,
    );

    assert_eq!(result, -1);
    assert!(calls.is_empty(), "no invocation may escape a dead handle");
}

#[test]
fn null_handles_are_defined_errors() {
    assert_eq!(Calculator_add(HANDLE_NULL, 1, 1), 0);
    assert_eq!(Geometry_getLastCount(HANDLE_NULL), -1);
    assert_eq!(ObjectManager_liveCount(HANDLE_NULL), -1);
    assert!(!Calculator_isValid(HANDLE_NULL));
    assert!(!Geometry_isValid(HANDLE_NULL));
}
