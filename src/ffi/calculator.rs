#![allow(non_snake_case)]
//! Boundary functions for the Calculator service.

use super::registry::CALCULATORS;
use super::types::CalculatorHandle;
use crate::calculator::Calculator;

/// Create a new Calculator
#[no_mangle]
pub extern "C" fn Calculator_create() -> CalculatorHandle {
    CALCULATORS.insert(Calculator::new())
}

/// Destroy a Calculator; null or already-destroyed handles are a no-op
#[no_mangle]
pub extern "C" fn Calculator_destroy(calc: CalculatorHandle) {
    CALCULATORS.remove(calc);
}

/// a + b (wrapping). Returns 0 for an invalid handle.
#[no_mangle]
pub extern "C" fn Calculator_add(calc: CalculatorHandle, a: i32, b: i32) -> i32 {
    match CALCULATORS.get(calc) {
        Some(c) => c.add(a, b),
        None => 0,
    }
}

/// a - b (wrapping). Returns 0 for an invalid handle.
#[no_mangle]
pub extern "C" fn Calculator_subtract(calc: CalculatorHandle, a: i32, b: i32) -> i32 {
    match CALCULATORS.get(calc) {
        Some(c) => c.subtract(a, b),
        None => 0,
    }
}

/// a * b (wrapping). Returns 0 for an invalid handle.
#[no_mangle]
pub extern "C" fn Calculator_multiply(calc: CalculatorHandle, a: i32, b: i32) -> i32 {
    match CALCULATORS.get(calc) {
        Some(c) => c.multiply(a, b),
        None => 0,
    }
}

/// a / b. Returns 0.0 when b is zero (documented default) or the handle is
/// invalid; both cases are ambiguous with a legitimate zero quotient.
#[no_mangle]
pub extern "C" fn Calculator_divide(calc: CalculatorHandle, a: f64, b: f64) -> f64 {
    match CALCULATORS.get(calc) {
        Some(c) => c.divide(a, b),
        None => 0.0,
    }
}

/// Major version of the service contract. Returns -1 for an invalid handle.
#[no_mangle]
pub extern "C" fn Calculator_getVersionMajor(calc: CalculatorHandle) -> i32 {
    match CALCULATORS.get(calc) {
        Some(c) => c.version_major(),
        None => -1,
    }
}

/// Minor version of the service contract. Returns -1 for an invalid handle.
#[no_mangle]
pub extern "C" fn Calculator_getVersionMinor(calc: CalculatorHandle) -> i32 {
    match CALCULATORS.get(calc) {
        Some(c) => c.version_minor(),
        None => -1,
    }
}
