//! Integer and floating-point arithmetic service.
//!
//! The bodies are trivial on purpose: `Calculator` exists to exercise
//! primitive-parameter passing across the boundary, not to do math.

use thiserror::Error;

/// Arithmetic errors for the checked native API
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Divisor was zero
    #[error("division by zero")]
    DivideByZero,
}

/// Stateless arithmetic service
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    /// Create a calculator
    pub fn new() -> Self {
        Self
    }

    /// a + b (two's-complement wrapping on overflow)
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    /// a - b (two's-complement wrapping on overflow)
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    /// a * b (two's-complement wrapping on overflow)
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    /// a / b, returning 0.0 when b is zero
    ///
    /// The zero default is a deliberate policy kept for compatibility with
    /// the boundary convention, which has no error channel. It is ambiguous
    /// with a legitimate zero quotient; callers that need to distinguish the
    /// two should use [`Calculator::try_divide`].
    pub fn divide(&self, a: f64, b: f64) -> f64 {
        if b != 0.0 {
            a / b
        } else {
            0.0
        }
    }

    /// a / b with an explicit error for a zero divisor
    pub fn try_divide(&self, a: f64, b: f64) -> Result<f64, MathError> {
        if b != 0.0 {
            Ok(a / b)
        } else {
            Err(MathError::DivideByZero)
        }
    }

    /// Major version of the service contract
    pub fn version_major(&self) -> i32 {
        1
    }

    /// Minor version of the service contract
    pub fn version_minor(&self) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        let calc = Calculator::new();
        assert_eq!(calc.add(2, 3), 5);
        assert_eq!(calc.subtract(10, 4), 6);
        assert_eq!(calc.multiply(3, 7), 21);
        assert_eq!(calc.divide(10.0, 4.0), 2.5);
    }

    #[test]
    fn divide_by_zero_returns_documented_default() {
        let calc = Calculator::new();
        assert_eq!(calc.divide(5.0, 0.0), 0.0);
        assert_eq!(calc.divide(-5.0, 0.0), 0.0);
    }

    #[test]
    fn try_divide_makes_the_error_explicit() {
        let calc = Calculator::new();
        assert_eq!(calc.try_divide(15.0, 3.0), Ok(5.0));
        assert_eq!(calc.try_divide(5.0, 0.0), Err(MathError::DivideByZero));
    }

    #[test]
    fn overflow_wraps() {
        let calc = Calculator::new();
        assert_eq!(calc.add(i32::MAX, 1), i32::MIN);
        assert_eq!(calc.subtract(i32::MIN, 1), i32::MAX);
    }

    #[test]
    fn version() {
        let calc = Calculator::new();
        assert_eq!(calc.version_major(), 1);
        assert_eq!(calc.version_minor(), 0);
    }
}
