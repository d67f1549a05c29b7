//! Callback-driven aggregate operations.
//!
//! `AsyncProcessor` keeps its historical name but everything here is
//! synchronous: each callback runs inline on the caller's stack, in order,
//! with no reentrancy and no invocation after the operation returns. A
//! caller that wants cancellation implements it inside its own callback.

/// Runs scalar callbacks over integer ranges
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncProcessor;

impl AsyncProcessor {
    /// Create a processor
    pub fn new() -> Self {
        Self
    }

    /// Invoke `on_progress(current, total)` for `current = 0..count`
    ///
    /// The callback fires exactly `max(count, 0)` times with strictly
    /// increasing `current` and a constant `total == count`. Returns the
    /// number of invocations.
    pub fn process_with_progress<F>(&self, count: i32, mut on_progress: F) -> i32
    where
        F: FnMut(i32, i32),
    {
        if count <= 0 {
            return 0;
        }
        for current in 0..count {
            on_progress(current, count);
        }
        count
    }

    /// Count integers in `[start, end]` for which `filter` holds
    ///
    /// Every element is evaluated, in ascending order, with no
    /// short-circuiting. An empty range (`start > end`) counts zero.
    pub fn count_filtered<F>(&self, start: i32, end: i32, mut filter: F) -> i32
    where
        F: FnMut(i32) -> bool,
    {
        let mut kept = 0;
        for value in start..=end {
            if filter(value) {
                kept += 1;
            }
        }
        kept
    }

    /// Sum `transform(value)` over `[start, end]`, ascending
    ///
    /// The accumulator is widened to i64 and the result saturates to the
    /// i32 range; callers must not rely on wrapping behavior.
    pub fn sum_transformed<F>(&self, start: i32, end: i32, mut transform: F) -> i32
    where
        F: FnMut(i32) -> i32,
    {
        let mut sum: i64 = 0;
        for value in start..=end {
            sum = sum.saturating_add(i64::from(transform(value)));
        }
        sum.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
    }
}
