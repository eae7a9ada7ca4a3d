//! Integer addition used by the demo runner.

/// Two-integer adder consumed by the demo runner.
pub trait Adder {
    /// Return the sum of `lhs` and `rhs`.
    fn add(&self, lhs: i32, rhs: i32) -> i32;
}

impl<F> Adder for F
where
    F: Fn(i32, i32) -> i32,
{
    fn add(&self, lhs: i32, rhs: i32) -> i32 {
        self(lhs, rhs)
    }
}

/// The production adder, backed by [`calculate`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Adder for Calculator {
    fn add(&self, lhs: i32, rhs: i32) -> i32 {
        calculate(lhs, rhs)
    }
}

/// Add two integers.
///
/// Overflow wraps instead of panicking in debug builds.
pub fn calculate(lhs: i32, rhs: i32) -> i32 {
    lhs.wrapping_add(rhs)
}
