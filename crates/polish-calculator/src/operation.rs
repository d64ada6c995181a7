use crate::error::CalcResult;
use polish_types::Number;

/// A trait for binary operators.
/// Operators are stateless and thread-safe.
pub trait BinaryOperation: Send + Sync {
    /// Applies the operator to two integer operands.
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number>;

    /// Get a description of this operator
    fn description(&self) -> &str {
        "custom operator"
    }
}

/// Plain closures can be registered directly:
///
/// ```
/// use polish_calculator::{BinaryOperation, CalcResult, Number};
///
/// let max = |a: i64, b: i64| -> CalcResult<Number> { Ok(Number::Integer(a.max(b))) };
/// assert_eq!(max.apply(3, 7).unwrap(), 7);
/// ```
impl<F> BinaryOperation for F
where
    F: Fn(i64, i64) -> CalcResult<Number> + Send + Sync,
{
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        self(lhs, rhs)
    }
}
