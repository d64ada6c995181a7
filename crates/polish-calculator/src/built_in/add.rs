//! Add Operator
//!
//! `(add a b)` evaluates to `a + b` as an integer.
//!
use crate::error::{CalcError, CalcResult};
use crate::operation::BinaryOperation;
use polish_types::Number;

#[derive(Debug, Default)]
pub struct AddOperator;

impl BinaryOperation for AddOperator {
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        lhs.checked_add(rhs)
            .map(Number::Integer)
            .ok_or_else(|| CalcError::overflow("add", lhs, rhs))
    }

    fn description(&self) -> &str {
        "Returns the sum of both operands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds() {
        assert_eq!(AddOperator.apply(1, 2).unwrap(), Number::Integer(3));
        assert_eq!(AddOperator.apply(0, 0).unwrap(), Number::Integer(0));
    }

    #[test]
    fn reports_overflow() {
        assert_eq!(
            AddOperator.apply(i64::MAX, 1).unwrap_err(),
            CalcError::overflow("add", i64::MAX, 1)
        );
    }
}
