//! Subtract Operator
//!
//! `(sub a b)` evaluates to `a - b`; the result may be negative even though
//! both operands are non-negative.
//!
use crate::error::{CalcError, CalcResult};
use crate::operation::BinaryOperation;
use polish_types::Number;

#[derive(Debug, Default)]
pub struct SubOperator;

impl BinaryOperation for SubOperator {
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        lhs.checked_sub(rhs)
            .map(Number::Integer)
            .ok_or_else(|| CalcError::overflow("sub", lhs, rhs))
    }

    fn description(&self) -> &str {
        "Returns the first operand minus the second"
    }
}
