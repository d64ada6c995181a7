//! Multiply Operator
//!
use crate::error::{CalcError, CalcResult};
use crate::operation::BinaryOperation;
use polish_types::Number;

#[derive(Debug, Default)]
pub struct MulOperator;

impl BinaryOperation for MulOperator {
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        lhs.checked_mul(rhs)
            .map(Number::Integer)
            .ok_or_else(|| CalcError::overflow("mul", lhs, rhs))
    }

    fn description(&self) -> &str {
        "Returns the product of both operands"
    }
}
