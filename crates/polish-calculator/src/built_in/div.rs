//! Divide Operator
//!
//! True division: the quotient is always a float, so `(div 4 2)` is `2.0`
//! and `(div 1 2)` is `0.5`.
//!
use crate::error::{CalcError, CalcResult};
use crate::operation::BinaryOperation;
use polish_types::Number;

#[derive(Debug, Default)]
pub struct DivOperator;

impl BinaryOperation for DivOperator {
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        if rhs == 0 {
            return Err(CalcError::DivisionByZero { dividend: lhs });
        }
        Ok(Number::Float(lhs as f64 / rhs as f64))
    }

    fn description(&self) -> &str {
        "Returns the first operand divided by the second as a float"
    }
}
