//! Error types for registry and evaluation operations
//!
//! Every failure is terminal for the call that produced it: nothing in this
//! crate retries or recovers, and no partial result is ever returned.

use thiserror::Error;

/// Result alias used throughout the calculator crate
pub type CalcResult<T> = Result<T, CalcError>;

/// Error type for operator registration and expression evaluation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Input does not have the `(<operator> <operand> <operand>)` shape
    #[error("Malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },

    /// Operator name is not present in the registry
    #[error("Unknown operator: {name}")]
    UnknownOperator { name: String },

    /// Division invoked with a zero divisor
    #[error("Division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i64 },

    /// Name is already taken by an operator or an alias
    #[error("Operator already registered: {name}")]
    DuplicateOperator { name: String },

    /// Name could never be matched by an expression
    #[error("Invalid operator name '{name}': expected one or more word characters")]
    InvalidOperatorName { name: String },

    /// Integer result does not fit in 64 bits
    #[error("Arithmetic overflow in {operator}({lhs}, {rhs})")]
    Overflow { operator: String, lhs: i64, rhs: i64 },
}

impl CalcError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalcError::MalformedExpression { .. } => "malformed_expression",
            CalcError::UnknownOperator { .. } => "unknown_operator",
            CalcError::DivisionByZero { .. } => "division_by_zero",
            CalcError::DuplicateOperator { .. } => "duplicate_operator",
            CalcError::InvalidOperatorName { .. } => "invalid_operator_name",
            CalcError::Overflow { .. } => "overflow",
        }
    }

    /// Whether the error was caused by the expression text itself rather than
    /// by the arithmetic
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::MalformedExpression { .. } | CalcError::UnknownOperator { .. }
        )
    }

    pub(crate) fn malformed(expression: &str, reason: impl Into<String>) -> Self {
        CalcError::MalformedExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown(name: &str) -> Self {
        CalcError::UnknownOperator { name: name.to_string() }
    }

    pub(crate) fn overflow(operator: &str, lhs: i64, rhs: i64) -> Self {
        CalcError::Overflow { operator: operator.to_string(), lhs, rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_stable() {
        assert_eq!(CalcError::unknown("pow").category(), "unknown_operator");
        assert_eq!(CalcError::DivisionByZero { dividend: 4 }.category(), "division_by_zero");
        assert_eq!(CalcError::overflow("mul", i64::MAX, 2).category(), "overflow");
    }

    #[test]
    fn messages_name_the_offending_input() {
        let err = CalcError::malformed("add 1 2", "expected '(<operator> <a> <b>)'");
        assert_eq!(
            err.to_string(),
            "Malformed expression 'add 1 2': expected '(<operator> <a> <b>)'"
        );
        assert!(err.is_input_error());
        assert!(!CalcError::DivisionByZero { dividend: 1 }.is_input_error());
    }
}
