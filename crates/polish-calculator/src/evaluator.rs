//! Expression evaluator
//!
//! Parses one expression, resolves its operator in the registry and applies
//! it. Evaluation keeps no state between calls.

use crate::error::CalcResult;
use crate::expression::Expression;
use crate::registry::OperatorRegistry;
use crate::sink::{ResultSink, TracingSink};
use polish_types::Number;
use std::sync::Arc;
use tracing::debug;

/// Main evaluator for Polish-notation binary expressions
#[derive(Debug)]
pub struct Evaluator {
    registry: OperatorRegistry,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(OperatorRegistry::with_builtins(Arc::new(TracingSink)))
    }
}

impl Evaluator {
    /// Create an evaluator over a fully populated registry
    pub fn new(registry: OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Create an evaluator with the built-in operators reporting to `sink`
    pub fn with_sink(sink: Arc<dyn ResultSink>) -> Self {
        Self::new(OperatorRegistry::with_builtins(sink))
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Evaluate a single `(<operator> <lhs> <rhs>)` expression
    pub fn evaluate(&self, source: &str) -> CalcResult<Number> {
        let expression = Expression::parse(source)?;
        self.evaluate_expression(&expression)
    }

    /// Evaluate an already parsed expression
    pub fn evaluate_expression(&self, expression: &Expression) -> CalcResult<Number> {
        debug!(
            operator = %expression.operator,
            lhs = expression.lhs,
            rhs = expression.rhs,
            "Evaluating expression"
        );

        let operation = self.registry.lookup(&expression.operator)?;
        operation.apply(expression.lhs, expression.rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;

    #[test]
    fn evaluates_builtins() {
        let evaluator = Evaluator::default();
        assert_eq!(evaluator.evaluate("(add 1 2)").unwrap(), 3);
        assert_eq!(evaluator.evaluate("(mul 1 2)").unwrap(), 2);
        assert_eq!(evaluator.evaluate("(div 4 2)").unwrap(), 2);
        assert_eq!(evaluator.evaluate("(sub 5 2)").unwrap(), 3);
    }

    #[test]
    fn parse_errors_win_over_lookup() {
        let evaluator = Evaluator::default();
        assert!(matches!(
            evaluator.evaluate("(pow 2 -3)"),
            Err(CalcError::MalformedExpression { .. })
        ));
    }

    #[test]
    fn evaluates_parsed_expression() {
        let evaluator = Evaluator::default();
        let expression = Expression { operator: "sub".to_string(), lhs: 2, rhs: 5 };
        assert_eq!(evaluator.evaluate_expression(&expression).unwrap(), -3);
    }
}
