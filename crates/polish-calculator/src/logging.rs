use crate::error::CalcResult;
use crate::operation::BinaryOperation;
use crate::sink::ResultSink;
use polish_types::Number;
use std::sync::Arc;

/// An operator whose every successful call is reported to a `ResultSink`.
pub struct LoggedOperation {
    name: String,
    inner: Box<dyn BinaryOperation>,
    sink: Arc<dyn ResultSink>,
}

impl std::fmt::Debug for LoggedOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggedOperation").field("name", &self.name).finish_non_exhaustive()
    }
}

impl BinaryOperation for LoggedOperation {
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        let result = self.inner.apply(lhs, rhs)?;
        self.sink.record(&self.name, &result);
        Ok(result)
    }

    fn description(&self) -> &str {
        self.inner.description()
    }
}

/// Wraps `operation` so that each call computes the raw result, records it to
/// `sink`, and then returns it. Failed calls record nothing.
pub fn wrap_with_logging(
    name: &str,
    operation: Box<dyn BinaryOperation>,
    sink: Arc<dyn ResultSink>,
) -> LoggedOperation {
    LoggedOperation { name: name.to_string(), inner: operation, sink }
}
