#![deny(warnings)]
//! Operator registry and evaluator for Polish-notation binary expressions.
//!
//! This crate provides the `BinaryOperation` trait, an `OperatorRegistry` that
//! wraps every registered operator so each result is reported to a
//! `ResultSink`, and an `Evaluator` for expressions such as `(add 1 2)`.
//!
//! ```
//! use polish_calculator::{CalcError, Evaluator};
//!
//! let evaluator = Evaluator::default();
//! assert_eq!(evaluator.evaluate("(add 1 2)").unwrap(), 3);
//! assert_eq!(evaluator.evaluate("(div 1 2)").unwrap(), 0.5);
//! assert!(matches!(
//!     evaluator.evaluate("(pow 2 3)"),
//!     Err(CalcError::UnknownOperator { .. })
//! ));
//! ```

pub mod built_in;
pub mod error;
pub mod evaluator;
pub mod expression;
pub mod logging;
pub mod operation;
pub mod registry;
pub mod sink;

mod proptests;

pub use error::{CalcError, CalcResult};
pub use evaluator::Evaluator;
pub use expression::Expression;
pub use logging::{LoggedOperation, wrap_with_logging};
pub use operation::BinaryOperation;
pub use polish_types::Number;
pub use registry::OperatorRegistry;
pub use sink::{ResultSink, StdoutSink, TracingSink};
