//! Built-in operators registered by `OperatorRegistry::with_builtins`.

use crate::operation::BinaryOperation;

pub mod add;
pub mod div;
pub mod mul;
pub mod sub;

/// The four built-in operators, keyed by the name expressions use.
pub fn builtin_operators() -> Vec<(&'static str, Box<dyn BinaryOperation>)> {
    vec![
        ("add", Box::new(add::AddOperator) as Box<dyn BinaryOperation>),
        ("sub", Box::new(sub::SubOperator) as Box<dyn BinaryOperation>),
        ("mul", Box::new(mul::MulOperator) as Box<dyn BinaryOperation>),
        ("div", Box::new(div::DivOperator) as Box<dyn BinaryOperation>),
    ]
}
