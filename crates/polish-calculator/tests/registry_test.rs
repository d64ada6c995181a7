use std::sync::{Arc, Mutex};

use polish_calculator::{
    BinaryOperation, CalcError, CalcResult, Evaluator, Number, OperatorRegistry, ResultSink,
};

#[derive(Default)]
struct RecordingSink {
    records: Mutex<Vec<(String, String)>>,
}

impl ResultSink for RecordingSink {
    fn record(&self, operator: &str, value: &Number) {
        self.records.lock().unwrap().push((operator.to_string(), value.to_string()));
    }
}

struct ModOperator;

impl BinaryOperation for ModOperator {
    fn apply(&self, lhs: i64, rhs: i64) -> CalcResult<Number> {
        if rhs == 0 {
            return Err(CalcError::DivisionByZero { dividend: lhs });
        }
        Ok(Number::Integer(lhs % rhs))
    }

    fn description(&self) -> &str {
        "Returns the remainder of the division"
    }
}

#[test]
fn custom_operators_are_evaluated_and_logged() {
    let sink = Arc::new(RecordingSink::default());
    let mut registry = OperatorRegistry::with_builtins(sink.clone());
    registry.register("mod", ModOperator).unwrap();
    registry
        .register("pow", |a: i64, b: i64| -> CalcResult<Number> {
            let exp = u32::try_from(b).map_err(|_| CalcError::Overflow {
                operator: "pow".to_string(),
                lhs: a,
                rhs: b,
            })?;
            a.checked_pow(exp).map(Number::Integer).ok_or(CalcError::Overflow {
                operator: "pow".to_string(),
                lhs: a,
                rhs: b,
            })
        })
        .unwrap();

    let evaluator = Evaluator::new(registry);

    assert_eq!(evaluator.evaluate("(mod 7 3)").unwrap(), 1);
    assert_eq!(evaluator.evaluate("(pow 2 3)").unwrap(), 8);
    assert_eq!(evaluator.registry().describe("mod").unwrap(), "Returns the remainder of the division");
    assert_eq!(evaluator.registry().describe("pow").unwrap(), "custom operator");

    let records = sink.records.lock().unwrap().clone();
    assert_eq!(
        records,
        vec![("mod".to_string(), "1".to_string()), ("pow".to_string(), "8".to_string())]
    );
}

#[test]
fn aliases_log_under_canonical_name() {
    let sink = Arc::new(RecordingSink::default());
    let mut registry = OperatorRegistry::with_builtins(sink.clone());
    registry.register_alias("plus", "add").unwrap();
    registry.register_alias("over", "div").unwrap();

    let evaluator = Evaluator::new(registry);

    assert_eq!(evaluator.evaluate("(plus 40 2)").unwrap(), 42);
    assert_eq!(evaluator.evaluate("(over 1 4)").unwrap(), 0.25);

    let records = sink.records.lock().unwrap().clone();
    assert_eq!(
        records,
        vec![("add".to_string(), "42".to_string()), ("div".to_string(), "0.25".to_string())]
    );
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = OperatorRegistry::new(Arc::new(RecordingSink::default()));
    assert!(registry.is_empty());

    let evaluator = Evaluator::new(registry);
    assert_eq!(
        evaluator.evaluate("(add 1 2)").unwrap_err(),
        CalcError::UnknownOperator { name: "add".to_string() }
    );
}

#[test]
fn registration_rejects_duplicates() {
    let mut registry = OperatorRegistry::new(Arc::new(RecordingSink::default()));
    registry.register("mod", ModOperator).unwrap();

    assert_eq!(
        registry.register("mod", ModOperator).unwrap_err(),
        CalcError::DuplicateOperator { name: "mod".to_string() }
    );
    assert_eq!(registry.names(), vec!["mod"]);
}
