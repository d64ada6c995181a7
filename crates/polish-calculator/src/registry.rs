//! Operator registry
//!
//! Maps operator names to logging-wrapped binary operations. A registry is
//! built once at startup, populated with `register`, and then handed to an
//! `Evaluator`, after which it is only read.

use crate::built_in::builtin_operators;
use crate::error::{CalcError, CalcResult};
use crate::expression::is_valid_operator_name;
use crate::logging::{LoggedOperation, wrap_with_logging};
use crate::operation::BinaryOperation;
use crate::sink::ResultSink;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry for named binary operators
pub struct OperatorRegistry {
    operators: HashMap<String, LoggedOperation>,
    aliases: HashMap<String, String>,
    sink: Arc<dyn ResultSink>,
}

impl std::fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperatorRegistry")
            .field("operators", &self.names())
            .field("aliases", &self.aliases)
            .finish()
    }
}

impl OperatorRegistry {
    /// Create an empty registry whose operators report to `sink`
    pub fn new(sink: Arc<dyn ResultSink>) -> Self {
        Self { operators: HashMap::new(), aliases: HashMap::new(), sink }
    }

    /// Create a registry with `add`, `sub`, `mul` and `div` registered
    pub fn with_builtins(sink: Arc<dyn ResultSink>) -> Self {
        let mut registry = Self::new(sink);

        for (name, operation) in builtin_operators() {
            registry.insert(name, operation);
        }

        registry
    }

    /// Register a new operator.
    ///
    /// The stored operator reports every successful result to the registry's
    /// sink. Names already used by an operator or an alias are rejected.
    pub fn register(
        &mut self,
        name: &str,
        operation: impl BinaryOperation + 'static,
    ) -> CalcResult<()> {
        self.register_boxed(name, Box::new(operation))
    }

    /// Register an operator that is already boxed
    pub fn register_boxed(
        &mut self,
        name: &str,
        operation: Box<dyn BinaryOperation>,
    ) -> CalcResult<()> {
        self.check_available(name)?;
        self.insert(name, operation);
        Ok(())
    }

    /// Make `alias` resolve to the operator registered as `target`.
    ///
    /// Aliases cannot point at other aliases, and share the operator namespace.
    pub fn register_alias(&mut self, alias: &str, target: &str) -> CalcResult<()> {
        if !self.operators.contains_key(target) {
            return Err(CalcError::unknown(target));
        }
        self.check_available(alias)?;

        debug!(alias, target, "Registered operator alias");
        self.aliases.insert(alias.to_string(), target.to_string());
        Ok(())
    }

    /// Look up an operator by exact, case-sensitive name or alias
    pub fn lookup(&self, name: &str) -> CalcResult<&dyn BinaryOperation> {
        let canonical = self.aliases.get(name).map_or(name, String::as_str);

        match self.operators.get(canonical) {
            Some(operation) => Ok(operation),
            None => Err(CalcError::unknown(name)),
        }
    }

    /// Whether `name` resolves to an operator
    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Description of the operator `name` resolves to
    pub fn describe(&self, name: &str) -> CalcResult<&str> {
        self.lookup(name).map(|operation| operation.description())
    }

    /// Registered operator names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operators.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Aliases as `(alias, target)` pairs, sorted by alias
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut aliases: Vec<(&str, &str)> =
            self.aliases.iter().map(|(a, t)| (a.as_str(), t.as_str())).collect();
        aliases.sort_unstable();
        aliases
    }

    /// Number of registered operators, not counting aliases
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    fn check_available(&self, name: &str) -> CalcResult<()> {
        if !is_valid_operator_name(name) {
            return Err(CalcError::InvalidOperatorName { name: name.to_string() });
        }
        if self.contains(name) {
            return Err(CalcError::DuplicateOperator { name: name.to_string() });
        }
        Ok(())
    }

    fn insert(&mut self, name: &str, operation: Box<dyn BinaryOperation>) {
        debug!(operator = name, "Registered operator");
        let wrapped = wrap_with_logging(name, operation, Arc::clone(&self.sink));
        self.operators.insert(name.to_string(), wrapped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TracingSink;
    use polish_types::Number;

    fn registry() -> OperatorRegistry {
        OperatorRegistry::with_builtins(Arc::new(TracingSink))
    }

    #[test]
    fn builtins_are_registered() {
        let registry = registry();
        assert_eq!(registry.names(), vec!["add", "div", "mul", "sub"]);
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = registry();
        assert!(registry.lookup("add").is_ok());
        assert_eq!(
            registry.lookup("ADD").err(),
            Some(CalcError::UnknownOperator { name: "ADD".to_string() })
        );
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut registry = registry();
        let err = registry
            .register("add", |a: i64, b: i64| -> CalcResult<Number> { Ok(Number::Integer(a | b)) })
            .unwrap_err();
        assert_eq!(err, CalcError::DuplicateOperator { name: "add".to_string() });

        // The first registration is kept.
        assert_eq!(registry.lookup("add").unwrap().apply(1, 2).unwrap(), 3);
    }

    #[test]
    fn names_must_be_word_characters() {
        let mut registry = registry();
        for name in ["", "+", "two words", "a-b"] {
            assert_eq!(
                registry.register_alias(name, "add").unwrap_err(),
                CalcError::InvalidOperatorName { name: name.to_string() }
            );
        }
    }

    #[test]
    fn aliases_resolve_to_target() {
        let mut registry = registry();
        registry.register_alias("plus", "add").unwrap();

        assert!(registry.contains("plus"));
        assert_eq!(registry.lookup("plus").unwrap().apply(2, 2).unwrap(), 4);
        assert_eq!(registry.describe("plus").unwrap(), registry.describe("add").unwrap());
        assert_eq!(registry.aliases(), vec![("plus", "add")]);
        // Aliases do not count as operators.
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn alias_rules() {
        let mut registry = registry();
        registry.register_alias("plus", "add").unwrap();

        assert_eq!(
            registry.register_alias("sum", "plus").unwrap_err(),
            CalcError::UnknownOperator { name: "plus".to_string() }
        );
        assert_eq!(
            registry.register_alias("plus", "mul").unwrap_err(),
            CalcError::DuplicateOperator { name: "plus".to_string() }
        );
        assert_eq!(
            registry.register_alias("sub", "add").unwrap_err(),
            CalcError::DuplicateOperator { name: "sub".to_string() }
        );
    }
}
