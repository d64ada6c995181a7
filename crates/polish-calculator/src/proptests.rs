//! Property-based tests for expression evaluation.
