//! Parser for single binary expressions
//!
//! The accepted grammar is deliberately flat: an opening parenthesis, an
//! operator name made of word characters, one space, an unsigned decimal
//! operand, one space, another unsigned decimal operand, and a closing
//! parenthesis. The whole input must match; there is no nesting and no
//! whitespace tolerance.

use crate::error::{CalcError, CalcResult};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static EXPRESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\((?P<operator>\w+) (?P<lhs>[0-9]+) (?P<rhs>[0-9]+)\)$")
        .expect("expression pattern is valid")
});

static OPERATOR_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("operator name pattern is valid"));

/// Whether `name` could appear in the operator position of an expression
pub fn is_valid_operator_name(name: &str) -> bool {
    OPERATOR_NAME_RE.is_match(name)
}

/// A parsed `(<operator> <lhs> <rhs>)` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: String,
    pub lhs: i64,
    pub rhs: i64,
}

impl Expression {
    /// Parse an expression, rejecting anything that does not match the grammar
    pub fn parse(source: &str) -> CalcResult<Self> {
        let Some(captures) = EXPRESSION_RE.captures(source) else {
            return Err(CalcError::malformed(source, "expected '(<operator> <integer> <integer>)'"));
        };

        let lhs = parse_operand(source, &captures["lhs"])?;
        let rhs = parse_operand(source, &captures["rhs"])?;

        Ok(Self { operator: captures["operator"].to_string(), lhs, rhs })
    }
}

fn parse_operand(source: &str, digits: &str) -> CalcResult<i64> {
    // The pattern only admits ASCII digits, so the only possible failure is range.
    digits
        .parse::<i64>()
        .map_err(|_| CalcError::malformed(source, format!("operand {digits} does not fit in 64 bits")))
}

impl FromStr for Expression {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.operator, self.lhs, self.rhs)
    }
}
