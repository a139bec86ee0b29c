//! Parsed range expression

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::RangeOperator;
use crate::comparator::Comparator;
use crate::version_parser::{ParsedVersion, VersionParserError};

/// An optional operator prefix plus a base version, e.g. `^2.0.0-alpha`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub operator: RangeOperator,
    pub version: ParsedVersion,
}

impl Expression {
    /// Parse an expression. The text after the operator must be a complete
    /// semantic version with no surrounding whitespace.
    pub fn parse(expression: &str) -> Result<Self, VersionParserError> {
        let (operator, version) = RangeOperator::split_prefix(expression);
        let version = ParsedVersion::parse(version)?;

        Ok(Expression { operator, version })
    }

    /// Check whether a candidate falls inside this range
    pub fn matches(&self, candidate: &ParsedVersion) -> bool {
        let base = &self.version;
        let ord = Comparator::precedence(candidate, base);

        match self.operator {
            // Canonical candidate against the version as written, build included
            RangeOperator::Exact => candidate.to_string() == base.to_string_with_build(),
            RangeOperator::GreaterThan => ord == Ordering::Greater,
            RangeOperator::GreaterThanOrEqual => ord != Ordering::Less,
            RangeOperator::LessThan => ord == Ordering::Less,
            RangeOperator::LessThanOrEqual => ord != Ordering::Greater,
            RangeOperator::Caret => candidate.major == base.major && ord != Ordering::Less,
            RangeOperator::Tilde => {
                candidate.major == base.major && candidate.minor == base.minor && ord != Ordering::Less
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}

impl FromStr for Expression {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
