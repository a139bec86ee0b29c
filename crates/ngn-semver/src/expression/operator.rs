//! Operator prefixes for range expressions

use std::fmt;

/// Prefix of a range expression. A bare version is [`RangeOperator::Exact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeOperator {
    /// No prefix: exact match
    Exact,
    /// Same major, at least the base version (^)
    Caret,
    /// Same major and minor, at least the base version (~)
    Tilde,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl RangeOperator {
    /// Split a leading operator off an expression.
    ///
    /// Two-character operators are tried first so `<=` is never read as `<`.
    pub fn split_prefix(expression: &str) -> (RangeOperator, &str) {
        const PREFIXES: [(&str, RangeOperator); 6] = [
            ("<=", RangeOperator::LessThanOrEqual),
            (">=", RangeOperator::GreaterThanOrEqual),
            ("<", RangeOperator::LessThan),
            (">", RangeOperator::GreaterThan),
            ("^", RangeOperator::Caret),
            ("~", RangeOperator::Tilde),
        ];

        for (prefix, operator) in PREFIXES {
            if let Some(rest) = expression.strip_prefix(prefix) {
                return (operator, rest);
            }
        }

        (RangeOperator::Exact, expression)
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeOperator::Exact => "",
            RangeOperator::Caret => "^",
            RangeOperator::Tilde => "~",
            RangeOperator::LessThan => "<",
            RangeOperator::LessThanOrEqual => "<=",
            RangeOperator::GreaterThan => ">",
            RangeOperator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported prefixes
    pub fn supported_operators() -> &'static [&'static str] {
        &["^", "~", "<", "<=", ">", ">="]
    }
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_prefix() {
        assert_eq!(RangeOperator::split_prefix("^1.0.0"), (RangeOperator::Caret, "1.0.0"));
        assert_eq!(RangeOperator::split_prefix("~1.0.0"), (RangeOperator::Tilde, "1.0.0"));
        assert_eq!(RangeOperator::split_prefix("<1.0.0"), (RangeOperator::LessThan, "1.0.0"));
        assert_eq!(RangeOperator::split_prefix("<=1.0.0"), (RangeOperator::LessThanOrEqual, "1.0.0"));
        assert_eq!(RangeOperator::split_prefix(">1.0.0"), (RangeOperator::GreaterThan, "1.0.0"));
        assert_eq!(RangeOperator::split_prefix(">=1.0.0"), (RangeOperator::GreaterThanOrEqual, "1.0.0"));
        assert_eq!(RangeOperator::split_prefix("1.0.0"), (RangeOperator::Exact, "1.0.0"));
        // Only one operator is consumed
        assert_eq!(RangeOperator::split_prefix("^~1.0.0"), (RangeOperator::Caret, "~1.0.0"));
    }

    #[test]
    fn test_display_round_trips_prefix() {
        for op in RangeOperator::supported_operators() {
            let (parsed, rest) = RangeOperator::split_prefix(op);
            assert_eq!(parsed.to_string(), *op);
            assert!(rest.is_empty());
        }
    }
}
