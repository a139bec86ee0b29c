//! Semver facade providing high-level version operations

use std::collections::HashSet;

use crate::comparator::AsVersion;
use crate::expression::Expression;
use crate::version_parser::{ParsedVersion, VersionParserError};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<ParsedVersion, VersionParserError> {
        ParsedVersion::parse(version)
    }

    /// Check if a version satisfies a range expression
    pub fn satisfies<V: AsVersion + ?Sized>(version: &V, expression: &str) -> Result<bool, VersionParserError> {
        let expression = Expression::parse(expression)?;
        let version = version.as_version()?;
        Ok(expression.matches(&version))
    }

    /// Sort versions in descending precedence, dropping duplicates.
    ///
    /// Returns canonical strings; build metadata does not survive.
    pub fn sort<V: AsVersion>(versions: &[V]) -> Result<Vec<String>, VersionParserError> {
        Ok(Self::sort_versions(versions)?
            .into_iter()
            .map(|v| v.to_string())
            .collect())
    }

    /// Sort versions in ascending precedence, dropping duplicates
    pub fn sort_ascending<V: AsVersion>(versions: &[V]) -> Result<Vec<String>, VersionParserError> {
        let mut sorted = Self::sort(versions)?;
        sorted.reverse();
        Ok(sorted)
    }

    /// Descending, de-duplicated parsed versions.
    ///
    /// Of several entries sharing a canonical form the first one given is kept.
    pub fn sort_versions<V: AsVersion>(versions: &[V]) -> Result<Vec<ParsedVersion>, VersionParserError> {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(versions.len());

        for version in versions {
            let parsed = version.as_version()?.into_owned();
            if seen.insert(parsed.to_string()) {
                unique.push(parsed);
            }
        }

        unique.sort_by(|a, b| b.cmp(a));
        Ok(unique)
    }

    /// Pick the highest candidate matching `expression`.
    ///
    /// `Ok(None)` means nothing matched or no candidates were given; a
    /// malformed expression or candidate is an error.
    pub fn select<V: AsVersion>(expression: &str, candidates: &[V]) -> Result<Option<String>, VersionParserError> {
        Ok(Self::select_version(expression, candidates)?.map(|v| v.to_string()))
    }

    /// Same as [`Semver::select`] but returns the parsed candidate
    pub fn select_version<V: AsVersion>(
        expression: &str,
        candidates: &[V],
    ) -> Result<Option<ParsedVersion>, VersionParserError> {
        if candidates.is_empty() {
            log::debug!("No candidates to select {} from", expression);
            return Ok(None);
        }

        let list = Self::sort_versions(candidates)?;
        let expression = Expression::parse(expression)?;

        let selected = list.into_iter().find(|candidate| expression.matches(candidate));

        match &selected {
            Some(v) => log::debug!("Selected {} for {}", v, expression),
            None => log::debug!("No candidate satisfies {}", expression),
        }

        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort() {
        assert_eq!(
            Semver::sort(&["1.2.0", "1.10.0", "1.9.0"]).unwrap(),
            vec!["1.10.0", "1.9.0", "1.2.0"]
        );

        let sorted = Semver::sort(&["1.0.0", "0.1.0", "0.1.0", "3.2.1", "2.4.0-alpha", "2.4.0"]).unwrap();
        assert_eq!(sorted, vec!["3.2.1", "2.4.0", "2.4.0-alpha", "1.0.0", "0.1.0"]);
    }

    #[test]
    fn test_sort_collapses_build_metadata() {
        let sorted = Semver::sort(&["1.0.0+a", "1.0.0+b", "1.0.0"]).unwrap();
        assert_eq!(sorted, vec!["1.0.0"]);

        let parsed = Semver::sort_versions(&["1.0.0+a", "1.0.0+b"]).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].to_string_with_build(), "1.0.0+a");
    }

    #[test]
    fn test_sort_ascending() {
        let sorted = Semver::sort_ascending(&["1.0.0", "1.0.0-rc.1", "0.9.0"]).unwrap();
        assert_eq!(sorted, vec!["0.9.0", "1.0.0-rc.1", "1.0.0"]);
    }

    #[test]
    fn test_sort_empty_and_invalid() {
        let empty: [&str; 0] = [];
        assert!(Semver::sort(&empty).unwrap().is_empty());
        assert_eq!(
            Semver::sort(&["1.0.0", "1.0"]),
            Err(VersionParserError::InvalidVersionFormat("1.0".to_string()))
        );
    }

    #[test]
    fn test_sort_parsed_and_strings() {
        let versions = vec![
            ParsedVersion::parse("1.0.0").unwrap(),
            ParsedVersion::parse("2.0.0").unwrap(),
        ];
        assert_eq!(Semver::sort(&versions).unwrap(), vec!["2.0.0", "1.0.0"]);

        let owned = vec!["0.1.0".to_string(), "0.2.0".to_string()];
        assert_eq!(Semver::sort(&owned).unwrap(), vec!["0.2.0", "0.1.0"]);
    }

    #[test]
    fn test_select_caret() {
        assert_eq!(
            Semver::select("^2.0.0-alpha", &["2.0.0-alpha.3", "2.0.0-alpha.5"]).unwrap(),
            Some("2.0.0-alpha.5".to_string())
        );
        assert_eq!(
            Semver::select("^1.2.0", &["1.1.0", "1.4.2", "2.0.0"]).unwrap(),
            Some("1.4.2".to_string())
        );
        assert_eq!(Semver::select("^9.0.0", &["1.0.0"]).unwrap(), None);
    }

    #[test]
    fn test_select_tilde() {
        assert_eq!(
            Semver::select("~1.2.0", &["1.2.5", "1.3.0"]).unwrap(),
            Some("1.2.5".to_string())
        );
        assert_eq!(Semver::select("~1.2.6", &["1.2.5", "1.3.0"]).unwrap(), None);
    }

    #[test]
    fn test_select_exact() {
        assert_eq!(
            Semver::select("2.0.0", &["1.9.9", "2.0.0"]).unwrap(),
            Some("2.0.0".to_string())
        );
        assert_eq!(Semver::select("2.0.1", &["1.9.9", "2.0.0"]).unwrap(), None);
        assert_eq!(
            Semver::select("2.0.0", &["2.0.0+build.7"]).unwrap(),
            Some("2.0.0".to_string())
        );
        // A canonical candidate never carries the expression's build metadata
        assert_eq!(Semver::select("2.0.0+x", &["1.9.9", "2.0.0"]).unwrap(), None);
    }

    #[test]
    fn test_select_rejects_padded_expressions() {
        assert_eq!(
            Semver::select(" ^ 1.0.0 ", &["1.2.0"]),
            Err(VersionParserError::InvalidVersionFormat(" ^ 1.0.0 ".to_string()))
        );
        assert!(Semver::select("1.0.0 ", &["1.0.0"]).is_err());
        assert!(Semver::satisfies("1.2.0", ">=\t1.0.0").is_err());
        assert!(Semver::parse("1.0.0 ").is_err());
    }

    #[test]
    fn test_select_comparison_operators() {
        let candidates = ["1.0.0", "1.5.0", "2.0.0", "2.1.0-beta"];
        assert_eq!(Semver::select(">1.5.0", &candidates).unwrap(), Some("2.1.0-beta".to_string()));
        assert_eq!(Semver::select(">=1.5.0", &candidates).unwrap(), Some("2.1.0-beta".to_string()));
        assert_eq!(Semver::select("<2.0.0", &candidates).unwrap(), Some("1.5.0".to_string()));
        assert_eq!(Semver::select("<=2.0.0", &candidates).unwrap(), Some("2.0.0".to_string()));
        assert_eq!(Semver::select("<1.0.0", &candidates).unwrap(), None);
        assert_eq!(Semver::select(">2.1.0", &candidates).unwrap(), None);
    }

    #[test]
    fn test_select_without_candidates() {
        let empty: [&str; 0] = [];
        assert_eq!(Semver::select("^1.0.0", &empty).unwrap(), None);
        // Nothing to select from, so the expression is not inspected
        assert_eq!(Semver::select("garbage", &empty).unwrap(), None);
    }

    #[test]
    fn test_select_propagates_invalid_versions() {
        assert_eq!(
            Semver::select("^1.0", &["1.0.0"]),
            Err(VersionParserError::InvalidVersionFormat("1.0".to_string()))
        );
        assert_eq!(
            Semver::select("^1.0.0", &["1.0.0", "1.02.0"]),
            Err(VersionParserError::InvalidVersionFormat("1.02.0".to_string()))
        );
    }

    #[test]
    fn test_select_version_keeps_build() {
        let selected = Semver::select_version("^1.0.0", &["1.1.0+linux", "1.0.0"]).unwrap().unwrap();
        assert_eq!(selected.to_string_with_build(), "1.1.0+linux");
    }

    #[test]
    fn test_satisfies() {
        assert!(Semver::satisfies("1.4.0", "^1.2.0").unwrap());
        assert!(!Semver::satisfies("2.0.0", "^1.2.0").unwrap());
        assert!(Semver::satisfies("1.2.9", "~1.2.3").unwrap());
        assert!(Semver::satisfies("1.2.3", "1.2.3").unwrap());

        let parsed = ParsedVersion::parse("0.5.0").unwrap();
        assert!(Semver::satisfies(&parsed, "<1.0.0").unwrap());
        assert!(Semver::satisfies("1.2.3", "^1").is_err());
    }
}
