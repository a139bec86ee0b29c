//! Version comparison utilities

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::version_parser::{Identifier, ParsedVersion, VersionParserError};

/// Anything the engine accepts in place of a parsed version.
///
/// Strings are parsed on every call; parsed versions are borrowed as-is.
pub trait AsVersion {
    fn as_version(&self) -> Result<Cow<'_, ParsedVersion>, VersionParserError>;
}

impl AsVersion for ParsedVersion {
    fn as_version(&self) -> Result<Cow<'_, ParsedVersion>, VersionParserError> {
        Ok(Cow::Borrowed(self))
    }
}

impl AsVersion for str {
    fn as_version(&self) -> Result<Cow<'_, ParsedVersion>, VersionParserError> {
        ParsedVersion::parse(self).map(Cow::Owned)
    }
}

impl AsVersion for String {
    fn as_version(&self) -> Result<Cow<'_, ParsedVersion>, VersionParserError> {
        self.as_str().as_version()
    }
}

impl<T: AsVersion + ?Sized> AsVersion for &T {
    fn as_version(&self) -> Result<Cow<'_, ParsedVersion>, VersionParserError> {
        (**self).as_version()
    }
}

/// Comparator for semantic versions
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than<A, B>(version1: &A, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        let a = version1.as_version()?;
        let b = version2.as_version()?;
        Ok(Self::precedence(&a, &b) == Ordering::Greater)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to<A, B>(version1: &A, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        Ok(Self::equal_to(version1, version2)? || Self::greater_than(version1, version2)?)
    }

    /// Check if version1 < version2
    pub fn less_than<A, B>(version1: &A, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        Ok(!Self::greater_than_or_equal_to(version1, version2)?)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to<A, B>(version1: &A, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        Ok(Self::equal_to(version1, version2)? || Self::less_than(version1, version2)?)
    }

    /// Check if version1 == version2 (canonical forms match, build ignored)
    pub fn equal_to<A, B>(version1: &A, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        let a = version1.as_version()?;
        let b = version2.as_version()?;
        Ok(a.to_string() == b.to_string())
    }

    /// Check if version1 != version2
    pub fn not_equal_to<A, B>(version1: &A, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        Ok(!Self::equal_to(version1, version2)?)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare<A, B>(version1: &A, operator: &str, version2: &B) -> Result<bool, VersionParserError>
    where
        A: AsVersion + ?Sized,
        B: AsVersion + ?Sized,
    {
        match operator {
            ">" => Self::greater_than(version1, version2),
            ">=" => Self::greater_than_or_equal_to(version1, version2),
            "<" => Self::less_than(version1, version2),
            "<=" => Self::less_than_or_equal_to(version1, version2),
            "=" | "==" => Self::equal_to(version1, version2),
            "!=" | "<>" => Self::not_equal_to(version1, version2),
            _ => Err(VersionParserError::InvalidOperator(operator.to_string())),
        }
    }

    /// Precedence of `a` relative to `b`, ignoring build metadata.
    pub fn precedence(a: &ParsedVersion, b: &ParsedVersion) -> Ordering {
        // Numeric core, first difference decides
        let core = a
            .major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch));
        if core != Ordering::Equal {
            return core;
        }

        // A release outranks any prerelease of the same core
        match (a.prerelease.is_empty(), b.prerelease.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }

        for (x, y) in a.prerelease.iter().zip(&b.prerelease) {
            let ord = compare_identifiers(x, y);
            if ord != Ordering::Equal {
                return ord;
            }
        }

        // Shared prefix is equal: more identifiers wins
        a.prerelease.len().cmp(&b.prerelease.len())
    }
}

fn compare_identifiers(a: &Identifier, b: &Identifier) -> Ordering {
    match (a, b) {
        (Identifier::Numeric(x), Identifier::Numeric(y)) => x.cmp(y),
        (Identifier::Numeric(_), Identifier::AlphaNumeric(_)) => Ordering::Less,
        (Identifier::AlphaNumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        (Identifier::AlphaNumeric(x), Identifier::AlphaNumeric(y)) => x.as_bytes().cmp(y.as_bytes()),
    }
}

impl PartialOrd for ParsedVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ParsedVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::precedence(self, other)
    }
}
