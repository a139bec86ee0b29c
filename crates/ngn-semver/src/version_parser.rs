//! Version parsing module

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("Invalid semantic version \"{0}\"")]
    InvalidVersionFormat(String),
    #[error("Invalid operator \"{0}\"")]
    InvalidOperator(String),
}

lazy_static! {
    // MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD], anchored on both ends.
    static ref SEMVER_RE: Regex = Regex::new(concat!(
        r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)",
        r"(?:-((?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*))?",
        r"(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    ))
    .unwrap();
}

/// A single dot-separated prerelease identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// All digits, no leading zero
    Numeric(u64),
    /// Contains at least one letter or hyphen
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(part: &str) -> Option<Self> {
        if part.bytes().all(|b| b.is_ascii_digit()) {
            part.parse().ok().map(Identifier::Numeric)
        } else {
            Some(Identifier::AlphaNumeric(part.to_string()))
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

/// Structured form of a semantic version string.
///
/// Equality, hashing and ordering only look at `major.minor.patch[-prerelease]`;
/// build metadata is carried for display.
#[derive(Debug, Clone)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Empty for a release version
    pub prerelease: Vec<Identifier>,
    /// Empty when no build metadata was given
    pub build: Vec<String>,
}

impl ParsedVersion {
    /// Create a release version with no build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
        }
    }

    /// Parse a version string
    pub fn parse(text: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(text)
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Dot-joined prerelease identifiers, if any
    pub fn prerelease_str(&self) -> Option<String> {
        if self.prerelease.is_empty() {
            return None;
        }
        Some(join(&self.prerelease))
    }

    /// Dot-joined build metadata, if any
    pub fn build_str(&self) -> Option<String> {
        if self.build.is_empty() {
            return None;
        }
        Some(self.build.join("."))
    }

    /// Canonical form followed by `+build` when build metadata is present
    pub fn to_string_with_build(&self) -> String {
        match self.build_str() {
            Some(build) => format!("{}+{}", self, build),
            None => self.to_string(),
        }
    }
}

fn join<T: fmt::Display>(parts: &[T]) -> String {
    parts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = self.prerelease_str() {
            write!(f, "-{}", pre)?;
        }
        Ok(())
    }
}

impl PartialEq for ParsedVersion {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl Eq for ParsedVersion {}

impl Hash for ParsedVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl FromStr for ParsedVersion {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParsedVersion::parse(s)
    }
}

/// Parser turning version strings into [`ParsedVersion`] values
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    ///
    /// The whole string must match; there is no trimming, `v` prefix or
    /// padding of partial versions.
    pub fn parse(&self, version: &str) -> Result<ParsedVersion, VersionParserError> {
        let invalid = || VersionParserError::InvalidVersionFormat(version.to_string());

        let caps = SEMVER_RE.captures(version).ok_or_else(invalid)?;

        let number = |idx: usize| -> Result<u64, VersionParserError> {
            caps.get(idx)
                .and_then(|m| m.as_str().parse().ok())
                .ok_or_else(invalid)
        };

        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        let prerelease = match caps.get(4) {
            Some(m) => m
                .as_str()
                .split('.')
                .map(Identifier::parse)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(invalid)?,
            None => Vec::new(),
        };

        let build = caps
            .get(5)
            .map(|m| m.as_str().split('.').map(str::to_string).collect())
            .unwrap_or_default();

        log::trace!("Parsed version {} as {}.{}.{}", version, major, minor, patch);

        Ok(ParsedVersion {
            major,
            minor,
            patch,
            prerelease,
            build,
        })
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}
