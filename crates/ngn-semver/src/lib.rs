//! Semantic versioning for NGN instance and plugin resolution
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings, compares
//! them by semver precedence and selects the best candidate for a range
//! expression (`^`, `~`, `<`, `<=`, `>`, `>=` or a bare version).
//!
//! Every operation is a pure function of its arguments.

mod comparator;
pub mod expression;
mod semver;
mod version_parser;

pub use comparator::{AsVersion, Comparator};
pub use expression::{Expression, RangeOperator};
pub use semver::Semver;
pub use version_parser::{Identifier, ParsedVersion, VersionParser, VersionParserError};
