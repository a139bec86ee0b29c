//! Framework instances and the capabilities they export

use indexmap::IndexMap;
use ngn_semver::{ParsedVersion, VersionParserError};

/// One exported member of an instance.
///
/// Namespaces hold nested members so capabilities can be addressed with
/// dotted paths such as `Middleware.Handler`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Leaf,
    Namespace(IndexMap<String, Member>),
}

/// A registered framework instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub version: ParsedVersion,
    pub members: IndexMap<String, Member>,
}

impl Instance {
    pub fn new(version: &str) -> Result<Self, VersionParserError> {
        Ok(Instance {
            version: ParsedVersion::parse(version)?,
            members: IndexMap::new(),
        })
    }

    /// Add a member by dotted path, creating intermediate namespaces.
    ///
    /// A leaf that gains children is promoted to a namespace.
    pub fn with_member(mut self, path: &str) -> Self {
        self.add_member(path);
        self
    }

    pub fn add_member(&mut self, path: &str) {
        let mut members = &mut self.members;
        let mut segments = segments(path).peekable();

        while let Some(segment) = segments.next() {
            let entry = members.entry(segment.to_string()).or_insert(Member::Leaf);
            if segments.peek().is_none() {
                return;
            }
            if matches!(entry, Member::Leaf) {
                *entry = Member::Namespace(IndexMap::new());
            }
            members = match entry {
                Member::Namespace(children) => children,
                Member::Leaf => return,
            };
        }
    }

    /// Look up a member by dotted path
    pub fn member(&self, path: &str) -> Option<&Member> {
        let mut segments = segments(path);
        let mut current = self.members.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Member::Namespace(children) => children.get(segment)?,
                Member::Leaf => return None,
            };
        }

        Some(current)
    }

    pub fn has_member(&self, path: &str) -> bool {
        self.member(path).is_some()
    }
}

/// Dotted path segments, skipping empty ones so `a..b` and `a.b` agree
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|s| !s.is_empty())
}

/// Metadata a plugin records about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginMeta {
    pub name: String,
    pub version: ParsedVersion,
    pub description: Option<String>,
}

impl PluginMeta {
    pub fn new(name: &str, version: &str) -> Result<Self, VersionParserError> {
        Ok(PluginMeta {
            name: name.to_string(),
            version: ParsedVersion::parse(version)?,
            description: None,
        })
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
