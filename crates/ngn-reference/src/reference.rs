//! Plugin-side handle onto a resolved instance

use ngn_semver::{Comparator, ParsedVersion, Semver};

use crate::error::ReferenceError;
use crate::instance::{Instance, Member, PluginMeta};
use crate::registry::InstanceRegistry;

/// A plugin's view of the framework instance it was resolved against.
///
/// Resolution happens once, in [`Reference::new`]. A reference with no
/// matching instance is still valid; the checks below report it.
#[derive(Debug, Clone)]
pub struct Reference<'a> {
    registry: &'a InstanceRegistry,
    base: Option<&'a Instance>,
}

impl<'a> Reference<'a> {
    /// Bind to the instance selected by `expression`, or the highest
    /// registered instance when no expression is given.
    pub fn new(registry: &'a InstanceRegistry, expression: Option<&str>) -> Result<Self, ReferenceError> {
        let base = registry.resolve(expression)?;
        Ok(Reference { registry, base })
    }

    pub fn instance(&self) -> Option<&'a Instance> {
        self.base
    }

    pub fn version(&self) -> Option<&'a ParsedVersion> {
        self.base.map(|i| &i.version)
    }

    pub fn is_available(&self) -> bool {
        self.base.is_some()
    }

    /// Exported member by dotted path
    pub fn member(&self, path: &str) -> Option<&'a Member> {
        self.base.and_then(|i| i.member(path))
    }

    /// Plugin recorded on the bound instance
    pub fn plugin(&self, name: &str) -> Option<&'a PluginMeta> {
        let version = self.version()?;
        self.registry.plugin(version, name)
    }

    pub fn plugins(&self) -> Vec<&'a PluginMeta> {
        match self.version() {
            Some(version) => self.registry.plugins(version),
            None => Vec::new(),
        }
    }

    /// True when every path names a member of the bound instance
    pub fn exist(&self, paths: &[&str]) -> bool {
        self.missing(paths).is_empty()
    }

    /// Fail unless every path names a member of the bound instance
    pub fn requires(&self, paths: &[&str]) -> Result<(), ReferenceError> {
        if paths.is_empty() {
            return Ok(());
        }

        if !self.is_available() {
            return Err(ReferenceError::InstanceNotFound);
        }

        let missing = self.missing(paths);
        if !missing.is_empty() {
            log::debug!("Missing NGN elements: {:?}", missing);
            return Err(ReferenceError::MissingCapabilities(missing));
        }

        Ok(())
    }

    /// Fail if the bound instance is older than `version`.
    ///
    /// An empty `version` places no bound and always succeeds.
    pub fn min(&self, version: &str) -> Result<(), ReferenceError> {
        if version.is_empty() {
            return Ok(());
        }

        let base = self.version().ok_or(ReferenceError::InstanceNotFound)?;
        let required = ParsedVersion::parse(version)?;

        if Comparator::greater_than_or_equal_to(base, &required)? {
            return Ok(());
        }

        Err(ReferenceError::VersionTooOld {
            required: required.to_string(),
            found: base.to_string(),
        })
    }

    /// Check a plugin's declared version against a range expression
    pub fn require_plugin(&self, name: &str, range: &str) -> Result<&'a PluginMeta, ReferenceError> {
        if !self.is_available() {
            return Err(ReferenceError::InstanceNotFound);
        }

        let plugin = self
            .plugin(name)
            .ok_or_else(|| ReferenceError::PluginNotFound(name.to_string()))?;

        if !Semver::satisfies(&plugin.version, range)? {
            return Err(ReferenceError::PluginVersionMismatch {
                name: name.to_string(),
                version: plugin.version.to_string(),
                range: range.to_string(),
            });
        }

        Ok(plugin)
    }

    fn missing(&self, paths: &[&str]) -> Vec<String> {
        paths
            .iter()
            .filter(|path| self.member(path).is_none())
            .map(|path| path.to_string())
            .collect()
    }
}
