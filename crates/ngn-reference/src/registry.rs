//! Explicit registry of framework instances and their plugins

use indexmap::IndexMap;
use ngn_semver::{ParsedVersion, Semver};

use crate::error::ReferenceError;
use crate::instance::{Instance, PluginMeta};

#[derive(Debug, Clone)]
struct Entry {
    instance: Instance,
    plugins: IndexMap<String, PluginMeta>,
}

/// Instances available to references, keyed by canonical version.
///
/// The registry is an ordinary value; whoever needs lookups receives it by
/// reference.
#[derive(Debug, Clone, Default)]
pub struct InstanceRegistry {
    entries: IndexMap<String, Entry>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instance, returning the one it replaced if the canonical
    /// version was already present. Plugins of a replaced instance are kept.
    pub fn register(&mut self, instance: Instance) -> Option<Instance> {
        let key = instance.version.to_string();
        log::debug!("Registering NGN instance {}", key);

        match self.entries.get_mut(&key) {
            Some(entry) => {
                log::warn!("NGN instance {} was already registered, replacing it", key);
                Some(std::mem::replace(&mut entry.instance, instance))
            }
            None => {
                self.entries.insert(
                    key,
                    Entry {
                        instance,
                        plugins: IndexMap::new(),
                    },
                );
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instance registered under exactly this version
    pub fn instance(&self, version: &ParsedVersion) -> Option<&Instance> {
        self.entries.get(&version.to_string()).map(|e| &e.instance)
    }

    /// Registered versions, highest precedence first
    pub fn versions(&self) -> Result<Vec<String>, ReferenceError> {
        let versions: Vec<&ParsedVersion> = self.entries.values().map(|e| &e.instance.version).collect();
        Ok(Semver::sort(&versions)?)
    }

    /// Pick the instance for a request.
    ///
    /// Without an expression the highest registered version wins; otherwise
    /// the best match for the expression, if any.
    pub fn resolve(&self, expression: Option<&str>) -> Result<Option<&Instance>, ReferenceError> {
        let versions: Vec<&ParsedVersion> = self.entries.values().map(|e| &e.instance.version).collect();

        let selected = match expression {
            Some(expression) => Semver::select_version(expression, &versions)?,
            None => Semver::sort_versions(&versions)?.into_iter().next(),
        };

        match &selected {
            Some(version) => log::debug!("Resolved NGN instance {} for {:?}", version, expression),
            None => log::debug!("No NGN instance matches {:?}", expression),
        }

        Ok(selected.and_then(|version| self.instance(&version)))
    }

    /// Record plugin metadata on an instance, replacing a plugin of the same name
    pub fn register_plugin(&mut self, version: &ParsedVersion, plugin: PluginMeta) -> Result<(), ReferenceError> {
        let entry = self
            .entries
            .get_mut(&version.to_string())
            .ok_or(ReferenceError::InstanceNotFound)?;

        log::debug!("Registering plugin {} {} on NGN {}", plugin.name, plugin.version, version);
        entry.plugins.insert(plugin.name.clone(), plugin);
        Ok(())
    }

    pub fn plugin(&self, version: &ParsedVersion, name: &str) -> Option<&PluginMeta> {
        self.entries
            .get(&version.to_string())
            .and_then(|e| e.plugins.get(name))
    }

    /// Plugins of an instance in registration order
    pub fn plugins(&self, version: &ParsedVersion) -> Vec<&PluginMeta> {
        self.entries
            .get(&version.to_string())
            .map(|e| e.plugins.values().collect())
            .unwrap_or_default()
    }
}
