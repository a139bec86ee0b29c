use anyhow::{Context, Result};
use clap::ValueEnum;
use ngn_reference::{Instance, InstanceRegistry, PluginMeta};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the configuration file searched for
pub const CONFIG_FILE: &str = "ngn.toml";

/// The main ngn configuration file structure (ngn.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NgnConfig {
    /// Output settings
    pub output: OutputConfig,

    /// Framework instances available to `ngn check`
    pub instances: Vec<InstanceConfig>,

    /// Plugins recorded on those instances
    pub plugins: Vec<PluginConfig>,
}

/// Output configuration
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A framework instance and the members it exports
#[derive(Debug, Deserialize)]
pub struct InstanceConfig {
    pub version: String,

    /// Dotted member paths, e.g. "Middleware.Handler"
    #[serde(default)]
    pub members: Vec<String>,
}

/// Plugin metadata
#[derive(Debug, Deserialize)]
pub struct PluginConfig {
    pub name: String,
    pub version: String,
    pub description: Option<String>,

    /// Range selecting the instance the plugin is attached to (default: highest)
    pub instance: Option<String>,
}

impl NgnConfig {
    /// Load configuration from ngn.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<(PathBuf, Self)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                let config = Self::load_file(&config_path)?;
                return Ok(Some((config_path, config)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<(PathBuf, Self)>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Load a specific configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: NgnConfig =
            toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Build the instance registry described by this configuration
    pub fn build_registry(&self) -> Result<InstanceRegistry> {
        let mut registry = InstanceRegistry::new();

        for entry in &self.instances {
            let mut instance = Instance::new(&entry.version)
                .with_context(|| format!("Invalid instance version \"{}\"", entry.version))?;
            for member in &entry.members {
                instance.add_member(member);
            }
            registry.register(instance);
        }

        for plugin in &self.plugins {
            let mut meta = PluginMeta::new(&plugin.name, &plugin.version)
                .with_context(|| format!("Invalid version for plugin \"{}\"", plugin.name))?;
            if let Some(description) = &plugin.description {
                meta = meta.with_description(description);
            }

            let version = registry
                .resolve(plugin.instance.as_deref())?
                .map(|i| i.version.clone())
                .with_context(|| format!("No instance found for plugin \"{}\"", plugin.name))?;

            registry.register_plugin(&version, meta)?;
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config: NgnConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.instances.is_empty());
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[output]
format = "json"

[[instances]]
version = "2.0.0"
members = ["EventEmitter", "Middleware.Handler"]

[[instances]]
version = "1.4.0"

[[plugins]]
name = "queue"
version = "1.2.0"
description = "Task queue"
instance = "^1.0.0"
"#;
        let config: NgnConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.instances.len(), 2);
        assert_eq!(config.instances[0].members, vec!["EventEmitter", "Middleware.Handler"]);
        assert!(config.instances[1].members.is_empty());
        assert_eq!(config.plugins[0].instance.as_deref(), Some("^1.0.0"));

        let registry = config.build_registry().unwrap();
        assert_eq!(registry.versions().unwrap(), vec!["2.0.0", "1.4.0"]);

        let v1 = ngn_semver::ParsedVersion::parse("1.4.0").unwrap();
        assert_eq!(registry.plugin(&v1, "queue").unwrap().description.as_deref(), Some("Task queue"));
    }

    #[test]
    fn test_build_registry_rejects_bad_versions() {
        let config: NgnConfig = toml::from_str("[[instances]]\nversion = \"2.0\"\n").unwrap();
        let err = config.build_registry().unwrap_err();
        assert!(err.to_string().contains("Invalid instance version"));
    }

    #[test]
    fn test_plugin_without_instance_fails() {
        let toml = r#"
[[plugins]]
name = "queue"
version = "1.2.0"
"#;
        let config: NgnConfig = toml::from_str(toml).unwrap();
        assert!(config.build_registry().is_err());
    }

    #[test]
    fn test_load_searches_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[output]\nformat = \"json\"\n").unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (path, config) = NgnConfig::load(&nested).unwrap().unwrap();
        assert_eq!(path, dir.path().join(CONFIG_FILE));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "instances = 3").unwrap();

        let err = NgnConfig::load_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
