use ngn_semver::VersionParserError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("NGN is not available or was not registered")]
    InstanceNotFound,

    #[error("The following NGN elements are required but not present in the environment: {}", .0.join(", "))]
    MissingCapabilities(Vec<String>),

    #[error("NGN v{required} is required. An older version was found (v{found})")]
    VersionTooOld { required: String, found: String },

    #[error("Plugin \"{0}\" is not registered")]
    PluginNotFound(String),

    #[error("Plugin \"{name}\" v{version} does not satisfy \"{range}\"")]
    PluginVersionMismatch {
        name: String,
        version: String,
        range: String,
    },

    #[error(transparent)]
    Version(#[from] VersionParserError),
}
