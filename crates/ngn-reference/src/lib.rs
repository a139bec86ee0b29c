//! Instance registry and plugin references for NGN
//!
//! Plugins locate a framework instance through an [`InstanceRegistry`] that is
//! handed to them explicitly. Instances are chosen by semantic version using
//! `ngn-semver`, and plugins can verify the capabilities and versions they
//! depend on through a [`Reference`].

mod error;
mod instance;
mod reference;
mod registry;

pub use error::ReferenceError;
pub use instance::{Instance, Member, PluginMeta};
pub use reference::Reference;
pub use registry::InstanceRegistry;
