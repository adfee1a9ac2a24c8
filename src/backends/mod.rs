//! Backend registry for Mirrorbox
//!
//! Every storage backend a piece of content can be served from is described
//! once, at startup, by a [`BackendDescriptor`]. The [`BackendRegistry`] keeps
//! them in priority order (fastest/cheapest storage first, fallbacks last).
//!
//! ## Key Components
//!
//! - [`BackendKind`] - closed set of URL rules, one per backend kind
//! - [`ConfigKey`] - configuration values a rule may require
//! - [`BackendRegistry`] - ordered, immutable set of descriptors
//!
//! ## Example
//!
//! ```rust
//! use mirrorbox::backends::BackendRegistry;
//!
//! let registry = BackendRegistry::standard();
//! assert_eq!(registry.names()[0], "Primary Storage");
//! ```

mod registry;
mod types;

pub use registry::{BackendRegistry, CLOUD_DRIVE_BASE, RegistryError};
pub use types::{BackendDescriptor, BackendKind, ConfigKey, RuleError};
