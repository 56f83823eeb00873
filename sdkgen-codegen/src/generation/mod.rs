//! Code generation outputs and file management.
//!
//! - [`ImportCollector`] - Import tracking and deduplication
//! - [`DependencyCollector`] - Package dependency tracking
//! - [`FileRegistry`] - Declarative file registration
//! - [`Readme`] - The README every backend ships
//! - [`plugin_manifest`] - The `pulumi-plugin.json` marker

mod imports;
mod manifest;
mod readme;
mod registry;

pub use imports::{DependencyCollector, ImportCollector};
pub use manifest::plugin_manifest;
pub use readme::Readme;
pub use registry::{FileCategory, FileEntry, FileRegistry};
