//! Infrastructure adapters for crudgen.
//!
//! This crate implements the ports defined in `crudgen-core::application::ports`.
//! It contains all I/O: the filesystem, template text (embedded and on disk)
//! and entity schema files.

pub mod assets;
pub mod entity_source;
pub mod filesystem;
pub mod template_store;

// Re-export commonly used adapters
pub use assets::{AssetKind, PublishReport, publish};
pub use entity_source::{ManifestEntitySource, StaticEntitySource};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_store::{BuiltinTemplateStore, DirectoryTemplateStore, LayeredTemplateStore};
