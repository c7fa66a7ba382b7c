//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ViewTarget;
use crate::error::CrudgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (tests)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> CrudgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;
}

/// Port for template text.
///
/// Implemented by:
/// - `crudgen_adapters::template_store::BuiltinTemplateStore` (embedded)
/// - `crudgen_adapters::template_store::DirectoryTemplateStore` (published copies)
/// - `crudgen_adapters::template_store::LayeredTemplateStore` (first hit wins)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Raw template text for a view.
    ///
    /// Fails with `ApplicationError::TemplateNotFound` when the store has none.
    fn get(&self, view: ViewTarget) -> CrudgenResult<String>;
}

/// Port for entity field listings.
///
/// Implemented by:
/// - `crudgen_adapters::entity_source::ManifestEntitySource` (TOML schema)
/// - `crudgen_adapters::entity_source::StaticEntitySource` (in-memory, `--fields`)
#[cfg_attr(test, mockall::automock)]
pub trait EntitySource: Send + Sync {
    /// Ordered `(field name, writable)` pairs for an entity.
    ///
    /// An entity with no writable fields is `Ok`; the caller falls back to
    /// defaults. Unknown entities fail with `ApplicationError::EntityNotFound`.
    fn fields(&self, entity: &str) -> CrudgenResult<Vec<(String, bool)>>;
}
