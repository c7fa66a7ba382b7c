//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the ports, not
//! pipeline rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The entity source knows nothing about this entity.
    #[error("Entity '{name}' not found")]
    EntityNotFound { name: String },

    /// The template store could not supply text for a view.
    #[error("Template for view '{view}' not found")]
    TemplateNotFound { view: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The entity schema file could not be read or parsed.
    #[error("Invalid entity schema {path}: {reason}")]
    SchemaError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Store lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EntityNotFound { name } => vec![
                format!("Declare it in the schema file under [entities.{name}]"),
                "Or list its fields directly with --fields name,price,category_id".into(),
            ],
            Self::TemplateNotFound { view } => vec![
                format!("Add {view}.blade.php to your templates directory"),
                "Or drop --templates to use the built-in templates".into(),
                "Run: crudgen publish --templates to get editable copies".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::SchemaError { path, .. } => vec![
                format!("Check the TOML syntax of {}", path.display()),
                "Expected: [entities.Product] with fillable = [\"name\", ...]".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EntityNotFound { .. } | Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::SchemaError { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
