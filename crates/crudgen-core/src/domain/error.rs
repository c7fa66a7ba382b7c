// ============================================================================
// domain/error.rs - GENERATION PIPELINE ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::view::ViewTarget;
use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (so a plan can be inspected after failure)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("--only and --exclude cannot be used together")]
    ConflictingFilters,

    #[error("invalid view name(s): {}", names.join(", "))]
    InvalidViewName { names: Vec<String> },

    #[error("invalid entity name '{name}': {reason}")]
    InvalidEntityName { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConflictingFilters => vec![
                "Use either --only or --exclude, not both".into(),
                "Example: crudgen generate Product --only index,form".into(),
            ],
            Self::InvalidViewName { .. } => vec![format!(
                "Valid views: {}",
                ViewTarget::ALL
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )],
            Self::InvalidEntityName { name, .. } => vec![
                format!("'{name}' cannot be used as an entity name"),
                "Use the model's class name, e.g. Product or BlogPost".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConflictingFilters
            | Self::InvalidViewName { .. }
            | Self::InvalidEntityName { .. } => ErrorCategory::Validation,
        }
    }
}

