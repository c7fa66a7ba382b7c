//! Application layer for crudgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! pipeline rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    GenerateOutcome, GenerateService, GenerationOptions, GenerationPlan, RenderedView,
};

// Re-export port traits (for adapter implementation)
pub use ports::{EntitySource, Filesystem, TemplateStore};

pub use error::ApplicationError;
