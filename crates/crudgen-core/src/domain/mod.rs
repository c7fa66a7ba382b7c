// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for crudgen.
//!
//! The whole generation pipeline lives here as pure functions: naming,
//! field classification, relation derivation, view selection, the overwrite
//! decision, fragment generation and placeholder rendering. Template text,
//! entity fields and the filesystem arrive through ports defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: The overwrite guard takes an existence oracle, never a path check
//! - **Deterministic**: Same inputs, same rendered bytes
//!
pub mod entity;
pub mod error;
pub mod field_type;
pub mod fragments;
pub mod naming;
pub mod overwrite;
pub mod relation;
pub mod render;
pub mod view;

pub use entity::{DEFAULT_FIELDS, EntityDescriptor, Field, validate_entity_name};
pub use error::DomainError;
pub use field_type::{SemanticFieldType, classify};
pub use overwrite::{OverwriteDecision, check_overwrite};
pub use relation::{RelationDescriptor, derive_relation};
pub use render::{Placeholders, render, substitute};
pub use view::{DEFAULT_EXTENSION, FORMS_DIR, ViewSelection, ViewTarget};
