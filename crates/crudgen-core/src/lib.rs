//! crudgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the crudgen
//! CRUD view generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           crudgen-cli (CLI)             │
//! │   (prompts, config, output, logging)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   GenerateService: plan → write         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ TemplateStore, EntitySource, Filesystem │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    crudgen-adapters (Infrastructure)    │
//! │ Builtin/Directory templates, manifests  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ classify, fragments, render, overwrite  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crudgen_core::prelude::*;
//!
//! let service = GenerateService::new(templates, entities, filesystem);
//! let plan = service.plan("Product", &GenerationOptions::new("admin/products"))?;
//! if !plan.needs_confirmation() {
//!     service.write(&plan)?;
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateOutcome, GenerateService, GenerationOptions, GenerationPlan, RenderedView,
        ports::{EntitySource, Filesystem, TemplateStore},
    };
    pub use crate::domain::{
        EntityDescriptor, Field, OverwriteDecision, SemanticFieldType, ViewSelection, ViewTarget,
    };
    pub use crate::error::{CrudgenError, CrudgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
