//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `crudgen-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence checks, directory creation, file writes
//!   - `TemplateStore`: template text per view
//!   - `EntitySource`: field listing per entity
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{EntitySource, Filesystem, TemplateStore};

#[cfg(test)]
pub use output::{MockEntitySource, MockFilesystem, MockTemplateStore};
