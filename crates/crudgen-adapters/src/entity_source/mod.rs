//! Entity source adapters.
//!
//! - [`ManifestEntitySource`]: entities declared in a TOML schema file
//! - [`StaticEntitySource`]: entities held in memory (tests, `--fields`)

mod manifest;
mod static_source;

pub use manifest::{EntityManifest, EntitySection, ManifestEntitySource};
pub use static_source::StaticEntitySource;
