//! TOML schema file entity source.
//!
//! # Format
//!
//! ```toml
//! [entities.Product]
//! fillable = ["name", "price", "category_id"]
//! guarded  = ["id"]          # optional
//!
//! [entities.BlogPost]
//! fillable = ["title", "body", "author_id", "published"]
//! ```
//!
//! `fillable` fields are writable, in declaration order. `guarded` fields
//! are reported after them as non-writable, so they never reach the views.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument};

use crudgen_core::{
    application::{ApplicationError, ports::EntitySource},
    error::CrudgenResult,
};

/// Whole schema file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EntityManifest {
    #[serde(default)]
    pub entities: BTreeMap<String, EntitySection>,
}

/// `[entities.<Name>]` section.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EntitySection {
    #[serde(default)]
    pub fillable: Vec<String>,
    #[serde(default)]
    pub guarded: Vec<String>,
}

/// Entity source backed by a parsed schema file.
#[derive(Debug, Clone)]
pub struct ManifestEntitySource {
    path: PathBuf,
    manifest: EntityManifest,
}

impl ManifestEntitySource {
    /// Read and parse a schema file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> CrudgenResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::SchemaError {
            path: path.to_path_buf(),
            reason: format!("failed to read: {e}"),
        })?;
        Self::parse(&raw, path)
    }

    /// Parse schema text; `path` is only used in error messages.
    pub fn parse(raw: &str, path: impl Into<PathBuf>) -> CrudgenResult<Self> {
        let path = path.into();
        let manifest: EntityManifest =
            toml::from_str(raw).map_err(|e| ApplicationError::SchemaError {
                path: path.clone(),
                reason: e.message().to_string(),
            })?;

        debug!(entities = manifest.entities.len(), "Loaded entity schema");
        Ok(Self { path, manifest })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared entity names, sorted.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.manifest.entities.keys().map(String::as_str)
    }
}

impl EntitySource for ManifestEntitySource {
    fn fields(&self, entity: &str) -> CrudgenResult<Vec<(String, bool)>> {
        let section = self.manifest.entities.get(entity).ok_or_else(|| {
            ApplicationError::EntityNotFound {
                name: entity.to_string(),
            }
        })?;

        let writable = section.fillable.iter().map(|f| (f.clone(), true));
        let guarded = section
            .guarded
            .iter()
            .filter(|g| !section.fillable.contains(*g))
            .map(|g| (g.clone(), false));

        Ok(writable.chain(guarded).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::error::CrudgenError;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    const SCHEMA: &str = r#"
[entities.Product]
fillable = ["name", "price", "category_id"]
guarded  = ["id"]

[entities.Tag]
guarded = ["id", "slug"]
"#;

    #[test]
    fn fillable_then_guarded() {
        let source = ManifestEntitySource::parse(SCHEMA, "schema.toml").unwrap();
        assert_eq!(
            source.fields("Product").unwrap(),
            [
                ("name".to_string(), true),
                ("price".to_string(), true),
                ("category_id".to_string(), true),
                ("id".to_string(), false),
            ]
        );
    }

    #[test]
    fn entity_without_fillable_yields_no_writable_fields() {
        let source = ManifestEntitySource::parse(SCHEMA, "schema.toml").unwrap();
        let fields = source.fields("Tag").unwrap();
        assert!(fields.iter().all(|(_, writable)| !writable));
    }

    #[test]
    fn unknown_entity_is_not_found() {
        let source = ManifestEntitySource::parse(SCHEMA, "schema.toml").unwrap();
        assert_eq!(
            source.fields("Order").unwrap_err(),
            CrudgenError::Application(ApplicationError::EntityNotFound {
                name: "Order".into()
            })
        );
        assert_eq!(source.entity_names().collect::<Vec<_>>(), ["Product", "Tag"]);
    }

    #[test]
    fn malformed_schema_is_a_schema_error() {
        let err = ManifestEntitySource::parse("[entities.Product\nfillable=", "bad.toml").unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::SchemaError { .. })
        ));
    }

    #[test]
    fn reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("crudgen.toml");
        File::create(&path)
            .unwrap()
            .write_all(SCHEMA.as_bytes())
            .unwrap();

        let source = ManifestEntitySource::from_path(&path).unwrap();
        assert_eq!(source.path(), path);
        assert_eq!(source.fields("Product").unwrap().len(), 4);
    }

    #[test]
    fn missing_file_is_a_schema_error() {
        let err = ManifestEntitySource::from_path("/no/such/crudgen.toml").unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::SchemaError { .. })
        ));
    }
}
