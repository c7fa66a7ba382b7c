//! Layered template store: published overrides first, embedded defaults last.

use tracing::trace;

use crudgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::ViewTarget,
    error::{CrudgenError, CrudgenResult},
};

use super::{BuiltinTemplateStore, DirectoryTemplateStore};

/// Asks each layer in order. A `TemplateNotFound` falls through to the next
/// layer; any other error stops the lookup.
pub struct LayeredTemplateStore {
    layers: Vec<Box<dyn TemplateStore>>,
}

impl LayeredTemplateStore {
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a layer below the existing ones.
    pub fn push(mut self, layer: impl TemplateStore + 'static) -> Self {
        self.layers.push(Box::new(layer));
        self
    }

    /// A directory of overrides backed by the embedded templates.
    pub fn with_overrides(overrides: DirectoryTemplateStore) -> Self {
        Self::new().push(overrides).push(BuiltinTemplateStore::new())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayeredTemplateStore {
    fn default() -> Self {
        Self::new().push(BuiltinTemplateStore::new())
    }
}

impl TemplateStore for LayeredTemplateStore {
    fn get(&self, view: ViewTarget) -> CrudgenResult<String> {
        for (depth, layer) in self.layers.iter().enumerate() {
            match layer.get(view) {
                Ok(text) => {
                    trace!(%view, depth, "Template resolved");
                    return Ok(text);
                }
                Err(CrudgenError::Application(ApplicationError::TemplateNotFound { .. })) => {
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(ApplicationError::TemplateNotFound {
            view: view.to_string(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn override_wins_and_missing_views_fall_back() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.blade.php"), "mine").unwrap();

        let store = LayeredTemplateStore::with_overrides(DirectoryTemplateStore::new(temp.path()));

        assert_eq!(store.get(ViewTarget::Index).unwrap(), "mine");
        assert!(store.get(ViewTarget::Show).unwrap().contains("{SHOW_FIELDS}"));
    }

    #[test]
    fn empty_store_reports_not_found() {
        let store = LayeredTemplateStore::new();
        assert!(store.is_empty());
        assert!(store.get(ViewTarget::Edit).is_err());
    }

    #[test]
    fn nonexistent_override_dir_is_harmless() {
        let store = LayeredTemplateStore::with_overrides(DirectoryTemplateStore::new(
            "/definitely/not/here",
        ));
        assert_eq!(store.len(), 2);
        assert!(store.get(ViewTarget::Form).unwrap().contains("{FORM_FIELDS}"));
    }
}
