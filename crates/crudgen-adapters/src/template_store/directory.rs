//! Directory-backed template store, for published or hand-written templates.

use std::{
    io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crudgen_core::{
    application::{ApplicationError, ports::TemplateStore},
    domain::ViewTarget,
    error::CrudgenResult,
};

use crate::filesystem::map_io_error;

/// Reads `<dir>/<view>.<extension>` on every lookup.
///
/// The form template lives flat in the directory (`form.blade.php`), not
/// under `forms/` like its generated output.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateStore {
    dir: PathBuf,
    extension: String,
}

impl DirectoryTemplateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: crudgen_core::domain::DEFAULT_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, view: ViewTarget) -> PathBuf {
        self.dir.join(format!("{}.{}", view.as_str(), self.extension))
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn get(&self, view: ViewTarget) -> CrudgenResult<String> {
        let path = self.path_for(view);
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                debug!(path = %path.display(), "Loaded template from directory");
                Ok(text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::TemplateNotFound {
                    view: view.to_string(),
                }
                .into())
            }
            Err(e) => Err(map_io_error(&path, e, "read template")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crudgen_core::error::CrudgenError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_view_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("show.blade.php"), "custom {SHOW_FIELDS}").unwrap();

        let store = DirectoryTemplateStore::new(temp.path());
        assert_eq!(store.get(ViewTarget::Show).unwrap(), "custom {SHOW_FIELDS}");
    }

    #[test]
    fn missing_view_is_template_not_found() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryTemplateStore::new(temp.path());

        assert_eq!(
            store.get(ViewTarget::Form).unwrap_err(),
            CrudgenError::Application(ApplicationError::TemplateNotFound {
                view: "form".into()
            })
        );
    }

    #[test]
    fn custom_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("index.html"), "<table/>").unwrap();

        let store = DirectoryTemplateStore::new(temp.path()).with_extension("html");
        assert_eq!(store.get(ViewTarget::Index).unwrap(), "<table/>");
    }
}
