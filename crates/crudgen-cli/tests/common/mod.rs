//! Shared fixtures for the binary tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub const SCHEMA: &str = r#"
[entities.Product]
fillable = ["name", "price", "category_id", "is_active"]
guarded  = ["id"]

[entities.Tag]
fillable = []
guarded  = ["id"]
"#;

/// A scratch project with an empty config file and a schema.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        fs::write(dir.path().join("crudgen.toml"), SCHEMA).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `crudgen` running inside the project, isolated from the user's
    /// config and environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("crudgen");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .arg("--config")
            .arg(self.path().join("config.toml"));
        cmd
    }

    pub fn view(&self, relative: &str) -> PathBuf {
        self.path().join("resources/views").join(relative)
    }

    pub fn read_view(&self, relative: &str) -> String {
        fs::read_to_string(self.view(relative)).unwrap()
    }
}
