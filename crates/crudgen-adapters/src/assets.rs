//! Built-in assets embedded in the binary.
//!
//! Two families ship with crudgen:
//!
//! - **templates**: one per view target, carrying `{PLACEHOLDER}` tokens
//! - **components**: the Blade components the generated views reference
//!   (`<x-inputs.input>`, `<x-label-group>`, ...)
//!
//! Both can be published into a project with [`publish`] so they can be
//! customised; published templates then take precedence over the embedded
//! ones (see `template_store::LayeredTemplateStore`).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crudgen_core::{application::ports::Filesystem, domain::ViewTarget, error::CrudgenResult};

/// Which family an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Template,
    Component,
}

/// One embedded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    pub kind: AssetKind,
    /// Path relative to the publish destination.
    pub relative_path: &'static str,
    pub content: &'static str,
}

const fn template(relative_path: &'static str, content: &'static str) -> Asset {
    Asset {
        kind: AssetKind::Template,
        relative_path,
        content,
    }
}

const fn component(relative_path: &'static str, content: &'static str) -> Asset {
    Asset {
        kind: AssetKind::Component,
        relative_path,
        content,
    }
}

pub const TEMPLATES: &[Asset] = &[
    template(
        "index.blade.php",
        include_str!("../assets/templates/index.blade.php"),
    ),
    template(
        "create.blade.php",
        include_str!("../assets/templates/create.blade.php"),
    ),
    template(
        "edit.blade.php",
        include_str!("../assets/templates/edit.blade.php"),
    ),
    template(
        "show.blade.php",
        include_str!("../assets/templates/show.blade.php"),
    ),
    template(
        "form.blade.php",
        include_str!("../assets/templates/form.blade.php"),
    ),
];

pub const COMPONENTS: &[Asset] = &[
    component(
        "form-group.blade.php",
        include_str!("../assets/components/form-group.blade.php"),
    ),
    component(
        "label-group.blade.php",
        include_str!("../assets/components/label-group.blade.php"),
    ),
    component(
        "inputs/input.blade.php",
        include_str!("../assets/components/inputs/input.blade.php"),
    ),
    component(
        "inputs/checkbox.blade.php",
        include_str!("../assets/components/inputs/checkbox.blade.php"),
    ),
    component(
        "inputs/textarea.blade.php",
        include_str!("../assets/components/inputs/textarea.blade.php"),
    ),
    component(
        "inputs/select.blade.php",
        include_str!("../assets/components/inputs/select.blade.php"),
    ),
];

/// Embedded template text for a view.
pub fn builtin_template(view: ViewTarget) -> Option<&'static str> {
    let file = format!("{}.blade.php", view.as_str());
    TEMPLATES
        .iter()
        .find(|a| a.relative_path == file)
        .map(|a| a.content)
}

// ── Publishing ───────────────────────────────────────────────────────────────

/// What [`publish`] did with each asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub written: Vec<PathBuf>,
    /// Already present and `force` was not set.
    pub skipped: Vec<PathBuf>,
}

/// Copy `assets` under `destination`, creating directories as needed.
///
/// Existing files are left alone unless `force` is set.
#[instrument(skip(fs, assets), fields(dest = %destination.display(), count = assets.len()))]
pub fn publish(
    fs: &dyn Filesystem,
    destination: &Path,
    assets: &[Asset],
    force: bool,
) -> CrudgenResult<PublishReport> {
    let mut report = PublishReport::default();

    for asset in assets {
        let path = destination.join(asset.relative_path);

        if fs.exists(&path) && !force {
            debug!(path = %path.display(), "Skipping existing asset");
            report.skipped.push(path);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write_file(&path, asset.content)?;
        report.written.push(path);
    }

    info!(
        written = report.written.len(),
        skipped = report.skipped.len(),
        "Assets published"
    );
    Ok(report)
}
