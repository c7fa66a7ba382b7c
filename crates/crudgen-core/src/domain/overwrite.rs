//! Destructive-write guard.
//!
//! A pure decision over an existence oracle: it never prompts and never
//! writes. Obtaining consent (or honouring `--force`) is the caller's job.

use std::path::{Path, PathBuf};

use crate::domain::view::ViewTarget;

/// Outcome of checking the destination for previously generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverwriteDecision {
    /// Nothing would be overwritten.
    Proceed,
    /// These paths already exist, in view order.
    NeedsConfirmation(Vec<PathBuf>),
}

impl OverwriteDecision {
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }

    /// Paths that would be overwritten (empty for `Proceed`).
    pub fn existing(&self) -> &[PathBuf] {
        match self {
            Self::Proceed => &[],
            Self::NeedsConfirmation(paths) => paths,
        }
    }
}

/// Check every selected target's output path against `exists`.
pub fn check_overwrite<I, F>(
    base_path: &Path,
    targets: I,
    extension: &str,
    exists: F,
) -> OverwriteDecision
where
    I: IntoIterator<Item = ViewTarget>,
    F: Fn(&Path) -> bool,
{
    let existing: Vec<PathBuf> = targets
        .into_iter()
        .map(|t| base_path.join(t.relative_path(extension)))
        .filter(|p| exists(p))
        .collect();

    if existing.is_empty() {
        OverwriteDecision::Proceed
    } else {
        OverwriteDecision::NeedsConfirmation(existing)
    }
}
