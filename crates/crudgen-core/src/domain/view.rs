//! View targets and the `--only` / `--exclude` selection resolver.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Extension of generated files unless configured otherwise.
pub const DEFAULT_EXTENSION: &str = "blade.php";

/// Directory (relative to the base path) holding the shared form partial.
pub const FORMS_DIR: &str = "forms";

// ── ViewTarget ───────────────────────────────────────────────────────────────

/// One of the five generated view kinds.
///
/// Declaration order is generation order; `Ord` follows it so a
/// `BTreeSet<ViewTarget>` always iterates `index, create, edit, show, form`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewTarget {
    Index,
    Create,
    Edit,
    Show,
    Form,
}

impl ViewTarget {
    pub const ALL: [ViewTarget; 5] = [
        Self::Index,
        Self::Create,
        Self::Edit,
        Self::Show,
        Self::Form,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Show => "show",
            Self::Form => "form",
        }
    }

    /// Output path relative to the base directory, e.g. `forms/form.blade.php`.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let file = format!("{}.{}", self.as_str(), extension);
        match self {
            Self::Form => PathBuf::from(FORMS_DIR).join(file),
            _ => PathBuf::from(file),
        }
    }
}

impl fmt::Display for ViewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| DomainError::InvalidViewName {
                names: vec![s.trim().to_string()],
            })
    }
}

// ── Selection ────────────────────────────────────────────────────────────────

/// The set of views to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection(BTreeSet<ViewTarget>);

impl ViewSelection {
    /// Every view.
    pub fn all() -> Self {
        Self(ViewTarget::ALL.into_iter().collect())
    }

    /// Resolve raw `only` / `exclude` option strings.
    ///
    /// Empty strings count as absent. Supplying both is an error rather than
    /// a precedence rule.
    pub fn resolve(only: Option<&str>, exclude: Option<&str>) -> Result<Self, DomainError> {
        let only = only.filter(|s| !s.trim().is_empty());
        let exclude = exclude.filter(|s| !s.trim().is_empty());

        match (only, exclude) {
            (Some(_), Some(_)) => Err(DomainError::ConflictingFilters),
            (Some(only), None) => Ok(Self(parse_list(only)?)),
            (None, Some(exclude)) => {
                let excluded = parse_list(exclude)?;
                Ok(Self(
                    ViewTarget::ALL
                        .into_iter()
                        .filter(|v| !excluded.contains(v))
                        .collect(),
                ))
            }
            (None, None) => Ok(Self::all()),
        }
    }

    pub fn should_generate(&self, view: ViewTarget) -> bool {
        self.0.contains(&view)
    }

    /// Selected views in generation order.
    pub fn iter(&self) -> impl Iterator<Item = ViewTarget> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<ViewSelection> for BTreeSet<ViewTarget> {
    fn from(selection: ViewSelection) -> Self {
        selection.0
    }
}

/// Split on commas, trim, lower-case, validate. Reports every bad token.
fn parse_list(raw: &str) -> Result<BTreeSet<ViewTarget>, DomainError> {
    let mut views = BTreeSet::new();
    let mut invalid = Vec::new();

    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<ViewTarget>() {
            Ok(view) => {
                views.insert(view);
            }
            Err(_) => invalid.push(token.to_ascii_lowercase()),
        }
    }

    if invalid.is_empty() {
        Ok(views)
    } else {
        Err(DomainError::InvalidViewName { names: invalid })
    }
}
