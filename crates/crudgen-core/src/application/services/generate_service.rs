//! Generate Service - main application orchestrator.
//!
//! The workflow is split in two so the caller can sit between them:
//! 1. `plan`: validate options, load fields, render every selected view and
//!    check what would be overwritten. No side effects.
//! 2. `write`: create directories and write the rendered files.
//!
//! `generate` glues both together around an explicit consent flag.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{EntitySource, Filesystem, TemplateStore},
    domain::{
        DEFAULT_EXTENSION, DEFAULT_FIELDS, EntityDescriptor, FORMS_DIR, OverwriteDecision,
        ViewSelection, ViewTarget, check_overwrite, render, validate_entity_name,
    },
    error::CrudgenResult,
};

/// Root under which `base_path` is resolved unless configured otherwise.
pub const DEFAULT_VIEWS_ROOT: &str = "resources/views";

// ── Options ──────────────────────────────────────────────────────────────────

/// Everything the caller controls about one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// View path relative to `views_root`, e.g. `admin/products`. Also the
    /// value of `{PATH}`.
    pub base_path: String,
    /// Comma-separated view names to generate. Empty counts as absent.
    pub only: Option<String>,
    /// Comma-separated view names to skip. Empty counts as absent.
    pub exclude: Option<String>,
    /// Overwrite existing files without asking.
    pub force: bool,
    /// File extension of generated views, without the leading dot.
    pub extension: String,
    /// Directory the base path is resolved against.
    pub views_root: PathBuf,
}

impl GenerationOptions {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            only: None,
            exclude: None,
            force: false,
            extension: DEFAULT_EXTENSION.to_string(),
            views_root: PathBuf::from(DEFAULT_VIEWS_ROOT),
        }
    }

    /// `base_path` with surrounding slashes and whitespace removed.
    pub fn normalized_base_path(&self) -> &str {
        self.base_path.trim().trim_matches(|c| c == '/' || c == '\\')
    }

    /// Directory every view is written under.
    pub fn output_dir(&self) -> PathBuf {
        self.views_root.join(self.normalized_base_path())
    }
}

// ── Plan ─────────────────────────────────────────────────────────────────────

/// One rendered view, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedView {
    pub target: ViewTarget,
    pub target_path: PathBuf,
    pub content: String,
}

/// Everything computed before any side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub entity: EntityDescriptor,
    pub targets: ViewSelection,
    pub outputs: Vec<RenderedView>,
    pub overwrite: OverwriteDecision,
    /// The entity source had no writable fields; defaults were used.
    pub defaulted_fields: bool,
    pub output_dir: PathBuf,
}

impl GenerationPlan {
    pub fn needs_confirmation(&self) -> bool {
        !self.overwrite.is_proceed()
    }
}

/// Result of [`GenerateService::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Written {
        plan: GenerationPlan,
        written: Vec<PathBuf>,
    },
    /// Files would have been overwritten and consent was not given.
    Cancelled { plan: GenerationPlan },
}

impl GenerateOutcome {
    pub fn plan(&self) -> &GenerationPlan {
        match self {
            Self::Written { plan, .. } | Self::Cancelled { plan } => plan,
        }
    }
}

// ── Service ──────────────────────────────────────────────────────────────────

/// Main generation service.
///
/// Holds the three driven ports; all pipeline logic is in `crate::domain`.
pub struct GenerateService {
    templates: Box<dyn TemplateStore>,
    entities: Box<dyn EntitySource>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use crudgen_core::application::GenerateService;
    ///
    /// let service = GenerateService::new(
    ///     templates,  // impl TemplateStore
    ///     entities,   // impl EntitySource
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        templates: Box<dyn TemplateStore>,
        entities: Box<dyn EntitySource>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            entities,
            filesystem,
        }
    }

    /// Compute everything a run would do, without touching the filesystem
    /// beyond existence checks.
    #[instrument(skip_all, fields(entity = %entity_name, path = %options.base_path))]
    pub fn plan(&self, entity_name: &str, options: &GenerationOptions) -> CrudgenResult<GenerationPlan> {
        let targets = ViewSelection::resolve(options.only.as_deref(), options.exclude.as_deref())?;
        validate_entity_name(entity_name)?;

        let listing = self.entities.fields(entity_name)?;
        let (entity, defaulted_fields) = EntityDescriptor::from_fillable(entity_name, listing)?;
        if defaulted_fields {
            warn!(
                fields = %DEFAULT_FIELDS.join(", "),
                "Entity has no writable fields, using defaults"
            );
        }
        debug!(fields = entity.fields().len(), "Fields classified");

        let output_dir = options.output_dir();
        let base_path = options.normalized_base_path();

        let outputs = targets
            .iter()
            .map(|target| -> CrudgenResult<RenderedView> {
                let template = self.templates.get(target)?;
                Ok(RenderedView {
                    target,
                    target_path: output_dir.join(target.relative_path(&options.extension)),
                    content: render(target, &entity, base_path, &template),
                })
            })
            .collect::<CrudgenResult<Vec<_>>>()?;

        let overwrite = check_overwrite(&output_dir, targets.iter(), &options.extension, |p| {
            self.filesystem.exists(p)
        });
        if let OverwriteDecision::NeedsConfirmation(existing) = &overwrite {
            info!(count = existing.len(), "Existing files would be overwritten");
        }

        Ok(GenerationPlan {
            entity,
            targets,
            outputs,
            overwrite,
            defaulted_fields,
            output_dir,
        })
    }

    /// Persist a plan: base directory, then `forms/` when the form view is
    /// selected, then each file in view order.
    ///
    /// There is no rollback; files written before a failure stay in place.
    #[instrument(skip_all, fields(output_dir = %plan.output_dir.display()))]
    pub fn write(&self, plan: &GenerationPlan) -> CrudgenResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(&plan.output_dir)?;

        if plan.targets.should_generate(ViewTarget::Form) {
            self.filesystem
                .create_dir_all(&plan.output_dir.join(FORMS_DIR))?;
        }

        let mut written = Vec::with_capacity(plan.outputs.len());
        for view in &plan.outputs {
            self.filesystem.write_file(&view.target_path, &view.content)?;
            debug!(path = %view.target_path.display(), "Wrote view");
            written.push(view.target_path.clone());
        }

        info!(files = written.len(), "Views generated");
        Ok(written)
    }

    /// Plan, then write unless files would be overwritten without `force`
    /// or `consent`.
    pub fn generate(
        &self,
        entity_name: &str,
        options: &GenerationOptions,
        consent: bool,
    ) -> CrudgenResult<GenerateOutcome> {
        let plan = self.plan(entity_name, options)?;

        if plan.needs_confirmation() && !options.force && !consent {
            warn!("Overwrite declined, nothing written");
            return Ok(GenerateOutcome::Cancelled { plan });
        }

        let written = self.write(&plan)?;
        Ok(GenerateOutcome::Written { plan, written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockEntitySource, MockFilesystem, MockTemplateStore};
    use crate::domain::DomainError;
    use crate::error::CrudgenError;
    use mockall::Sequence;

    fn templates() -> MockTemplateStore {
        let mut t = MockTemplateStore::new();
        t.expect_get()
            .returning(|view| Ok(format!("{view}:{{MODEL_TITLE}}:{{PATH}}")));
        t
    }

    fn entities(listing: Vec<(&'static str, bool)>) -> MockEntitySource {
        let mut e = MockEntitySource::new();
        e.expect_fields().returning(move |_| {
            Ok(listing
                .iter()
                .map(|(n, w)| (n.to_string(), *w))
                .collect())
        });
        e
    }

    fn fs_with(existing: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(move |p| existing.iter().any(|e| p.ends_with(e)));
        fs
    }

    fn options() -> GenerationOptions {
        GenerationOptions::new("admin/products")
    }

    #[test]
    fn plan_renders_selected_views_in_order() {
        let service = GenerateService::new(
            Box::new(templates()),
            Box::new(entities(vec![("name", true), ("price", true)])),
            Box::new(fs_with(&[])),
        );

        let plan = service.plan("Product", &options()).unwrap();

        let targets: Vec<_> = plan.outputs.iter().map(|o| o.target).collect();
        assert_eq!(targets, ViewTarget::ALL);
        assert_eq!(plan.outputs[0].content, "index:Product:admin/products");
        assert_eq!(
            plan.outputs[4].target_path,
            PathBuf::from("resources/views/admin/products/forms/form.blade.php")
        );
        assert!(plan.overwrite.is_proceed());
        assert!(!plan.defaulted_fields);
    }

    #[test]
    fn plan_falls_back_to_default_fields() {
        let service = GenerateService::new(
            Box::new(templates()),
            Box::new(entities(vec![("id", false)])),
            Box::new(fs_with(&[])),
        );

        let plan = service.plan("Product", &options()).unwrap();
        assert!(plan.defaulted_fields);
        let names: Vec<_> = plan.entity.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, DEFAULT_FIELDS);
    }

    #[test]
    fn conflicting_filters_fail_before_any_port_is_called() {
        let service = GenerateService::new(
            Box::new(MockTemplateStore::new()),
            Box::new(MockEntitySource::new()),
            Box::new(MockFilesystem::new()),
        );

        let mut opts = options();
        opts.only = Some("index".into());
        opts.exclude = Some("show".into());

        assert_eq!(
            service.plan("Product", &opts).unwrap_err(),
            CrudgenError::Domain(DomainError::ConflictingFilters)
        );
    }

    #[test]
    fn missing_template_is_reported() {
        let mut store = MockTemplateStore::new();
        store.expect_get().returning(|view| {
            Err(ApplicationError::TemplateNotFound {
                view: view.to_string(),
            }
            .into())
        });

        let service = GenerateService::new(
            Box::new(store),
            Box::new(entities(vec![("name", true)])),
            Box::new(fs_with(&[])),
        );

        let err = service.plan("Product", &options()).unwrap_err();
        assert_eq!(
            err,
            CrudgenError::Application(ApplicationError::TemplateNotFound {
                view: "index".into()
            })
        );
    }

    #[test]
    fn unknown_entity_is_reported() {
        let mut source = MockEntitySource::new();
        source.expect_fields().withf(|name| name == "Ghost").returning(|name| {
            Err(ApplicationError::EntityNotFound {
                name: name.to_string(),
            }
            .into())
        });

        let service = GenerateService::new(
            Box::new(MockTemplateStore::new()),
            Box::new(source),
            Box::new(MockFilesystem::new()),
        );

        assert!(matches!(
            service.plan("Ghost", &options()),
            Err(CrudgenError::Application(ApplicationError::EntityNotFound { .. }))
        ));
    }

    #[test]
    fn write_order_is_base_then_forms_then_files() {
        let mut fs = fs_with(&[]);
        let mut seq = Sequence::new();
        let base = PathBuf::from("resources/views/admin/products");

        let b = base.clone();
        fs.expect_create_dir_all()
            .withf(move |p| p == b)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        let forms = base.join("forms");
        fs.expect_create_dir_all()
            .withf(move |p| p == forms)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        for file in ["index", "create", "edit", "show"] {
            let path = base.join(format!("{file}.blade.php"));
            fs.expect_write_file()
                .withf(move |p, _| p == path)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        let form = base.join("forms").join("form.blade.php");
        fs.expect_write_file()
            .withf(move |p, _| p == form)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let service = GenerateService::new(
            Box::new(templates()),
            Box::new(entities(vec![("name", true)])),
            Box::new(fs),
        );

        let outcome = service.generate("Product", &options(), false).unwrap();
        match outcome {
            GenerateOutcome::Written { written, .. } => assert_eq!(written.len(), 5),
            GenerateOutcome::Cancelled { .. } => panic!("should have written"),
        }
    }

    #[test]
    fn forms_dir_is_skipped_without_form_view() {
        let mut fs = fs_with(&[]);
        fs.expect_create_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file().times(1).returning(|_, _| Ok(()));

        let service = GenerateService::new(
            Box::new(templates()),
            Box::new(entities(vec![("name", true)])),
            Box::new(fs),
        );

        let mut opts = options();
        opts.only = Some("index".into());
        service.generate("Product", &opts, false).unwrap();
    }

    #[test]
    fn failed_write_stops_without_rollback() {
        let mut fs = fs_with(&[]);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("index.blade.php"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with("create.blade.php"))
            .times(1)
            .returning(|p, _| {
                Err(ApplicationError::FilesystemError {
                    path: p.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            });

        let service = GenerateService::new(
            Box::new(templates()),
            Box::new(entities(vec![("name", true)])),
            Box::new(fs),
        );

        let err = service.generate("Product", &options(), false).unwrap_err();
        assert!(matches!(
            err,
            CrudgenError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn existing_files_without_consent_cancel() {
        let mut fs = fs_with(&["show.blade.php"]);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = GenerateService::new(
            Box::new(templates()),
            Box::new(entities(vec![("name", true)])),
            Box::new(fs),
        );

        let outcome = service.generate("Product", &options(), false).unwrap();
        match outcome {
            GenerateOutcome::Cancelled { plan } => {
                assert_eq!(
                    plan.overwrite.existing(),
                    [PathBuf::from("resources/views/admin/products/show.blade.php")]
                );
            }
            GenerateOutcome::Written { .. } => panic!("should have been cancelled"),
        }
    }

    #[test]
    fn consent_or_force_overwrites() {
        for (force, consent) in [(true, false), (false, true)] {
            let mut fs = fs_with(&["index.blade.php"]);
            fs.expect_create_dir_all().returning(|_| Ok(()));
            fs.expect_write_file().times(5).returning(|_, _| Ok(()));

            let service = GenerateService::new(
                Box::new(templates()),
                Box::new(entities(vec![("name", true)])),
                Box::new(fs),
            );

            let mut opts = options();
            opts.force = force;
            let outcome = service.generate("Product", &opts, consent).unwrap();
            assert!(matches!(outcome, GenerateOutcome::Written { .. }));
        }
    }

    #[test]
    fn base_path_slashes_are_trimmed() {
        let opts = GenerationOptions::new("/admin/products/");
        assert_eq!(opts.normalized_base_path(), "admin/products");
        assert_eq!(opts.output_dir(), PathBuf::from("resources/views/admin/products"));
    }
}
