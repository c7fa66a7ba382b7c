//! `crudgen generate` — render and write the CRUD views of one entity.
//!
//! Flow:
//! 1. Resolve the view path (flag, prompt, or config default)
//! 2. Build the entity source and the template store
//! 3. Plan the run in the core
//! 4. Ask before overwriting, unless `--force` or `--yes`
//! 5. Write, then print the files, fields and controller bindings

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crudgen_adapters::{
    DirectoryTemplateStore, LayeredTemplateStore, LocalFilesystem, ManifestEntitySource,
    StaticEntitySource,
};
use crudgen_core::{
    application::{GenerateService, GenerationOptions, GenerationPlan, ports::EntitySource},
    domain::DEFAULT_FIELDS,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `generate` command.
#[instrument(skip_all, fields(entity = %args.entity))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base_path = match &args.path {
        Some(path) => path.clone(),
        None => prompt::ask_path(&config.defaults.path)?,
    };
    let options = build_options(&args, &config, base_path);
    debug!(output_dir = %options.output_dir().display(), "Options resolved");

    let service = GenerateService::new(
        Box::new(template_store(&args, &config)?),
        entity_source(&args, &config)?,
        Box::new(LocalFilesystem::new()),
    );

    let plan = service.plan(&args.entity, &options)?;

    if args.dry_run {
        info!("Dry run, nothing written");
        return report(&output, &plan, Status::DryRun, &[]);
    }

    if plan.needs_confirmation() && !options.force {
        let consent = args.yes || prompt::confirm_overwrite(plan.overwrite.existing())?;
        if !consent {
            warn!("Overwrite declined, nothing written");
            return report(&output, &plan, Status::Cancelled, &[]);
        }
    }

    let written = service.write(&plan)?;
    report(&output, &plan, Status::Written, &written)
}

fn build_options(args: &GenerateArgs, config: &AppConfig, base_path: String) -> GenerationOptions {
    GenerationOptions {
        only: args.only.clone(),
        exclude: args.exclude.clone(),
        force: args.force,
        extension: config.defaults.extension.clone(),
        views_root: config.defaults.views_dir.clone(),
        ..GenerationOptions::new(base_path)
    }
}

// ── Adapters ──────────────────────────────────────────────────────────────────

/// `--fields` wins over any schema file. An explicit `--schema` must exist;
/// a missing configured schema leaves every entity unknown.
fn entity_source(args: &GenerateArgs, config: &AppConfig) -> CliResult<Box<dyn EntitySource>> {
    if let Some(fields) = &args.fields {
        let fields: Vec<&str> = fields
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .collect();
        debug!(count = fields.len(), "Using fields from --fields");
        return Ok(Box::new(StaticEntitySource::single(&args.entity, fields)));
    }

    let (path, explicit) = match &args.schema {
        Some(path) => (path.clone(), true),
        None => (config.schema.path.clone(), false),
    };

    if !explicit && !path.exists() {
        debug!(path = %path.display(), "No schema file found");
        return Ok(Box::new(StaticEntitySource::new()));
    }

    Ok(Box::new(ManifestEntitySource::from_path(&path)?))
}

/// Override directory, in order: `--templates`, `templates.dir`, the
/// published location. The embedded templates always sit underneath.
fn template_store(args: &GenerateArgs, config: &AppConfig) -> CliResult<LayeredTemplateStore> {
    if let Some(dir) = &args.templates {
        if !dir.is_dir() {
            return Err(CliError::InvalidInput {
                message: format!("template directory not found: {}", dir.display()),
            });
        }
        return Ok(layered(dir));
    }

    let candidate = config
        .templates
        .dir
        .clone()
        .unwrap_or_else(|| config.published_templates_dir());

    if candidate.is_dir() {
        Ok(layered(&candidate))
    } else {
        debug!(dir = %candidate.display(), "No template overrides, using built-in templates");
        Ok(LayeredTemplateStore::default())
    }
}

fn layered(dir: &Path) -> LayeredTemplateStore {
    debug!(dir = %dir.display(), "Using template overrides");
    LayeredTemplateStore::with_overrides(DirectoryTemplateStore::new(dir))
}

// ── Reporting ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Status {
    Written,
    Cancelled,
    DryRun,
}

#[derive(Debug, Serialize)]
struct FieldSummary<'a> {
    name: &'a str,
    kind: &'static str,
}

/// The `--output-format json` document.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    status: Status,
    entity: &'a str,
    output_dir: &'a Path,
    views: Vec<&'static str>,
    files: Vec<&'a Path>,
    existing: &'a [PathBuf],
    fields: Vec<FieldSummary<'a>>,
    defaulted_fields: bool,
    controller_bindings: Vec<String>,
}

impl<'a> Summary<'a> {
    fn new(plan: &'a GenerationPlan, status: Status, written: &'a [PathBuf]) -> Self {
        let files = match status {
            Status::Written => written.iter().map(PathBuf::as_path).collect(),
            Status::Cancelled | Status::DryRun => {
                plan.outputs.iter().map(|o| o.target_path.as_path()).collect()
            }
        };

        Self {
            status,
            entity: plan.entity.name(),
            output_dir: &plan.output_dir,
            views: plan.targets.iter().map(|t| t.as_str()).collect(),
            files,
            existing: plan.overwrite.existing(),
            fields: plan
                .entity
                .fields()
                .iter()
                .map(|f| FieldSummary {
                    name: &f.name,
                    kind: f.kind.as_str(),
                })
                .collect(),
            defaulted_fields: plan.defaulted_fields,
            controller_bindings: controller_bindings(plan),
        }
    }
}

fn controller_bindings(plan: &GenerationPlan) -> Vec<String> {
    plan.entity
        .relations()
        .iter()
        .map(|r| r.controller_binding())
        .collect()
}

fn report(
    output: &OutputManager,
    plan: &GenerationPlan,
    status: Status,
    written: &[PathBuf],
) -> CliResult<()> {
    let summary = Summary::new(plan, status, written);
    if output.is_json() {
        output.json(&summary)?;
        return Ok(());
    }

    let entity = plan.entity.name();
    match status {
        Status::Cancelled => {
            output.warning("Operation cancelled. Existing files were left untouched:")?;
            output.list(summary.existing.iter().map(|p| p.display().to_string()))?;
            return Ok(());
        }
        Status::DryRun => {
            output.header(&format!(
                "Dry run: {} view(s) for {entity} in {}",
                summary.files.len(),
                plan.output_dir.display()
            ))?;
            output.list(summary.files.iter().map(|p| p.display().to_string()))?;
            if !summary.existing.is_empty() {
                output.warning("These files already exist and would need confirmation:")?;
                output.list(summary.existing.iter().map(|p| p.display().to_string()))?;
            }
        }
        Status::Written => {
            output.success(&format!(
                "Generated {} view(s) for {entity} in {}",
                summary.files.len(),
                plan.output_dir.display()
            ))?;
            output.list(summary.files.iter().map(|p| p.display().to_string()))?;
        }
    }

    if plan.defaulted_fields {
        output.warning(&format!(
            "{entity} has no writable fields; used defaults: {}",
            DEFAULT_FIELDS.join(", ")
        ))?;
    }

    output.print("")?;
    output.info("Fields:")?;
    output.list(
        summary
            .fields
            .iter()
            .map(|f| format!("{} ({})", f.name, f.kind)),
    )?;

    if !summary.controller_bindings.is_empty() {
        output.print("")?;
        output.info("Pass these collections to the views from your controller:")?;
        output.list(&summary.controller_bindings)?;
    }

    Ok(())
}
