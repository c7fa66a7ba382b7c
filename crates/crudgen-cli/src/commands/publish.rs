//! `crudgen publish` — copy the embedded templates and components into the
//! project so they can be customised.

use std::path::PathBuf;

use serde::Serialize;
use tracing::instrument;

use crudgen_adapters::{
    AssetKind, LocalFilesystem, PublishReport,
    assets::{Asset, COMPONENTS, TEMPLATES},
    publish,
};
use crudgen_core::application::ports::Filesystem;

use crate::{
    cli::PublishArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One family to publish and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Job {
    kind: AssetKind,
    destination: PathBuf,
}

impl Job {
    fn assets(&self) -> &'static [Asset] {
        match self.kind {
            AssetKind::Template => TEMPLATES,
            AssetKind::Component => COMPONENTS,
        }
    }
}

#[derive(Debug, Serialize)]
struct JobReport {
    kind: AssetKind,
    destination: PathBuf,
    #[serde(flatten)]
    report: PublishReport,
}

/// Execute the `publish` command.
#[instrument(skip_all)]
pub fn execute(args: PublishArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let jobs = plan_jobs(&args, &config)?;
    run(&LocalFilesystem::new(), &jobs, args.force, &output)
}

/// `--to` replaces the default destination, so it needs a single family.
fn plan_jobs(args: &PublishArgs, config: &AppConfig) -> CliResult<Vec<Job>> {
    let (templates, components) = args.kinds();

    if args.to.is_some() && templates && components {
        return Err(CliError::InvalidInput {
            message: "--to needs exactly one of --templates or --components".into(),
        });
    }

    let mut jobs = Vec::new();
    if templates {
        jobs.push(Job {
            kind: AssetKind::Template,
            destination: args
                .to
                .clone()
                .unwrap_or_else(|| config.published_templates_dir()),
        });
    }
    if components {
        jobs.push(Job {
            kind: AssetKind::Component,
            destination: args.to.clone().unwrap_or_else(|| config.components_dir()),
        });
    }
    Ok(jobs)
}

fn run(fs: &dyn Filesystem, jobs: &[Job], force: bool, output: &OutputManager) -> CliResult<()> {
    let mut reports = Vec::with_capacity(jobs.len());
    for job in jobs {
        let report = publish(fs, &job.destination, job.assets(), force)?;
        reports.push(JobReport {
            kind: job.kind,
            destination: job.destination.clone(),
            report,
        });
    }

    if output.is_json() {
        output.json(&reports)?;
        return Ok(());
    }

    for r in &reports {
        let label = match r.kind {
            AssetKind::Template => "templates",
            AssetKind::Component => "components",
        };
        output.success(&format!(
            "Published {} {label} to {}",
            r.report.written.len(),
            r.destination.display()
        ))?;
        output.list(r.report.written.iter().map(|p| p.display().to_string()))?;

        if !r.report.skipped.is_empty() {
            output.warning(&format!(
                "Skipped {} existing file(s); use --force to overwrite:",
                r.report.skipped.len()
            ))?;
            output.list(r.report.skipped.iter().map(|p| p.display().to_string()))?;
        }
    }
    Ok(())
}
