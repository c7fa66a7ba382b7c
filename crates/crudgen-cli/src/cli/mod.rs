//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "crudgen",
    bin_name = "crudgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate CRUD views for an entity",
    long_about = "crudgen renders index, create, edit, show and form views \
                  for an entity from its writable fields.",
    after_help = "EXAMPLES:\n\
        \x20 crudgen generate Product --path admin/products\n\
        \x20 crudgen generate Product --path admin/products --only index,show\n\
        \x20 crudgen generate Post --fields title,body,author_id --dry-run\n\
        \x20 crudgen publish --components",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate CRUD views for an entity.
    #[command(
        visible_alias = "g",
        about = "Generate CRUD views for an entity",
        after_help = "EXAMPLES:\n\
            \x20 crudgen generate Product --path admin/products\n\
            \x20 crudgen generate Product --exclude show --force\n\
            \x20 crudgen generate Product --schema crudgen.toml --templates stubs"
    )]
    Generate(GenerateArgs),

    /// Copy the built-in templates and components into the project.
    #[command(
        about = "Publish templates and components for customisation",
        after_help = "EXAMPLES:\n\
            \x20 crudgen publish               # templates and components\n\
            \x20 crudgen publish --templates   # templates only\n\
            \x20 crudgen publish --components --force"
    )]
    Publish(PublishArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 crudgen completions bash > ~/.local/share/bash-completion/completions/crudgen\n\
            \x20 crudgen completions zsh  > ~/.zfunc/_crudgen\n\
            \x20 crudgen completions fish > ~/.config/fish/completions/crudgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the crudgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 crudgen config get defaults.path\n\
            \x20 crudgen config set defaults.path admin\n\
            \x20 crudgen config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `crudgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity name, e.g. `Product`.
    #[arg(value_name = "ENTITY", help = "Entity name (letters, digits, underscores)")]
    pub entity: String,

    /// View path relative to the views directory. Prompted for when omitted
    /// in an interactive session.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        help = "View path, e.g. admin/products"
    )]
    pub path: Option<String>,

    /// Views to generate.
    #[arg(
        long = "only",
        value_name = "LIST",
        help = "Comma-separated views to generate (index,create,edit,show,form)"
    )]
    pub only: Option<String>,

    /// Views to skip.
    #[arg(
        long = "exclude",
        value_name = "LIST",
        help = "Comma-separated views to skip"
    )]
    pub exclude: Option<String>,

    /// Overwrite existing files without asking.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Answer yes to the overwrite confirmation.
    #[arg(short = 'y', long = "yes", help = "Confirm overwrites without prompting")]
    pub yes: bool,

    /// Entity fields given inline instead of read from the schema file.
    #[arg(
        long = "fields",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Comma-separated writable fields, bypassing the schema file"
    )]
    pub fields: Option<Vec<String>>,

    /// Entity schema file.
    #[arg(
        long = "schema",
        value_name = "FILE",
        help = "Entity schema file (default: schema.path from config)"
    )]
    pub schema: Option<PathBuf>,

    /// Directory of customised templates.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template override directory"
    )]
    pub templates: Option<PathBuf>,

    /// Render and report without writing anything.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,
}

// ── publish ───────────────────────────────────────────────────────────────────

/// Arguments for `crudgen publish`.
///
/// With neither `--templates` nor `--components`, both are published.
#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Publish the view templates.
    #[arg(long = "templates", help = "Publish view templates")]
    pub templates: bool,

    /// Publish the UI components.
    #[arg(long = "components", help = "Publish UI components")]
    pub components: bool,

    /// Destination directory. Only valid with exactly one of the two kinds.
    #[arg(
        long = "to",
        value_name = "DIR",
        help = "Destination directory (default: under the views directory)"
    )]
    pub to: Option<PathBuf>,

    /// Overwrite files that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

impl PublishArgs {
    /// `(templates, components)` after applying the "neither means both" rule.
    pub fn kinds(&self) -> (bool, bool) {
        if !self.templates && !self.components {
            (true, true)
        } else {
            (self.templates, self.components)
        }
    }
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `crudgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `crudgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.path`.
        key: String,
    },
    /// Set a configuration key in the configuration file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
