//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `crudgen-core` and
//! `crudgen-adapters` just emit spans and events.
//!
//! | Flag(s)   | Level |
//! |-----------|-------|
//! | (none)    | WARN  |
//! | `-v`      | INFO  |
//! | `-vv`     | DEBUG |
//! | `-vvv`    | TRACE |
//! | `--quiet` | ERROR |
//!
//! A set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets the default filter applies to. The binary's own target is
/// `crudgen`.
const TARGETS: &[&str] = &["crudgen", "crudgen_core", "crudgen_adapters"];

/// Install the global subscriber. Call once, before any event fires.
///
/// Everything goes to stderr, keeping stdout for results.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(level_for(args)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Workspace crates at `level`, everything else off.
fn default_filter(level: LevelFilter) -> EnvFilter {
    TARGETS
        .iter()
        .fold(EnvFilter::new("off"), |filter, target| {
            match format!("{target}={level}").parse() {
                Ok(directive) => filter.add_directive(directive),
                Err(_) => filter,
            }
        })
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::Cli;

    fn level(flags: &[&str]) -> LevelFilter {
        let mut argv = vec!["crudgen"];
        argv.extend_from_slice(flags);
        argv.extend(["completions", "bash"]);
        level_for(&Cli::parse_from(argv).global)
    }

    #[test]
    fn verbosity_flags_raise_the_level() {
        assert_eq!(level(&[]), LevelFilter::WARN);
        assert_eq!(level(&["-v"]), LevelFilter::INFO);
        assert_eq!(level(&["-vv"]), LevelFilter::DEBUG);
        assert_eq!(level(&["-vvv"]), LevelFilter::TRACE);
        assert_eq!(level(&["-vvvvv"]), LevelFilter::TRACE);
    }

    #[test]
    fn quiet_means_errors_only() {
        assert_eq!(level(&["--quiet"]), LevelFilter::ERROR);
    }

    #[test]
    fn default_filter_names_every_crate() {
        let filter = default_filter(LevelFilter::DEBUG).to_string().to_lowercase();
        for target in TARGETS {
            assert!(filter.contains(&format!("{target}=debug")), "{filter}");
        }
    }
}
