//! Interactive prompts.
//!
//! Prompts are only shown when stdin is a terminal. Otherwise the path
//! prompt takes its default and the overwrite confirmation declines, so a
//! piped or scripted run never blocks and never overwrites by accident.
//!
//! With the `interactive` feature the prompts use `dialoguer`; without it
//! they read a line from stdin.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use tracing::debug;

use crate::error::CliResult;

/// `true` when a human can answer prompts.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}

/// Ask for the view path, offering `default`.
pub fn ask_path(default: &str) -> CliResult<String> {
    if !is_interactive() {
        debug!(default, "Not interactive, using default view path");
        return Ok(default.to_string());
    }
    read_path(default)
}

/// Ask whether the listed files may be overwritten. Defaults to no.
pub fn confirm_overwrite(existing: &[PathBuf]) -> CliResult<bool> {
    if !is_interactive() {
        debug!(count = existing.len(), "Not interactive, declining overwrite");
        return Ok(false);
    }

    eprintln!("The following files already exist:");
    for path in existing {
        eprintln!("  {}", path.display());
    }
    read_confirm("Overwrite them?")
}

#[cfg(feature = "interactive")]
fn read_path(default: &str) -> CliResult<String> {
    let value: String = dialoguer::Input::new()
        .with_prompt("View path (e.g. admin/products)")
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

#[cfg(feature = "interactive")]
fn read_confirm(question: &str) -> CliResult<bool> {
    Ok(dialoguer::Confirm::new()
        .with_prompt(question)
        .default(false)
        .interact()?)
}

#[cfg(not(feature = "interactive"))]
fn read_path(default: &str) -> CliResult<String> {
    let answer = read_line(&format!("View path [{default}]: "))?;
    Ok(path_or_default(&answer, default))
}

#[cfg(not(feature = "interactive"))]
fn read_confirm(question: &str) -> CliResult<bool> {
    let answer = read_line(&format!("{question} [y/N] "))?;
    Ok(is_yes(&answer))
}

#[cfg(not(feature = "interactive"))]
fn read_line(prompt: &str) -> CliResult<String> {
    use std::io::Write;

    use crate::error::IntoCli;

    let mut stderr = io::stderr();
    write!(stderr, "{prompt}").with_cli_context(|| "failed to write prompt")?;
    stderr.flush().with_cli_context(|| "failed to flush prompt")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read answer")?;
    Ok(input)
}

#[cfg_attr(feature = "interactive", allow(dead_code))]
fn path_or_default(answer: &str, default: &str) -> String {
    let answer = answer.trim();
    if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    }
}

#[cfg_attr(feature = "interactive", allow(dead_code))]
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answer_takes_default() {
        assert_eq!(path_or_default("  \n", "forms"), "forms");
        assert_eq!(path_or_default("admin/products\n", "forms"), "admin/products");
    }

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes("YES"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("sure"));
    }
}
