//! `crudgen config` — read and write configuration values.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys `get` and `set` accept.
const KEYS: &[&str] = &[
    "defaults.path",
    "defaults.extension",
    "defaults.views_dir",
    "templates.dir",
    "schema.path",
    "output.no_color",
    "output.format",
];

const FORMATS: &[&str] = &["auto", "human", "plain", "json"];

/// Dispatch to the correct config subcommand.
///
/// `config_file` is the `--config` flag; `set` and `path` act on it when
/// given, otherwise on the default location.
#[instrument(skip_all)]
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let target = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&format!("{key} = {value:?}"))?;
            }
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&target, &key, &value)?;
            output.success(&format!("Set {key} = {value:?} in {}", target.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            output.print(&target.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let display = |p: &Path| p.display().to_string();
    match key {
        "defaults.path" => Ok(config.defaults.path.clone()),
        "defaults.extension" => Ok(config.defaults.extension.clone()),
        "defaults.views_dir" => Ok(display(&config.defaults.views_dir)),
        "templates.dir" => Ok(config.templates.dir.as_deref().map(display).unwrap_or_default()),
        "schema.path" => Ok(display(&config.schema.path)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(unknown_key(key)),
    }
}

/// Typed TOML value for `key`, rejecting values the loader would not accept.
fn parse_value(key: &str, raw: &str) -> CliResult<toml::Value> {
    if !KEYS.contains(&key) {
        return Err(unknown_key(key));
    }

    match key {
        "output.no_color" => raw
            .trim()
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| CliError::InvalidInput {
                message: format!("{key} expects true or false, got '{raw}'"),
            }),
        "output.format" if !FORMATS.contains(&raw) => Err(CliError::InvalidInput {
            message: format!("{key} expects one of {}, got '{raw}'", FORMATS.join(", ")),
        }),
        _ => Ok(toml::Value::String(raw.to_string())),
    }
}

/// Update one key in the TOML file at `path`, keeping every other entry.
fn set_config_value(path: &Path, key: &str, raw: &str) -> CliResult<()> {
    let value = parse_value(key, raw)?;

    let mut table: toml::Table = if path.exists() {
        let text = fs::read_to_string(path)
            .with_cli_context(|| format!("failed to read {}", path.display()))?;
        text.parse().map_err(|e: toml::de::Error| CliError::ConfigError {
            message: format!("{} is not valid TOML: {}", path.display(), e.message()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let (section, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let entry = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(section_table) = entry else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' in {} is not a table", path.display()),
            source: None,
        });
    };
    section_table.insert(field.to_string(), value);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("failed to create {}", parent.display()))?;
    }
    let text = toml::to_string_pretty(&table).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    fs::write(path, text).with_cli_context(|| format!("failed to write {}", path.display()))?;

    debug!(path = %path.display(), key, "Configuration updated");
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use tempfile::TempDir;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.path").unwrap(), "forms");
        assert_eq!(get_config_value(&cfg, "templates.dir").unwrap(), "");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn every_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
    }

    #[test]
    fn set_creates_file_and_keeps_other_entries() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        set_config_value(&path, "defaults.path", "admin").unwrap();
        set_config_value(&path, "output.no_color", "true").unwrap();
        set_config_value(&path, "defaults.extension", "html").unwrap();

        let table: toml::Table = fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(table["defaults"]["path"].as_str(), Some("admin"));
        assert_eq!(table["defaults"]["extension"].as_str(), Some("html"));
        assert_eq!(table["output"]["no_color"].as_bool(), Some(true));
    }

    #[test]
    fn set_rejects_bad_values() {
        assert!(matches!(
            parse_value("output.no_color", "maybe"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_value("output.format", "yaml"),
            Err(CliError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_value("defaults.lang", "rust"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
