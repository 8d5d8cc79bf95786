//! Configuration subcommands.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::DeskError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or serialized.
pub fn config(
    cmd: ConfigCommands,
    paths: &Paths,
    config: &Config,
    format: OutputFormat,
) -> Result<String, DeskError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Pretty => config.to_yaml(),
            OutputFormat::Json => to_json(config),
        },
        ConfigCommands::Path => show_paths(paths, format),
        ConfigCommands::Init { force } => init(paths, force, format),
    }
}

fn show_paths(paths: &Paths, format: OutputFormat) -> Result<String, DeskError> {
    let log_file = paths.log_file();
    match format {
        OutputFormat::Json => {
            let output = json!({
                "root": paths.root,
                "config": paths.config_file,
                "database": paths.database,
                "log": log_file,
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Pretty => {
            let mut output = String::new();
            for (label, path) in [
                ("Root", &paths.root),
                ("Config", &paths.config_file),
                ("Database", &paths.database),
                ("Log", &log_file),
            ] {
                let marker = if path.exists() {
                    "✓".green()
                } else {
                    "·".dimmed()
                };
                output.push_str(&format!("{marker} {:<9} {}\n", label.dimmed(), path.display()));
            }
            Ok(output.trim_end().to_string())
        }
    }
}

fn init(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, DeskError> {
    if paths.config_file.exists() && !force {
        return Err(DeskError::Config(format!(
            "{} already exists (use --force to overwrite)",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "written": paths.config_file
        }))?),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote".green().bold(),
            paths.config_file.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("desk"));

        config(
            ConfigCommands::Init { force: false },
            &paths,
            &Config::default(),
            OutputFormat::Pretty,
        )
        .unwrap();

        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.timer.focus_minutes, 25);
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        std::fs::write(&paths.config_file, "timer:\n  focus_minutes: 40\n").unwrap();

        let err = config(
            ConfigCommands::Init { force: false },
            &paths,
            &Config::default(),
            OutputFormat::Pretty,
        )
        .unwrap_err();
        assert!(matches!(err, DeskError::Config(_)));

        config(
            ConfigCommands::Init { force: true },
            &paths,
            &Config::default(),
            OutputFormat::Pretty,
        )
        .unwrap();
        let loaded = Config::load_from_path(&paths.config_file).unwrap();
        assert_eq!(loaded.timer.focus_minutes, 25);
    }

    #[test]
    fn test_path_json() {
        let paths = Paths::with_root("/tmp/desk".into());
        let out = config(
            ConfigCommands::Path,
            &paths,
            &Config::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed["config"], "/tmp/desk/config.yaml");
        assert_eq!(parsed["log"], "/tmp/desk/logs/focusdesk.log");
    }

    #[test]
    fn test_show_yaml() {
        let paths = Paths::with_root("/tmp/desk".into());
        let out = config(
            ConfigCommands::Show,
            &paths,
            &Config::default(),
            OutputFormat::Pretty,
        )
        .unwrap();
        assert!(out.contains("focus_minutes: 25"));
        assert!(out.contains("confirm_delete: true"));
    }
}
