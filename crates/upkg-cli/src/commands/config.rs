//! `upkg config` — read and write configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<&PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value:?}"))?;
        }

        ConfigCommands::Set { key, value } => {
            let path = config_file
                .cloned()
                .unwrap_or_else(AppConfig::config_path);
            let mut on_disk = if path.is_file() {
                AppConfig::load(Some(&path)).map_err(|e| CliError::ConfigError {
                    message: e.to_string(),
                    source: None,
                })?
            } else {
                AppConfig::default()
            };

            set_config_value(&mut on_disk, &key, &value)?;
            write_config(&path, &on_disk)?;
            output.success(&format!("{key} = {value} ({})", path.display()))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.company" => Ok(config.defaults.company_name.clone().unwrap_or_default()),
        "defaults.unity_version" => Ok(config.defaults.unity_version.clone().unwrap_or_default()),
        "defaults.assets_dir" => Ok(config.defaults.assets_dir.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.company" => config.defaults.company_name = Some(value.to_string()),
        "defaults.unity_version" => config.defaults.unity_version = Some(value.to_string()),
        "defaults.assets_dir" => config.defaults.assets_dir = value.to_string(),
        "output.no_color" => {
            config.output.no_color = value.parse().map_err(|_| CliError::ConfigError {
                message: format!("output.no_color expects true or false, got '{value}'"),
                source: None,
            })?;
        }
        "output.format" => config.output.format = value.to_string(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    }
    Ok(())
}

fn write_config(path: &std::path::Path, config: &AppConfig) -> CliResult<()> {
    let text = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::ConfigError {
                message: format!("cannot create '{}': {e}", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }
    }

    std::fs::write(path, text).map_err(|e| CliError::ConfigError {
        message: format!("cannot write '{}': {e}", path.display()),
        source: Some(Box::new(e)),
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.assets_dir").unwrap(), "Assets");
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
    fn set_then_get_company() {
        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.company", "Acme").unwrap();
        assert_eq!(get_config_value(&cfg, "defaults.company").unwrap(), "Acme");
    }

    #[test]
    fn set_no_color_rejects_non_bool() {
        let mut cfg = AppConfig::default();
        assert!(set_config_value(&mut cfg, "output.no_color", "maybe").is_err());
        assert!(set_config_value(&mut cfg, "output.no_color", "true").is_ok());
        assert!(cfg.output.no_color);
    }

    #[test]
    fn write_config_round_trips() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");

        let mut cfg = AppConfig::default();
        set_config_value(&mut cfg, "defaults.company", "Acme").unwrap();
        write_config(&path, &cfg).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.defaults.company_name.as_deref(), Some("Acme"));
    }
}
