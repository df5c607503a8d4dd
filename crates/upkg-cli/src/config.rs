//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`UPKG_COMPANY`, `UPKG_UNITY_VERSION`)
//! 3. Config file (`--config` path or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for package initialisation.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Company name used when `--company` is not given.
    pub company_name: Option<String>,
    /// Unity editor version used when the project does not declare one.
    pub unity_version: Option<String>,
    /// Assets directory relative to the project root.
    pub assets_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            company_name: None,
            unity_version: None,
            assets_dir: "Assets".into(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// to use the default location).  An explicitly passed file must exist
    /// and parse; the default file is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::read_file(path)?,
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::read_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        // Env vars (possibly loaded from .env by dotenvy) beat the file.
        if let Ok(company) = std::env::var("UPKG_COMPANY") {
            if !company.is_empty() {
                config.defaults.company_name = Some(company);
            }
        }
        if let Ok(version) = std::env::var("UPKG_UNITY_VERSION") {
            if !version.is_empty() {
                config.defaults.unity_version = Some(version);
            }
        }

        Ok(config)
    }

    fn read_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config file '{}': {e}", path.display()))?;
        toml::from_str(&text)
            .map_err(|e| anyhow::anyhow!("invalid config file '{}': {e}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.upkg.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "upkg", "upkg")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".upkg.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assets_dir_is_assets() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.assets_dir, "Assets");
        assert_eq!(cfg.defaults.company_name, None);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg: AppConfig = toml::from_str("[defaults]\ncompany_name = \"Acme\"\n").unwrap();
        assert_eq!(cfg.defaults.company_name.as_deref(), Some("Acme"));
        assert_eq!(cfg.defaults.assets_dir, "Assets");
        assert_eq!(cfg.output.format, "human");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn explicit_file_is_parsed() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "[defaults]\ncompany_name = \"Acme\"\nunity_version = \"2021.3.12f1\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.company_name.as_deref(), Some("Acme"));
        assert_eq!(cfg.defaults.unity_version.as_deref(), Some("2021.3.12f1"));
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
