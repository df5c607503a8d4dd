//! `.meta` sidecar asset registry.
//!
//! Outside a running Unity editor there is no AssetDatabase, but the identity
//! machinery is just files on disk: every asset's GUID lives in a `.meta`
//! sidecar next to it. This adapter reproduces the slice of that machinery
//! the bootstrapper needs:
//!
//! - `refresh()` walks the project for `.asmdef` files lacking a sidecar and
//!   assigns each a fresh GUID, the way the editor's import step would.
//! - `identity_token_for` reads the `guid:` line back out of a sidecar.
//! - `editor_version` comes from `ProjectSettings/ProjectVersion.txt`.
//! - `apply_project_settings` rewrites the company/product lines of
//!   `ProjectSettings/ProjectSettings.asset` when that file exists.
//!
//! Unity re-imports everything on the next editor start and keeps the GUIDs
//! found in existing sidecars, so files written here are picked up as-is.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use upkg_core::{
    application::{ApplicationError, ports::AssetRegistry},
    error::UpkgResult,
};

const PROJECT_VERSION_FILE: &str = "ProjectSettings/ProjectVersion.txt";
const PROJECT_SETTINGS_FILE: &str = "ProjectSettings/ProjectSettings.asset";
const EDITOR_VERSION_KEY: &str = "m_EditorVersion:";

/// Production asset registry backed by `.meta` sidecar files.
#[derive(Debug, Clone)]
pub struct MetaFileRegistry {
    /// Unity project root: the directory holding `Assets/` and
    /// `ProjectSettings/`.
    root: PathBuf,
}

impl MetaFileRegistry {
    /// Create a registry rooted at the given Unity project directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn sidecar_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".meta");
        PathBuf::from(name)
    }

    fn render_sidecar(guid: &str) -> String {
        format!(
            "fileFormatVersion: 2\nguid: {guid}\nAssemblyDefinitionImporter:\n  externalObjects: {{}}\n"
        )
    }

    /// Rewrite one `key: value` line of a settings block, preserving the
    /// line's indentation. Returns the new text when the key was found.
    fn replace_setting(text: &str, key: &str, value: &str) -> Option<String> {
        let mut found = false;
        let lines: Vec<String> = text
            .lines()
            .map(|line| {
                let trimmed = line.trim_start();
                if trimmed.starts_with(key) {
                    found = true;
                    let indent = &line[..line.len() - trimmed.len()];
                    format!("{indent}{key} {value}")
                } else {
                    line.to_string()
                }
            })
            .collect();

        found.then(|| {
            let mut out = lines.join("\n");
            if text.ends_with('\n') {
                out.push('\n');
            }
            out
        })
    }
}

impl AssetRegistry for MetaFileRegistry {
    /// Assign GUIDs to assembly definition files missing a sidecar.
    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn refresh(&self) -> UpkgResult<()> {
        let mut assigned = 0usize;

        for entry in WalkDir::new(&self.root).into_iter().filter_map(Result::ok) {
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some("asmdef")
            {
                continue;
            }

            let sidecar = Self::sidecar_path(path);
            if sidecar.exists() {
                continue;
            }

            let guid = Uuid::new_v4().simple().to_string();
            std::fs::write(&sidecar, Self::render_sidecar(&guid)).map_err(|e| {
                ApplicationError::RegistryError {
                    reason: format!("failed to write sidecar '{}': {e}", sidecar.display()),
                }
            })?;
            debug!(asset = %path.display(), guid = %guid, "Sidecar created");
            assigned += 1;
        }

        info!(assigned, "Registry refresh complete");
        Ok(())
    }

    fn identity_token_for(&self, path: &Path) -> Option<String> {
        let sidecar = Self::sidecar_path(path);
        let text = std::fs::read_to_string(&sidecar).ok()?;
        text.lines()
            .find_map(|line| line.strip_prefix("guid:"))
            .map(|guid| guid.trim().to_string())
            .filter(|guid| !guid.is_empty())
    }

    fn editor_version(&self) -> Option<String> {
        let path = self.root.join(PROJECT_VERSION_FILE);
        let text = std::fs::read_to_string(&path).ok()?;
        text.lines()
            .find_map(|line| line.trim_start().strip_prefix(EDITOR_VERSION_KEY))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn apply_project_settings(&self, company_name: &str, product_name: &str) -> UpkgResult<()> {
        let path = self.root.join(PROJECT_SETTINGS_FILE);
        let Ok(text) = std::fs::read_to_string(&path) else {
            // No settings asset outside a full Unity project; nothing to update.
            debug!(path = %path.display(), "No project settings asset, skipping");
            return Ok(());
        };

        let mut updated = text;
        for (key, value) in [
            ("companyName:", company_name),
            ("productName:", product_name),
        ] {
            match Self::replace_setting(&updated, key, value) {
                Some(next) => updated = next,
                None => warn!(key, "Setting not found in project settings asset"),
            }
        }

        std::fs::write(&path, updated).map_err(|e| {
            ApplicationError::RegistryError {
                reason: format!("failed to update '{}': {e}", path.display()),
            }
            .into()
        })
    }
}
