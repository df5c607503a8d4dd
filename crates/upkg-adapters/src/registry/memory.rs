//! In-memory asset registry for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use upkg_core::{application::ports::AssetRegistry, error::UpkgResult};

/// In-memory registry with deterministic, pre-seeded tokens.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    inner: Arc<RwLock<MemoryRegistryInner>>,
}

#[derive(Debug, Default)]
struct MemoryRegistryInner {
    tokens: HashMap<PathBuf, String>,
    editor_version: Option<String>,
    applied_settings: Option<(String, String)>,
    refresh_count: usize,
}

impl MemoryRegistry {
    /// Create a new empty memory registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a token for a path.
    pub fn with_token(self, path: impl Into<PathBuf>, token: impl Into<String>) -> Self {
        self.inner
            .write()
            .unwrap()
            .tokens
            .insert(path.into(), token.into());
        self
    }

    /// Set the raw editor version string.
    pub fn with_editor_version(self, version: impl Into<String>) -> Self {
        self.inner.write().unwrap().editor_version = Some(version.into());
        self
    }

    /// How many times `refresh` was called (testing helper).
    pub fn refresh_count(&self) -> usize {
        self.inner.read().unwrap().refresh_count
    }

    /// The last company/product pair applied (testing helper).
    pub fn applied_settings(&self) -> Option<(String, String)> {
        self.inner.read().unwrap().applied_settings.clone()
    }
}

impl AssetRegistry for MemoryRegistry {
    fn refresh(&self) -> UpkgResult<()> {
        self.inner.write().unwrap().refresh_count += 1;
        Ok(())
    }

    fn identity_token_for(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().tokens.get(path).cloned()
    }

    fn editor_version(&self) -> Option<String> {
        self.inner.read().unwrap().editor_version.clone()
    }

    fn apply_project_settings(&self, company_name: &str, product_name: &str) -> UpkgResult<()> {
        self.inner.write().unwrap().applied_settings =
            Some((company_name.to_string(), product_name.to_string()));
        Ok(())
    }
}
