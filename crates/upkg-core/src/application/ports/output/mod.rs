//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `upkg-adapters` crate provides implementations.

use std::path::Path;

use crate::error::UpkgResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `upkg_adapters::filesystem::LocalFilesystem` (production)
/// - `upkg_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Handles are opened, written, and closed inside each call; nothing is
///   held across operations
/// - `write_file` truncates/creates — a successful write is the file's
///   entire contents
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if a regular file exists at path.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if a directory exists at path.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> UpkgResult<()>;

    /// Write content as a file's entire contents (truncate/create).
    fn write_file(&self, path: &Path, content: &str) -> UpkgResult<()>;

    /// Read a file's entire contents.
    fn read_file(&self, path: &Path) -> UpkgResult<String>;

    /// Delete a single file.
    fn delete_file(&self, path: &Path) -> UpkgResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> UpkgResult<()>;
}

/// Port for the host asset registry.
///
/// The host environment (the Unity editor) assigns every asset a stable
/// identity token (its GUID) that other files use for cross-references.
/// This port is the narrow slice of that machinery the core needs.
///
/// Implemented by:
/// - `upkg_adapters::registry::MetaFileRegistry` (production, `.meta` sidecars)
/// - `upkg_adapters::registry::MemoryRegistry` (testing)
pub trait AssetRegistry: Send + Sync {
    /// Index newly written assets so they receive identity tokens.
    fn refresh(&self) -> UpkgResult<()>;

    /// Look up the identity token for a file, if it has one.
    fn identity_token_for(&self, path: &Path) -> Option<String>;

    /// Raw editor version string, e.g. `2021.3.12f1`, if known.
    fn editor_version(&self) -> Option<String>;

    /// Update the host's global company/product settings.
    fn apply_project_settings(&self, company_name: &str, product_name: &str) -> UpkgResult<()>;
}
