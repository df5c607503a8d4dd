//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use upkg_core::application::ports::Filesystem;

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path.as_ref()).cloned()
    }

    /// Pre-populate a file (testing helper).
    pub fn seed_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.into(), content.into());
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.read().unwrap().files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> upkg_core::error::UpkgResult<()> {
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> upkg_core::error::UpkgResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> upkg_core::error::UpkgResult<String> {
        let inner = self.inner.read().unwrap();
        inner.files.get(path).cloned().ok_or_else(|| {
            upkg_core::application::ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn delete_file(&self, path: &Path) -> upkg_core::error::UpkgResult<()> {
        let mut inner = self.inner.write().unwrap();
        inner.files.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> upkg_core::error::UpkgResult<()> {
        let mut inner = self.inner.write().unwrap();

        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_records_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Assets/Runtime")).unwrap();
        assert!(fs.is_dir(Path::new("Assets")));
        assert!(fs.is_dir(Path::new("Assets/Runtime")));
    }

    #[test]
    fn remove_dir_all_takes_contents_with_it() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("Assets/Runtime")).unwrap();
        fs.write_file(Path::new("Assets/Runtime/x.asmdef"), "{}")
            .unwrap();

        fs.remove_dir_all(Path::new("Assets")).unwrap();
        assert!(!fs.exists(Path::new("Assets/Runtime/x.asmdef")));
        assert!(!fs.is_dir(Path::new("Assets")));
    }

    #[test]
    fn file_and_dir_predicates_are_disjoint() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("a"), "x").unwrap();
        fs.create_dir_all(Path::new("b")).unwrap();

        assert!(fs.is_file(Path::new("a")) && !fs.is_dir(Path::new("a")));
        assert!(fs.is_dir(Path::new("b")) && !fs.is_file(Path::new("b")));
    }
}
