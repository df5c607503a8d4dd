//! Package Init Service - main application orchestrator.
//!
//! This service coordinates the entire bootstrap workflow:
//! 1. Derive identifiers from the validated request
//! 2. Render and write the package manifest
//! 3. Render and write one or two assembly definition files
//! 4. Refresh the asset registry and apply project settings
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{AssetRegistry, Filesystem},
    },
    domain::{
        AssemblyDefinitionBuilder, PackageIdentity, ProjectName, extract_minor_version,
        render_manifest,
    },
    error::UpkgResult,
};

/// Manifest file name, fixed relative to the assets directory.
pub const MANIFEST_FILE: &str = "package.json";
/// Directory for the runtime assembly definition.
pub const RUNTIME_DIR: &str = "Runtime";
/// Directory for the editor assembly definition.
pub const EDITOR_DIR: &str = "Editor";

/// Validated input for one bootstrap run.
#[derive(Debug, Clone)]
pub struct InitRequest {
    /// Company name, pre-validated by configuration (non-empty).
    pub company_name: String,
    /// Project name; validation is carried by the type.
    pub project_name: ProjectName,
    /// Also generate the editor-only assembly.
    pub generate_editor_assembly: bool,
    /// Delete-then-rewrite descriptor files that already exist.
    pub overwrite: bool,
    /// Root directory the metadata files are written under.
    pub assets_dir: PathBuf,
    /// Editor version override; when `None` the registry is consulted.
    pub unity_version: Option<String>,
}

/// Outcome of one descriptor write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteOutcome {
    /// Rendered text written as the file's entire contents.
    Written,
    /// No target path was configured; nothing to do.
    SkippedNoPath,
    /// File already exists and overwrite was not permitted. Non-fatal.
    SkippedExisting,
}

/// What happened to one assembly definition file.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorReport {
    pub assembly_id: String,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
    /// Identity token assigned by the registry, when available.
    pub identity_token: Option<String>,
}

/// Summary of a completed bootstrap run.
#[derive(Debug, Clone, Serialize)]
pub struct InitReport {
    pub package_id: String,
    pub unity_version: String,
    pub manifest_path: PathBuf,
    pub runtime: DescriptorReport,
    pub editor: Option<DescriptorReport>,
}

/// Main bootstrap service.
///
/// Orchestrates identifier derivation, rendering, file writing, and registry
/// refresh. Single-threaded and synchronous: one user action drives one
/// uninterrupted sequence.
pub struct PackageInitService {
    filesystem: Box<dyn Filesystem>,
    registry: Box<dyn AssetRegistry>,
}

impl PackageInitService {
    /// Create a new init service with the given adapters.
    pub fn new(filesystem: Box<dyn Filesystem>, registry: Box<dyn AssetRegistry>) -> Self {
        Self {
            filesystem,
            registry,
        }
    }

    /// Bootstrap the package metadata files.
    ///
    /// This is the main use case. The request is already validated; nothing
    /// here re-checks names.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name,
            company = %request.company_name,
            assets_dir = %request.assets_dir.display(),
        )
    )]
    pub fn initialize(&self, request: &InitRequest) -> UpkgResult<InitReport> {
        let identity = PackageIdentity::derive(&request.company_name, &request.project_name);
        let unity_version = self.resolve_unity_version(request)?;

        info!(
            package_id = %identity.package_id(),
            unity_version = %unity_version,
            "Initializing package"
        );

        // 1. Manifest. Always written whole; the manifest location is fixed.
        let manifest_path = request.assets_dir.join(MANIFEST_FILE);
        let manifest = render_manifest(&identity, &unity_version);
        self.filesystem.write_file(&manifest_path, &manifest)?;
        info!(path = %manifest_path.display(), "Manifest written");

        // 2. Assembly folders. Both descriptors depend on these, so an
        //    unusable directory aborts the descriptor steps (the manifest
        //    above stays).
        let runtime_dir = request.assets_dir.join(RUNTIME_DIR);
        let editor_dir = request.assets_dir.join(EDITOR_DIR);
        self.ensure_directory(&runtime_dir)?;
        self.ensure_directory(&editor_dir)?;

        // 3. Runtime assembly definition.
        let runtime_path = runtime_dir.join(format!("{}.asmdef", identity.runtime_assembly_name()));
        let runtime_builder = AssemblyDefinitionBuilder::new(identity.runtime_assembly_id())
            .file_path(&runtime_path)
            .editor_only(false);
        let runtime_outcome = self.create_descriptor_file(&runtime_builder, request.overwrite)?;

        // 4. Refresh so the runtime file receives its identity token before
        //    the editor assembly needs to reference it.
        self.registry.refresh()?;
        let runtime_token = self.registry.identity_token_for(&runtime_path);

        let runtime = DescriptorReport {
            assembly_id: identity.runtime_assembly_id().to_string(),
            path: runtime_path,
            outcome: runtime_outcome,
            identity_token: runtime_token.clone(),
        };

        // 5. Editor assembly definition, linked to the runtime assembly.
        let editor = if request.generate_editor_assembly {
            let editor_path =
                editor_dir.join(format!("{}.asmdef", identity.editor_assembly_name()));
            let mut builder = AssemblyDefinitionBuilder::new(identity.editor_assembly_id())
                .file_path(&editor_path)
                .editor_only(true);

            match &runtime_token {
                Some(token) => builder = builder.add_references([token]),
                None => warn!(
                    path = %runtime.path.display(),
                    "No identity token for runtime assembly; editor assembly written without references"
                ),
            }

            let outcome = self.create_descriptor_file(&builder, request.overwrite)?;
            self.registry.refresh()?;
            let identity_token = self.registry.identity_token_for(&editor_path);

            Some(DescriptorReport {
                assembly_id: identity.editor_assembly_id().to_string(),
                path: editor_path,
                outcome,
                identity_token,
            })
        } else {
            self.registry.refresh()?;
            None
        };

        // 6. Final host-side step: global company/product settings.
        self.registry
            .apply_project_settings(identity.company_name(), identity.project_name())?;

        info!("Done initializing");

        Ok(InitReport {
            package_id: identity.package_id().to_string(),
            unity_version,
            manifest_path,
            runtime,
            editor,
        })
    }

    /// Best-effort removal of bootstrap leftovers.
    ///
    /// Each path is attempted once; failures are logged and skipped so one
    /// stubborn path never blocks the rest. Returns how many paths were
    /// actually removed.
    #[instrument(skip_all)]
    pub fn cleanup(&self, paths: &[PathBuf]) -> usize {
        let mut removed = 0;
        for path in paths {
            let result = if self.filesystem.is_dir(path) {
                self.filesystem.remove_dir_all(path)
            } else if self.filesystem.is_file(path) {
                self.filesystem.delete_file(path)
            } else {
                continue;
            };

            match result {
                Ok(()) => {
                    info!(path = %path.display(), "Removed bootstrap leftover");
                    removed += 1;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Cleanup failed"),
            }
        }
        removed
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve the `major.minor` version: explicit override first, then the
    /// registry's raw editor version.
    fn resolve_unity_version(&self, request: &InitRequest) -> UpkgResult<String> {
        let raw = request
            .unity_version
            .clone()
            .or_else(|| self.registry.editor_version())
            .ok_or(ApplicationError::EditorVersionUnavailable)?;

        extract_minor_version(&raw).ok_or_else(|| {
            crate::domain::DomainError::UnparsableEditorVersion { raw }.into()
        })
    }

    /// Make sure `path` is a usable directory, creating it when absent.
    fn ensure_directory(&self, path: &Path) -> UpkgResult<()> {
        if path.as_os_str().is_empty() || self.filesystem.is_file(path) {
            return Err(ApplicationError::DirectoryUnavailable {
                path: path.to_path_buf(),
                reason: "path is empty or occupied by a file".into(),
            }
            .into());
        }
        if self.filesystem.is_dir(path) {
            return Ok(());
        }
        self.filesystem.create_dir_all(path)
    }

    /// Consume a configured builder: render once and write the file.
    ///
    /// An existing file is deleted first when overwrite is permitted;
    /// otherwise the step is skipped and reported, never failed.
    fn create_descriptor_file(
        &self,
        builder: &AssemblyDefinitionBuilder,
        overwrite: bool,
    ) -> UpkgResult<WriteOutcome> {
        let Some(path) = builder.target_path() else {
            return Ok(WriteOutcome::SkippedNoPath);
        };

        if self.filesystem.exists(path) {
            if overwrite {
                self.filesystem.delete_file(path)?;
            } else {
                info!(path = %path.display(), "File already exists, skipping");
                return Ok(WriteOutcome::SkippedExisting);
            }
        }

        self.filesystem.write_file(path, &builder.render())?;
        Ok(WriteOutcome::Written)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Minimal in-test filesystem fake.
    #[derive(Debug, Clone, Default)]
    struct FakeFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
        dirs: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl FakeFs {
        fn read(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }

        fn seed_file(&self, path: &str, content: &str) {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.into());
        }
    }

    impl Filesystem for FakeFs {
        fn exists(&self, path: &Path) -> bool {
            self.is_file(path) || self.is_dir(path)
        }

        fn is_file(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }

        fn is_dir(&self, path: &Path) -> bool {
            self.dirs.lock().unwrap().iter().any(|d| d == path)
        }

        fn create_dir_all(&self, path: &Path) -> UpkgResult<()> {
            self.dirs.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }

        fn write_file(&self, path: &Path, content: &str) -> UpkgResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.into());
            Ok(())
        }

        fn read_file(&self, path: &Path) -> UpkgResult<String> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        fn delete_file(&self, path: &Path) -> UpkgResult<()> {
            self.files.lock().unwrap().remove(path);
            Ok(())
        }

        fn remove_dir_all(&self, path: &Path) -> UpkgResult<()> {
            self.dirs.lock().unwrap().retain(|d| !d.starts_with(path));
            self.files
                .lock()
                .unwrap()
                .retain(|p, _| !p.starts_with(path));
            Ok(())
        }
    }

    /// Registry fake handing out `tok-<file stem>` tokens.
    #[derive(Debug, Clone, Default)]
    struct FakeRegistry {
        version: Option<String>,
        settings: Arc<Mutex<Option<(String, String)>>>,
    }

    impl AssetRegistry for FakeRegistry {
        fn refresh(&self) -> UpkgResult<()> {
            Ok(())
        }

        fn identity_token_for(&self, path: &Path) -> Option<String> {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| format!("tok-{s}"))
        }

        fn editor_version(&self) -> Option<String> {
            self.version.clone()
        }

        fn apply_project_settings(&self, company: &str, product: &str) -> UpkgResult<()> {
            *self.settings.lock().unwrap() = Some((company.into(), product.into()));
            Ok(())
        }
    }

    fn request(editor: bool, overwrite: bool) -> InitRequest {
        InitRequest {
            company_name: "Acme".into(),
            project_name: ProjectName::parse("Widgets").unwrap(),
            generate_editor_assembly: editor,
            overwrite,
            assets_dir: PathBuf::from("Assets"),
            unity_version: Some("2021.3.12f1".into()),
        }
    }

    fn service(fs: FakeFs, registry: FakeRegistry) -> PackageInitService {
        PackageInitService::new(Box::new(fs), Box::new(registry))
    }

    #[test]
    fn initialize_writes_manifest_and_runtime_descriptor() {
        let fs = FakeFs::default();
        let svc = service(fs.clone(), FakeRegistry::default());

        let report = svc.initialize(&request(false, false)).unwrap();

        assert_eq!(report.package_id, "com.acme.widgets");
        assert_eq!(report.unity_version, "2021.3");
        assert_eq!(report.runtime.outcome, WriteOutcome::Written);
        assert!(report.editor.is_none());

        let manifest = fs.read("Assets/package.json").unwrap();
        assert!(manifest.contains(r#""name": "com.acme.widgets""#));
        assert!(manifest.contains(r#""displayName": "Widgets""#));

        let asmdef = fs.read("Assets/Runtime/Acme.Widgets.asmdef").unwrap();
        assert!(asmdef.contains(r#""name": "acme.widgets""#));
        assert!(asmdef.contains(r#""references": []"#));
    }

    #[test]
    fn editor_descriptor_references_runtime_token() {
        let fs = FakeFs::default();
        let svc = service(fs.clone(), FakeRegistry::default());

        let report = svc.initialize(&request(true, false)).unwrap();
        let editor = report.editor.unwrap();
        assert_eq!(editor.outcome, WriteOutcome::Written);

        let text = fs.read("Assets/Editor/Acme.Widgets.Editor.asmdef").unwrap();
        assert!(text.contains(r#""name": "acme.widgets.editor""#));
        assert!(text.contains(r#""includePlatforms": ["Editor"]"#));
        // Token for Runtime/Acme.Widgets.asmdef per the fake registry.
        assert!(text.contains(r#""references": ["GUID:tok-Acme.Widgets"]"#));
    }

    #[test]
    fn existing_descriptor_is_skipped_without_overwrite() {
        let fs = FakeFs::default();
        fs.seed_file("Assets/Runtime/Acme.Widgets.asmdef", "old content");
        let svc = service(fs.clone(), FakeRegistry::default());

        let report = svc.initialize(&request(false, false)).unwrap();

        assert_eq!(report.runtime.outcome, WriteOutcome::SkippedExisting);
        assert_eq!(
            fs.read("Assets/Runtime/Acme.Widgets.asmdef").unwrap(),
            "old content"
        );
    }

    #[test]
    fn existing_descriptor_is_replaced_with_overwrite() {
        let fs = FakeFs::default();
        fs.seed_file("Assets/Runtime/Acme.Widgets.asmdef", "old content");
        let svc = service(fs.clone(), FakeRegistry::default());

        let report = svc.initialize(&request(false, true)).unwrap();

        assert_eq!(report.runtime.outcome, WriteOutcome::Written);
        let text = fs.read("Assets/Runtime/Acme.Widgets.asmdef").unwrap();
        assert!(text.contains(r#""name": "acme.widgets""#));
        assert!(!text.contains("old content"));
    }

    #[test]
    fn skip_then_editor_still_gets_its_chance() {
        // Runtime file exists, editor file does not: the skip must not stop
        // the editor descriptor from being written.
        let fs = FakeFs::default();
        fs.seed_file("Assets/Runtime/Acme.Widgets.asmdef", "old");
        let svc = service(fs.clone(), FakeRegistry::default());

        let report = svc.initialize(&request(true, false)).unwrap();

        assert_eq!(report.runtime.outcome, WriteOutcome::SkippedExisting);
        assert_eq!(report.editor.unwrap().outcome, WriteOutcome::Written);
    }

    #[test]
    fn initialize_twice_with_overwrite_is_idempotent() {
        let fs = FakeFs::default();
        let svc = service(fs.clone(), FakeRegistry::default());

        svc.initialize(&request(true, true)).unwrap();
        let first = fs.read("Assets/Editor/Acme.Widgets.Editor.asmdef").unwrap();

        svc.initialize(&request(true, true)).unwrap();
        let second = fs.read("Assets/Editor/Acme.Widgets.Editor.asmdef").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn file_squatting_on_runtime_dir_aborts_descriptors() {
        let fs = FakeFs::default();
        fs.seed_file("Assets/Runtime", "I am a file, not a directory");
        let svc = service(fs.clone(), FakeRegistry::default());

        let err = svc.initialize(&request(false, false)).unwrap_err();
        assert!(err.to_string().contains("directory unavailable"));

        // The manifest was written before the directory check.
        assert!(fs.read("Assets/package.json").is_some());
    }

    #[test]
    fn version_resolution_prefers_request_override() {
        let fs = FakeFs::default();
        let registry = FakeRegistry {
            version: Some("2019.4.0f1".into()),
            ..Default::default()
        };
        let svc = service(fs, registry);

        let report = svc.initialize(&request(false, false)).unwrap();
        assert_eq!(report.unity_version, "2021.3");
    }

    #[test]
    fn version_falls_back_to_registry() {
        let fs = FakeFs::default();
        let registry = FakeRegistry {
            version: Some("2019.4.0f1".into()),
            ..Default::default()
        };
        let svc = service(fs, registry);

        let mut req = request(false, false);
        req.unity_version = None;
        let report = svc.initialize(&req).unwrap();
        assert_eq!(report.unity_version, "2019.4");
    }

    #[test]
    fn missing_version_everywhere_is_an_error() {
        let svc = service(FakeFs::default(), FakeRegistry::default());
        let mut req = request(false, false);
        req.unity_version = None;
        assert!(svc.initialize(&req).is_err());
    }

    #[test]
    fn project_settings_receive_company_and_product() {
        let fs = FakeFs::default();
        let registry = FakeRegistry::default();
        let settings = Arc::clone(&registry.settings);
        let svc = service(fs, registry);

        svc.initialize(&request(false, false)).unwrap();

        assert_eq!(
            settings.lock().unwrap().clone(),
            Some(("Acme".into(), "Widgets".into()))
        );
    }

    #[test]
    fn cleanup_removes_files_and_dirs_best_effort() {
        let fs = FakeFs::default();
        fs.seed_file("README.md", "readme");
        fs.create_dir_all(Path::new("Images")).unwrap();
        let svc = service(fs.clone(), FakeRegistry::default());

        let removed = svc.cleanup(&[
            PathBuf::from("README.md"),
            PathBuf::from("Images"),
            PathBuf::from("DoesNotExist"),
        ]);

        assert_eq!(removed, 2);
        assert!(fs.read("README.md").is_none());
    }
}
