//! End-to-end bootstrap flow through real adapters.

use std::path::PathBuf;

use upkg_adapters::{LocalFilesystem, MemoryFilesystem, MemoryRegistry, MetaFileRegistry};
use upkg_core::{
    application::{InitRequest, PackageInitService, WriteOutcome},
    domain::ProjectName,
};

fn request(assets_dir: PathBuf, editor: bool) -> InitRequest {
    InitRequest {
        company_name: "Acme".into(),
        project_name: ProjectName::parse("Widgets").unwrap(),
        generate_editor_assembly: editor,
        overwrite: false,
        assets_dir,
        unity_version: Some("2021.3.12f1".into()),
    }
}

#[test]
fn full_bootstrap_with_memory_adapters() {
    let filesystem = MemoryFilesystem::new();
    let registry = MemoryRegistry::new()
        .with_token("Assets/Runtime/Acme.Widgets.asmdef", "cafef00d");

    let service = PackageInitService::new(Box::new(filesystem.clone()), Box::new(registry.clone()));
    let report = service.initialize(&request(PathBuf::from("Assets"), true)).unwrap();

    // Manifest
    let manifest = filesystem.read("Assets/package.json").unwrap();
    assert!(manifest.contains(r#""name": "com.acme.widgets""#));
    assert!(manifest.contains(r#""displayName": "Widgets""#));
    assert!(manifest.contains(r#""unity": "2021.3""#));

    // Runtime descriptor
    let runtime = filesystem.read("Assets/Runtime/Acme.Widgets.asmdef").unwrap();
    assert!(runtime.contains(r#""name": "acme.widgets""#));
    assert!(runtime.contains(r#""references": []"#));

    // Editor descriptor, linked via the runtime file's identity token
    let editor = filesystem
        .read("Assets/Editor/Acme.Widgets.Editor.asmdef")
        .unwrap();
    assert!(editor.contains(r#""name": "acme.widgets.editor""#));
    assert!(editor.contains(r#""includePlatforms": ["Editor"]"#));
    assert!(editor.contains(r#""references": ["GUID:cafef00d"]"#));

    // Report and host-side effects
    assert_eq!(report.runtime.outcome, WriteOutcome::Written);
    assert_eq!(report.runtime.identity_token.as_deref(), Some("cafef00d"));
    assert_eq!(registry.refresh_count(), 2);
    assert_eq!(
        registry.applied_settings(),
        Some(("Acme".into(), "Widgets".into()))
    );
}

#[test]
fn full_bootstrap_on_disk_with_meta_file_registry() {
    let tmp = tempfile::TempDir::new().unwrap();
    let assets_dir = tmp.path().join("Assets");

    let service = PackageInitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(MetaFileRegistry::new(tmp.path())),
    );
    let report = service.initialize(&request(assets_dir.clone(), true)).unwrap();

    // The runtime asmdef received a guid sidecar during refresh, and the
    // editor asmdef references exactly that guid.
    let token = report.runtime.identity_token.expect("runtime guid assigned");
    let editor_text =
        std::fs::read_to_string(assets_dir.join("Editor/Acme.Widgets.Editor.asmdef")).unwrap();
    assert!(editor_text.contains(&format!(r#""references": ["GUID:{token}"]"#)));

    assert!(assets_dir.join("Runtime/Acme.Widgets.asmdef.meta").exists());
    assert!(assets_dir.join("package.json").exists());
}

#[test]
fn rerun_without_overwrite_reports_skip_and_preserves_files() {
    let tmp = tempfile::TempDir::new().unwrap();
    let assets_dir = tmp.path().join("Assets");

    let service = PackageInitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(MetaFileRegistry::new(tmp.path())),
    );

    let first = service.initialize(&request(assets_dir.clone(), false)).unwrap();
    let original =
        std::fs::read_to_string(assets_dir.join("Runtime/Acme.Widgets.asmdef")).unwrap();

    let second = service.initialize(&request(assets_dir.clone(), false)).unwrap();
    let after = std::fs::read_to_string(assets_dir.join("Runtime/Acme.Widgets.asmdef")).unwrap();

    assert_eq!(first.runtime.outcome, WriteOutcome::Written);
    assert_eq!(second.runtime.outcome, WriteOutcome::SkippedExisting);
    assert_eq!(original, after);
    // Tokens are stable across runs: the sidecar survives the skip.
    assert_eq!(first.runtime.identity_token, second.runtime.identity_token);
}
