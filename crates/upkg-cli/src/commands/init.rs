//! Implementation of the `upkg init` command.
//!
//! Responsibility: translate CLI arguments into an `InitRequest`, call the
//! core bootstrap service, and display results. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use upkg_adapters::{LocalFilesystem, MetaFileRegistry};
use upkg_core::{
    application::{InitReport, InitRequest, PackageInitService, WriteOutcome},
    domain::{DomainError, PackageIdentity, ProjectName},
};

use crate::{
    cli::{InitArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `upkg init` command.
///
/// Dispatch sequence:
/// 1. Resolve and validate the project name (argument or prompt)
/// 2. Resolve the company name (argument or config)
/// 3. Derive the package identity and show it; confirm unless `--yes`
/// 4. Early-exit if `--dry-run`
/// 5. Execute the bootstrap via `PackageInitService`
/// 6. Optionally remove bootstrap leftovers (`--cleanup`)
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Project name
    let project_name = resolve_project_name(args.name.as_deref())?;

    // 2. Company name
    let company = resolve_company(args.company.as_deref(), &config)?;

    // 3. Paths and identity
    let assets_dir = args
        .assets_dir
        .unwrap_or_else(|| PathBuf::from(&config.defaults.assets_dir));
    let project_root = project_root_of(&assets_dir);
    let identity = PackageIdentity::derive(&company, &project_name);

    debug!(
        package_id = %identity.package_id(),
        assets_dir = %assets_dir.display(),
        root = %project_root.display(),
        "Identity resolved"
    );

    if !global.quiet && !args.yes && !args.dry_run {
        show_configuration(&identity, &assets_dir, !args.no_editor, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        output.info(&format!(
            "Dry run: would initialise '{}' in {}",
            identity.package_id(),
            assets_dir.display(),
        ))?;
        output.info(&format!("  Manifest: {}", assets_dir.join("package.json").display()))?;
        output.info(&format!(
            "  Runtime:  {}",
            assets_dir
                .join("Runtime")
                .join(format!("{}.asmdef", identity.runtime_assembly_name()))
                .display()
        ))?;
        if !args.no_editor {
            output.info(&format!(
                "  Editor:   {}",
                assets_dir
                    .join("Editor")
                    .join(format!("{}.asmdef", identity.editor_assembly_name()))
                    .display()
            ))?;
        }
        return Ok(());
    }

    // 5. Create adapters and run the bootstrap
    let service = PackageInitService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(MetaFileRegistry::new(project_root.clone())),
    );

    let request = InitRequest {
        company_name: company,
        project_name,
        generate_editor_assembly: !args.no_editor,
        overwrite: args.force,
        assets_dir,
        unity_version: args.unity_version.or(config.defaults.unity_version),
    };

    output.header(&format!("Initialising '{}'...", identity.package_id()))?;
    info!(package = %identity.package_id(), "Bootstrap started");

    let report = service.initialize(&request).map_err(CliError::Core)?;

    info!(package = %report.package_id, "Bootstrap completed");

    // 6. Bootstrap leftovers
    if args.cleanup {
        let removed = service.cleanup(&leftover_paths(&project_root));
        output.info(&format!("Removed {removed} leftover path(s)"))?;
    }

    show_report(&report, &output)?;
    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

fn resolve_project_name(arg: Option<&str>) -> CliResult<ProjectName> {
    match arg {
        Some(name) => ProjectName::parse(name).map_err(|e| CliError::Core(e.into())),
        None => prompt_project_name(),
    }
}

#[cfg(feature = "interactive")]
fn prompt_project_name() -> CliResult<ProjectName> {
    use std::io::IsTerminal as _;

    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "project name required when not running interactively".into(),
            source: None,
        });
    }

    let name: String = dialoguer::Input::new()
        .with_prompt("Project name (PascalCase, e.g. Widgets)")
        .validate_with(|input: &String| ProjectName::parse(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()
        .map_err(|e| CliError::InvalidInput {
            message: format!("failed to read project name: {e}"),
            source: None,
        })?;

    ProjectName::parse(&name).map_err(|e| CliError::Core(e.into()))
}

#[cfg(not(feature = "interactive"))]
fn prompt_project_name() -> CliResult<ProjectName> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

fn resolve_company(arg: Option<&str>, config: &AppConfig) -> CliResult<String> {
    let company = arg
        .map(str::to_string)
        .or_else(|| config.defaults.company_name.clone())
        .unwrap_or_default();

    if company.trim().is_empty() {
        return Err(CliError::Core(DomainError::EmptyCompanyName.into()));
    }
    Ok(company)
}

/// The Unity project root is the directory holding the assets directory.
fn project_root_of(assets_dir: &Path) -> PathBuf {
    assets_dir
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Paths the project template ships with that a package does not want.
fn leftover_paths(project_root: &Path) -> Vec<PathBuf> {
    vec![
        project_root.join("Images"),
        project_root.join("README.md"),
    ]
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    identity: &PackageIdentity,
    assets_dir: &Path,
    editor: bool,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Package:          {}", identity.package_id()))?;
    out.print(&format!("  Company:          {}", identity.company_name()))?;
    out.print(&format!("  Runtime assembly: {}", identity.runtime_assembly_id()))?;
    if editor {
        out.print(&format!("  Editor assembly:  {}", identity.editor_assembly_id()))?;
    }
    out.print(&format!("  Assets directory: {}", assets_dir.display()))?;
    out.print("")?;
    Ok(())
}

fn show_report(report: &InitReport, out: &OutputManager) -> CliResult<()> {
    if out.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report).map_err(|e| {
            CliError::Core(upkg_core::error::UpkgError::Internal {
                message: format!("failed to serialise report: {e}"),
            })
        })?;
        out.print(&json)?;
        return Ok(());
    }

    out.success(&format!("Package '{}' initialised!", report.package_id))?;
    out.print(&format!("  Unity version: {}", report.unity_version))?;
    out.print(&format!("  Manifest:      {}", report.manifest_path.display()))?;
    out.print(&format!(
        "  Runtime:       {} ({})",
        report.runtime.path.display(),
        outcome_label(report.runtime.outcome)
    ))?;
    if let Some(editor) = &report.editor {
        out.print(&format!(
            "  Editor:        {} ({})",
            editor.path.display(),
            outcome_label(editor.outcome)
        ))?;
    }
    Ok(())
}

fn outcome_label(outcome: WriteOutcome) -> &'static str {
    match outcome {
        WriteOutcome::Written => "written",
        WriteOutcome::SkippedNoPath => "skipped, no path",
        WriteOutcome::SkippedExisting => "skipped, already exists",
    }
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_project_name ──────────────────────────────────────────────

    #[test]
    fn explicit_name_is_validated() {
        assert!(resolve_project_name(Some("Widgets")).is_ok());
        assert!(matches!(
            resolve_project_name(Some("widgets")),
            Err(CliError::Core(_))
        ));
    }

    // ── resolve_company ───────────────────────────────────────────────────

    #[test]
    fn flag_beats_config() {
        let mut config = AppConfig::default();
        config.defaults.company_name = Some("ConfigCo".into());
        assert_eq!(resolve_company(Some("FlagCo"), &config).unwrap(), "FlagCo");
    }

    #[test]
    fn config_fills_missing_flag() {
        let mut config = AppConfig::default();
        config.defaults.company_name = Some("ConfigCo".into());
        assert_eq!(resolve_company(None, &config).unwrap(), "ConfigCo");
    }

    #[test]
    fn missing_company_everywhere_is_error() {
        let config = AppConfig::default();
        assert!(matches!(
            resolve_company(None, &config),
            Err(CliError::Core(_))
        ));
    }

    #[test]
    fn whitespace_company_is_error() {
        let config = AppConfig::default();
        assert!(resolve_company(Some("   "), &config).is_err());
    }

    // ── project_root_of ───────────────────────────────────────────────────

    #[test]
    fn bare_assets_dir_roots_at_cwd() {
        assert_eq!(project_root_of(Path::new("Assets")), PathBuf::from("."));
    }

    #[test]
    fn nested_assets_dir_roots_at_parent() {
        assert_eq!(
            project_root_of(Path::new("projects/Game/Assets")),
            PathBuf::from("projects/Game")
        );
    }

    // ── outcome labels ────────────────────────────────────────────────────

    #[test]
    fn outcome_labels_are_distinct() {
        let labels = [
            outcome_label(WriteOutcome::Written),
            outcome_label(WriteOutcome::SkippedNoPath),
            outcome_label(WriteOutcome::SkippedExisting),
        ];
        assert_eq!(
            labels.len(),
            labels.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }

    #[test]
    fn leftover_paths_are_rooted() {
        let paths = leftover_paths(Path::new("/proj"));
        assert!(paths.iter().all(|p| p.starts_with("/proj")));
    }
}
