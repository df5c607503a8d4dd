//! Hardcoded file templates and the flat substitution renderer.
//!
//! Templates are process-wide string constants with `{{...}}` placeholder
//! markers. Substitution is flat and unconditional: there is no templating
//! language, no conditionals, no loops. A substitution replaces **every**
//! occurrence of its placeholder, in the order the caller supplies.
//!
//! No escaping is performed. A value containing a placeholder token or JSON
//! special characters will produce malformed output; callers only feed
//! derived identifiers and version strings, which cannot contain either.

use crate::domain::identity::PackageIdentity;

// ── Placeholders ──────────────────────────────────────────────────────────────

/// Placeholder tokens used by the built-in templates.
pub mod placeholders {
    /// Assembly or package display name slot.
    pub const PACKAGE_NAME: &str = "{{PACKAGE_NAME}}";
    /// Reverse-domain package id slot.
    pub const PACKAGE_ID: &str = "{{PACKAGE_ID}}";
    /// Assembly reference list slot.
    pub const REFERENCES: &str = "{{REFERENCES}}";
    /// Included-platform list slot.
    pub const PLATFORMS: &str = "{{PLATFORMS}}";
    /// Unity `major.minor` version slot.
    pub const UNITY_VERSION: &str = "{{UNITY_VERSION}}";
    /// Company name slot (manifest description).
    pub const COMPANY_NAME: &str = "{{COMPANY_NAME}}";
}

// ── Templates ─────────────────────────────────────────────────────────────────

/// `package.json` manifest template.
pub const MANIFEST_TEMPLATE: &str = r#"{
  "name": "{{PACKAGE_ID}}",
  "displayName": "{{PACKAGE_NAME}}",
  "unity": "{{UNITY_VERSION}}",
  "description": "{{COMPANY_NAME}} {{PACKAGE_NAME}} package",
  "version": "1.0.0",
  "dependencies": {
  }
}
"#;

/// `.asmdef` assembly definition template.
pub const ASSEMBLY_DEFINITION_TEMPLATE: &str = r#"{
    "name": "{{PACKAGE_NAME}}",
    "references": [{{REFERENCES}}],
    "includePlatforms": [{{PLATFORMS}}],
    "excludePlatforms": [],
    "allowUnsafeCode": false,
    "overrideReferences": false,
    "precompiledReferences": [],
    "autoReferenced": true,
    "defineConstraints": [],
    "versionDefines": []
}
"#;

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Apply ordered `(placeholder, value)` substitutions to a template.
///
/// Each substitution replaces all occurrences of its placeholder in the
/// working text. Placeholders with no matching substitution are left
/// untouched.
pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
    let mut text = template.to_string();
    for (placeholder, value) in substitutions {
        text = text.replace(placeholder, value);
    }
    text
}

/// Render the package manifest for an identity and extracted Unity version.
///
/// Pure; writing the result to disk is the caller's responsibility. The
/// display name slot takes the plain project name, not the dotted assembly
/// name, so `displayName` reads naturally in the package manager UI.
pub fn render_manifest(identity: &PackageIdentity, unity_version: &str) -> String {
    render(
        MANIFEST_TEMPLATE,
        &[
            (placeholders::PACKAGE_ID, identity.package_id()),
            (placeholders::PACKAGE_NAME, identity.project_name()),
            (placeholders::UNITY_VERSION, unity_version),
            (placeholders::COMPANY_NAME, identity.company_name()),
        ],
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
