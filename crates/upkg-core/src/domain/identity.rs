//! Package identity: validated project names and derived identifiers.
//!
//! # Design
//!
//! All identifiers written into the manifest and the assembly definition
//! files are derived in one place, [`PackageIdentity::derive`]. The manifest
//! renderer and the descriptor builder never compute names themselves, so the
//! emitted files cannot drift out of agreement with each other.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated package project name.
///
/// Rule: first character is an uppercase ASCII letter, every following
/// character is ASCII alphanumeric. Equivalent to `^[A-Z][a-zA-Z0-9]+$`.
///
/// The `+` in that pattern makes two characters the effective minimum; the
/// bound lives in [`ProjectName::MIN_LENGTH`] rather than being implied by
/// the scanner, so it can be tuned without touching the character rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Minimum accepted length.
    pub const MIN_LENGTH: usize = 2;

    /// Validate and wrap a raw project name.
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.chars().count() < Self::MIN_LENGTH {
            return Err(DomainError::InvalidProjectName {
                reason: format!("must be at least {} characters", Self::MIN_LENGTH),
                name,
            });
        }

        let mut chars = name.chars();
        // chars() is non-empty here: MIN_LENGTH >= 1.
        let first = chars.next().unwrap_or_default();
        if !first.is_ascii_uppercase() {
            return Err(DomainError::InvalidProjectName {
                reason: "must begin with an uppercase letter".into(),
                name,
            });
        }

        if let Some(bad) = chars.find(|c| !c.is_ascii_alphanumeric()) {
            return Err(DomainError::InvalidProjectName {
                reason: format!("contains invalid character '{bad}'"),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ── PackageIdentity ───────────────────────────────────────────────────────────

/// Every identifier the scaffolded files need, derived once.
///
/// Invariant: all derived fields are pure functions of the company and
/// project names, computed in [`PackageIdentity::derive`] and never set
/// independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageIdentity {
    company_name: String,
    project_name: String,
    package_id: String,
    runtime_assembly_name: String,
    runtime_assembly_id: String,
    editor_assembly_name: String,
    editor_assembly_id: String,
}

impl PackageIdentity {
    /// Derive the full identifier set from a company and project name.
    ///
    /// The company name is assumed pre-validated by configuration; the
    /// project name carries its validation in the type.
    pub fn derive(company_name: &str, project_name: &ProjectName) -> Self {
        let company_name = company_name.to_string();
        let project_name = project_name.as_str().to_string();

        let package_id = format!(
            "com.{}.{}",
            company_name.to_lowercase(),
            project_name.to_lowercase()
        );
        let runtime_assembly_name = format!("{company_name}.{project_name}");
        let runtime_assembly_id = runtime_assembly_name.to_lowercase();
        let editor_assembly_name = format!("{runtime_assembly_name}.Editor");
        let editor_assembly_id = editor_assembly_name.to_lowercase();

        Self {
            company_name,
            project_name,
            package_id,
            runtime_assembly_name,
            runtime_assembly_id,
            editor_assembly_name,
            editor_assembly_id,
        }
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Reverse-domain package id, e.g. `com.acme.widgets`.
    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    /// Dotted runtime assembly name, e.g. `Acme.Widgets`.
    pub fn runtime_assembly_name(&self) -> &str {
        &self.runtime_assembly_name
    }

    /// Lowercased runtime assembly id, e.g. `acme.widgets`.
    pub fn runtime_assembly_id(&self) -> &str {
        &self.runtime_assembly_id
    }

    /// Editor assembly name, e.g. `Acme.Widgets.Editor`.
    pub fn editor_assembly_name(&self) -> &str {
        &self.editor_assembly_name
    }

    /// Lowercased editor assembly id, e.g. `acme.widgets.editor`.
    pub fn editor_assembly_id(&self) -> &str {
        &self.editor_assembly_id
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
