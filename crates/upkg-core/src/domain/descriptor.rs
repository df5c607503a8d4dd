//! Assembly definition (`.asmdef`) builder.
//!
//! A chained mutable builder configured per file, rendered once, then
//! discarded. The consuming write operation lives in the application layer
//! ([`crate::application::PackageInitService`]); this type stays pure.

use std::path::{Path, PathBuf};

use crate::domain::templates::{self, ASSEMBLY_DEFINITION_TEMPLATE, placeholders};

/// Literal platform token for editor-only assemblies.
const EDITOR_PLATFORM: &str = "\"Editor\"";

/// Builder for one assembly definition file.
#[derive(Debug, Clone)]
pub struct AssemblyDefinitionBuilder {
    assembly_id: String,
    target_path: Option<PathBuf>,
    referenced_guids: Vec<String>,
    editor_only: bool,
}

impl AssemblyDefinitionBuilder {
    /// Start a builder for the given assembly id.
    ///
    /// The id is fixed for the builder's lifetime; everything else is
    /// configured via the chained setters.
    pub fn new(assembly_id: impl Into<String>) -> Self {
        Self {
            assembly_id: assembly_id.into(),
            target_path: None,
            referenced_guids: Vec::new(),
            editor_only: false,
        }
    }

    /// Set the output file path. Without one, the write step is a no-op.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// Append references, each wrapped as `"GUID:<token>"`.
    ///
    /// Call order determines the order in the rendered reference list;
    /// batching references into one call or several makes no difference.
    pub fn add_references<I, S>(mut self, guids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.referenced_guids
            .extend(guids.into_iter().map(|g| format!("\"GUID:{}\"", g.as_ref())));
        self
    }

    /// Restrict the assembly to the Editor platform.
    pub fn editor_only(mut self, editor_only: bool) -> Self {
        self.editor_only = editor_only;
        self
    }

    pub fn assembly_id(&self) -> &str {
        &self.assembly_id
    }

    pub fn target_path(&self) -> Option<&Path> {
        self.target_path.as_deref()
    }

    /// The reference list as it appears inside the JSON array brackets.
    ///
    /// Empty reference list renders as an empty string, producing `[]`.
    pub fn references_text(&self) -> String {
        self.referenced_guids.join(", ")
    }

    /// The included-platform list: the Editor token or nothing.
    pub fn platforms_text(&self) -> &'static str {
        if self.editor_only { EDITOR_PLATFORM } else { "" }
    }

    /// Render the full descriptor text.
    ///
    /// References and platforms are substituted before the name slot, so a
    /// hostile assembly id cannot inject into the list slots. Deterministic:
    /// same builder state, same output.
    pub fn render(&self) -> String {
        templates::render(
            ASSEMBLY_DEFINITION_TEMPLATE,
            &[
                (placeholders::REFERENCES, &self.references_text()),
                (placeholders::PLATFORMS, self.platforms_text()),
                (placeholders::PACKAGE_NAME, &self.assembly_id),
            ],
        )
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
