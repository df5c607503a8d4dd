// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Upkg.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and host-environment concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror/serde derives
//! - **Immutable identity**: `PackageIdentity` is derived once, never edited

pub mod descriptor;
pub mod error;
pub mod identity;
pub mod templates;
pub mod version;

// Re-exports for convenience
pub use descriptor::AssemblyDefinitionBuilder;
pub use error::{DomainError, ErrorCategory};
pub use identity::{PackageIdentity, ProjectName};
pub use templates::{ASSEMBLY_DEFINITION_TEMPLATE, MANIFEST_TEMPLATE, placeholders, render, render_manifest};
pub use version::extract_minor_version;
