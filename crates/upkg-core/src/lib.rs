//! Upkg Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Upkg
//! Unity package bootstrapper, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            upkg-cli (CLI)               │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │         (PackageInitService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Driven: Filesystem, Registry)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     upkg-adapters (Infrastructure)      │
//! │  (LocalFilesystem, MetaFileRegistry)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (PackageIdentity, Templates, Builder)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use upkg_core::{
//!     application::{InitRequest, PackageInitService},
//!     domain::ProjectName,
//! };
//! # fn adapters() -> (Box<dyn upkg_core::application::Filesystem>, Box<dyn upkg_core::application::AssetRegistry>) { unimplemented!() }
//!
//! // 1. Validate input
//! let project_name = ProjectName::parse("Widgets").unwrap();
//!
//! // 2. Use application service (with injected adapters)
//! let (filesystem, registry) = adapters();
//! let service = PackageInitService::new(filesystem, registry);
//! let report = service.initialize(&InitRequest {
//!     company_name: "Acme".into(),
//!     project_name,
//!     generate_editor_assembly: true,
//!     overwrite: false,
//!     assets_dir: "Assets".into(),
//!     unity_version: None,
//! }).unwrap();
//! println!("created {}", report.package_id);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DescriptorReport, InitReport, InitRequest, PackageInitService, WriteOutcome,
        ports::{AssetRegistry, Filesystem},
    };
    pub use crate::domain::{
        AssemblyDefinitionBuilder, PackageIdentity, ProjectName, extract_minor_version,
        render_manifest,
    };
    pub use crate::error::{UpkgError, UpkgResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
