//! Application layer for Upkg.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PackageInitService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main service and DTOs
pub use services::{DescriptorReport, InitReport, InitRequest, PackageInitService, WriteOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetRegistry, Filesystem};

pub use error::ApplicationError;
