//! Infrastructure adapters for Upkg.
//!
//! This crate implements the ports defined in `upkg-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod registry;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::{MemoryRegistry, MetaFileRegistry};
