//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "bootstrap this package's metadata files".

pub mod init_service;

pub use init_service::{
    DescriptorReport, InitReport, InitRequest, PackageInitService, WriteOutcome,
};
