//! Asset registry adapters.

mod memory;
mod meta_file;

pub use memory::MemoryRegistry;
pub use meta_file::MetaFileRegistry;
