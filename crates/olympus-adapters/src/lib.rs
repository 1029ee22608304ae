//! Infrastructure adapters for Olympus.
//!
//! This crate implements the ports defined in `olympus-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod codec;
pub mod filesystem;
pub mod prompt;
pub mod templates;

// Re-export commonly used adapters
pub use codec::TomlCodec;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
#[cfg(feature = "interactive")]
pub use prompt::DialoguerPrompter;
pub use prompt::ScriptedPrompter;
pub use templates::BuiltinTemplates;
