//! Application layer for Olympus.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ConfigStore, InitService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ConfigStore, InitOutcome, InitService};

// Re-export port traits (for adapter implementation)
pub use ports::{ConfigCodec, Filesystem, Prompter, TemplateSetup};

pub use error::{ApplicationError, ConfigUnreadable};
