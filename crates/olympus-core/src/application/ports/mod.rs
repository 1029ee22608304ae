//! Application ports (traits) for external dependencies.
//!
//! Ports define the interfaces the application needs from the outside
//! world. Adapters in `olympus-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: existence checks, directory creation, overwrite, purge
//!   - `ConfigCodec`: config serialization
//!   - `Prompter`: interactive questions
//!   - `TemplateSetup`: init file staging and template application

pub mod output;

pub use output::{ConfigCodec, Filesystem, Prompter, TemplateSetup};

#[cfg(test)]
pub use output::{MockConfigCodec, MockFilesystem, MockPrompter, MockTemplateSetup};
