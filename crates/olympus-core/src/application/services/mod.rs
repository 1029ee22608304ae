//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "reset the global config" or "init a project".

pub mod config_store;
pub mod init_service;

pub use config_store::ConfigStore;
pub use init_service::{InitOutcome, InitService};
