//! Olympus Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Olympus
//! scaffolding tool: where persistent state lives, how it is created, read,
//! written and purged, and the `init` sequence built on top of it.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           olympus-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (ConfigStore, InitService)         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, ConfigCodec, Prompter,     │
//! │  TemplateSetup)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   olympus-adapters (Infrastructure)     │
//! │ (LocalFilesystem, TomlCodec, etc)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use olympus_core::prelude::*;
//!
//! # fn demo(fs: Box<dyn Filesystem>, codec: Box<dyn ConfigCodec>) {
//! let store = ConfigStore::new(ConfigPaths::from_home("/home/me"), fs, codec);
//!
//! // A missing config file reads as an empty mapping.
//! let prefs = store.read();
//! assert!(prefs.get("packageManager").is_none());
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigStore, InitOutcome, InitService,
        ports::{ConfigCodec, Filesystem, Prompter, TemplateSetup},
    };
    pub use crate::domain::{
        AppliedTemplate, ConfigPaths, ConfigValue, GlobalConfig, Question, QuestionKind,
        TemplateId, TemplateSummary,
    };
    pub use crate::error::{OlympusError, OlympusResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
