//! TOML config codec.
//!
//! The global config is one flat TOML table:
//!
//! ```toml
//! autoupdate = false
//! gitProtocol = "ssh"
//! packageManager = "yarn"
//! ```
//!
//! Nested tables, arrays and datetimes are rejected as malformed.

use olympus_core::{
    application::{ApplicationError, ports::ConfigCodec},
    domain::GlobalConfig,
    error::OlympusResult,
};

const FORMAT: &str = "toml";

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlCodec;

impl TomlCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigCodec for TomlCodec {
    fn to_text(&self, config: &GlobalConfig) -> OlympusResult<String> {
        toml::to_string_pretty(config).map_err(|e| {
            ApplicationError::Serialization {
                format: FORMAT,
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn parse(&self, text: &str) -> OlympusResult<GlobalConfig> {
        toml::from_str(text).map_err(|e| {
            ApplicationError::Serialization {
                format: FORMAT,
                reason: e.message().to_string(),
            }
            .into()
        })
    }
}
