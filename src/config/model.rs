// src/config/model.rs

use serde::Deserialize;

use crate::types::{LogLevel, SelfLoopPolicy};

/// Engine options as read from a TOML file.
///
/// ```toml
/// [graph]
/// self_loops = "reject"
///
/// [logging]
/// level = "debug"
/// ```
///
/// All sections are optional and have reasonable defaults. Unknown keys are
/// rejected so that a typo does not silently fall back to a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Graph behaviour from `[graph]`.
    #[serde(default)]
    pub graph: GraphSection,

    /// Logging options from `[logging]`.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[graph]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSection {
    /// `"allow"` (default) or `"reject"`.
    #[serde(default)]
    pub self_loops: SelfLoopPolicy,
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingSection {
    /// If `None`, `DEPDAG_LOG` or `info` is used.
    #[serde(default)]
    pub level: Option<LogLevel>,
}

impl GraphConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(contents: &str) -> crate::errors::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Convenience: a config that only sets the self-loop policy.
    pub fn with_self_loops(policy: SelfLoopPolicy) -> Self {
        Self {
            graph: GraphSection { self_loops: policy },
            ..Self::default()
        }
    }
}
