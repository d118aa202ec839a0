use std::str::FromStr;
use serde::Deserialize;

/// What `add_edge(a, a)` does.
///
/// - `Allow`: the edge is stored like any other. It forms a cycle of length
///   one, so `validate` reports the node as unresolved and the topological
///   sort never emits it.
/// - `Reject`: `add_edge` fails with `DagError::SelfLoop` and the graph is
///   left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfLoopPolicy {
    Allow,
    Reject,
}

impl Default for SelfLoopPolicy {
    fn default() -> Self {
        SelfLoopPolicy::Allow
    }
}

impl FromStr for SelfLoopPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "allow" => Ok(SelfLoopPolicy::Allow),
            "reject" => Ok(SelfLoopPolicy::Reject),
            other => Err(format!(
                "invalid self_loops: {other} (expected \"allow\" or \"reject\")"
            )),
        }
    }
}

/// Log verbosity accepted by [`crate::logging::init_logging`] and the
/// `[logging]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("invalid log level: {other}")),
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(lvl: LogLevel) -> Self {
        match lvl {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}
