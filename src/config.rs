//! Runtime configuration for the HTTP server.

use std::net::{Ipv4Addr, SocketAddr};

use crate::error::TaskmgrError;

pub const DEFAULT_PORT: u16 = 8080;

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = TaskmgrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(TaskmgrError::Config(format!("Invalid log format: {}", s))),
        }
    }
}

/// Settings for `taskmgr serve`. `Default` supplies the CLI defaults.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Address the listener binds to.
    pub bind: SocketAddr,
    /// Start with the sample tasks and notes.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            seed: true,
            log_format: LogFormat::default(),
        }
    }
}
