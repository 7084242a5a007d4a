//! Response adapters mapping each backend API shape onto the panel model
//!
//! Two backend generations exist. The discrete API reports status as a string
//! and takes separate `open`/`close` commands; the toggle API reports a
//! boolean and takes a single `toggle`. Everything else in the crate only sees
//! [`PortStatus`], [`LogFeed`] and [`Command`].

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::model::{Command, LogEntry, LogFeed, PortStatus};

/// Maps one backend API shape onto the panel model
pub trait ApiAdapter: Send + Sync + std::fmt::Debug {
    /// Adapter name, matches the config `type`
    fn name(&self) -> &str;

    fn status_path(&self) -> String;

    fn log_path(&self) -> String;

    fn command_path(&self, command: Command) -> String;

    /// Parse a status response body
    fn parse_status(&self, body: &str) -> crate::Result<PortStatus>;

    /// Parse a log response body
    fn parse_log(&self, body: &str) -> crate::Result<LogFeed>;

    /// The command the toggle control performs when the port is in `status`
    fn command_for(&self, status: PortStatus) -> Command;

    /// Whether the backend has an endpoint for `command`
    fn supports(&self, command: Command) -> bool;

    /// The command a press sends without looking at the status, if the
    /// backend has one
    fn press_command(&self) -> Option<Command> {
        None
    }
}

/// Build the adapter for a backend configuration
pub fn from_config(config: &BackendConfig) -> Arc<dyn ApiAdapter> {
    match config {
        BackendConfig::Discrete { log_type, port, .. } => {
            Arc::new(DiscreteApi::new(log_type.clone(), port.clone()))
        }
        BackendConfig::Toggle { .. } => Arc::new(ToggleApi),
    }
}

#[derive(Debug, Deserialize)]
struct StatusBody {
    #[serde(default)]
    status: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct LinesBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    lines: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct RecordsBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    logs: Option<Vec<LogRecord>>,
}

#[derive(Debug, Deserialize)]
struct LogRecord {
    #[serde(default)]
    time: String,
    #[serde(default)]
    message: String,
}

/// Whether a JSON error flag counts as set
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn flagged(error: Option<&Value>) -> bool {
    error.is_some_and(is_truthy)
}

/// String status, discrete open/close commands, line-based log
#[derive(Debug, Clone)]
pub struct DiscreteApi {
    log_type: String,
    port: Option<String>,
}

impl DiscreteApi {
    pub fn new(log_type: String, port: Option<String>) -> Self {
        Self { log_type, port }
    }

    fn with_port(&self, path: String) -> String {
        match &self.port {
            Some(port) => format!("{}/{}", path, port),
            None => path,
        }
    }
}

impl Default for DiscreteApi {
    fn default() -> Self {
        Self::new("event".to_string(), None)
    }
}

impl ApiAdapter for DiscreteApi {
    fn name(&self) -> &str {
        "discrete"
    }

    fn status_path(&self) -> String {
        self.with_port("/api/status".to_string())
    }

    fn log_path(&self) -> String {
        format!("/api/logs/{}", self.log_type)
    }

    fn command_path(&self, command: Command) -> String {
        self.with_port(format!("/api/{}", command))
    }

    fn parse_status(&self, body: &str) -> crate::Result<PortStatus> {
        let parsed: StatusBody = serde_json::from_str(body)?;
        match parsed.status {
            Some(Value::String(s)) => match s.as_str() {
                "open" => Ok(PortStatus::Open),
                "closed" => Ok(PortStatus::Closed),
                other => {
                    // moving, partial and error all render as not open
                    tracing::warn!("Port reported '{}', showing it as closed", other);
                    Ok(PortStatus::Closed)
                }
            },
            Some(other) => Err(crate::PanelError::Payload(format!(
                "expected string status, got {}",
                other
            ))),
            None => Err(crate::PanelError::Payload(
                "missing status field".to_string(),
            )),
        }
    }

    fn parse_log(&self, body: &str) -> crate::Result<LogFeed> {
        let parsed: LinesBody = serde_json::from_str(body)?;
        if flagged(parsed.error.as_ref()) {
            return Ok(LogFeed::Unavailable);
        }
        Ok(match parsed.lines {
            Some(lines) => LogFeed::Entries(lines.into_iter().map(LogEntry::Line).collect()),
            None => LogFeed::Unavailable,
        })
    }

    fn command_for(&self, status: PortStatus) -> Command {
        match status {
            PortStatus::Open => Command::Close,
            PortStatus::Closed => Command::Open,
        }
    }

    fn supports(&self, command: Command) -> bool {
        matches!(command, Command::Open | Command::Close)
    }
}

/// Boolean status, single toggle command, structured log
#[derive(Debug, Clone, Default)]
pub struct ToggleApi;

impl ApiAdapter for ToggleApi {
    fn name(&self) -> &str {
        "toggle"
    }

    fn status_path(&self) -> String {
        "/api/status".to_string()
    }

    fn log_path(&self) -> String {
        "/api/log".to_string()
    }

    fn command_path(&self, command: Command) -> String {
        format!("/api/{}", command)
    }

    fn parse_status(&self, body: &str) -> crate::Result<PortStatus> {
        let parsed: StatusBody = serde_json::from_str(body)?;
        match parsed.status {
            Some(Value::Bool(true)) => Ok(PortStatus::Open),
            Some(Value::Bool(false)) => Ok(PortStatus::Closed),
            Some(other) => Err(crate::PanelError::Payload(format!(
                "expected boolean status, got {}",
                other
            ))),
            None => Err(crate::PanelError::Payload(
                "missing status field".to_string(),
            )),
        }
    }

    fn parse_log(&self, body: &str) -> crate::Result<LogFeed> {
        let parsed: RecordsBody = serde_json::from_str(body)?;
        if flagged(parsed.error.as_ref()) {
            return Ok(LogFeed::Unavailable);
        }
        Ok(match parsed.logs {
            Some(logs) => LogFeed::Entries(
                logs.into_iter()
                    .map(|r| LogEntry::Record {
                        time: r.time,
                        message: r.message,
                    })
                    .collect(),
            ),
            None => LogFeed::Unavailable,
        })
    }

    fn command_for(&self, _status: PortStatus) -> Command {
        Command::Toggle
    }

    fn supports(&self, command: Command) -> bool {
        command == Command::Toggle
    }

    fn press_command(&self) -> Option<Command> {
        Some(Command::Toggle)
    }
}
