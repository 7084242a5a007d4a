//! Port status, log entries and commands

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::text;

/// The state of the port as last reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortStatus {
    Open,
    Closed,
}

impl PortStatus {
    pub fn label(self) -> &'static str {
        match self {
            PortStatus::Open => text::OPEN,
            PortStatus::Closed => text::CLOSED,
        }
    }

    pub fn color(self) -> StatusColor {
        match self {
            PortStatus::Open => StatusColor::Green,
            PortStatus::Closed => StatusColor::Red,
        }
    }
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortStatus::Open => write!(f, "open"),
            PortStatus::Closed => write!(f, "closed"),
        }
    }
}

/// Color of the rendered status label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Green,
    Red,
    /// Used when the status could not be read
    Orange,
}

impl StatusColor {
    pub fn css(self) -> &'static str {
        match self {
            StatusColor::Green => "green",
            StatusColor::Red => "red",
            StatusColor::Orange => "orange",
        }
    }

    pub fn ansi(self) -> &'static str {
        match self {
            StatusColor::Green => "\x1b[32m",
            StatusColor::Red => "\x1b[31m",
            StatusColor::Orange => "\x1b[33m",
        }
    }
}

/// A state-changing action sent as `POST /api/{command}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Open,
    Close,
    Toggle,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Command::Open => "open",
            Command::Close => "close",
            Command::Toggle => "toggle",
        }
    }

    /// Label of a button that performs this command
    pub fn button_label(self) -> &'static str {
        match self {
            Command::Open => text::BUTTON_OPEN,
            Command::Close => text::BUTTON_CLOSE,
            Command::Toggle => text::BUTTON_TOGGLE,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = crate::PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(Command::Open),
            "close" => Ok(Command::Close),
            "toggle" => Ok(Command::Toggle),
            other => Err(crate::PanelError::Payload(format!(
                "unknown command '{}'",
                other
            ))),
        }
    }
}

/// One line of the event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Line(String),
    Record { time: String, message: String },
}

impl LogEntry {
    /// Text shown for this entry
    pub fn display_text(&self) -> String {
        match self {
            LogEntry::Line(line) => line.trim().to_string(),
            LogEntry::Record { time, message } => format!("[{}] {}", time, message),
        }
    }
}

/// Result of a log fetch after adaptation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFeed {
    Entries(Vec<LogEntry>),
    /// The backend flagged an error or left out the entry list
    Unavailable,
}

/// What the toggle control currently reads and would send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleBinding {
    pub command: Command,
    pub label: String,
}

impl From<Command> for ToggleBinding {
    fn from(command: Command) -> Self {
        Self {
            command,
            label: command.button_label().to_string(),
        }
    }
}
