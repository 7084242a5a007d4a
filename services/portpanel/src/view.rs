//! Rendering targets for the panel

use std::io::Write;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::model::{StatusColor, ToggleBinding};

/// Where the panel renders status, log and the toggle control
#[async_trait]
pub trait View: Send + Sync {
    /// Replace the status label
    async fn render_status(&self, label: &str, color: StatusColor);

    /// Replace the log region with one element per line, in order
    async fn render_log_entries(&self, lines: &[String]);

    /// Replace the log region with a single message
    async fn render_log_message(&self, message: &str);

    /// Replace the toggle control's label and action. Never stacks.
    async fn bind_toggle(&self, binding: &ToggleBinding);

    /// Interrupt the user with a failure message
    async fn alert(&self, message: &str);
}

/// Line-oriented view for terminals and pipes
pub struct TerminalView<W> {
    out: Mutex<W>,
    color: bool,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(std::io::stdout(), color)
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out: Mutex::new(out),
            color,
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    async fn emit(&self, lines: &[String]) {
        let mut out = self.out.lock().await;
        for line in lines {
            if let Err(e) = writeln!(out, "{}", line) {
                tracing::warn!("Failed to write to terminal: {}", e);
                return;
            }
        }
        if let Err(e) = out.flush() {
            tracing::warn!("Failed to flush terminal output: {}", e);
        }
    }
}

#[async_trait]
impl<W: Write + Send> View for TerminalView<W> {
    async fn render_status(&self, label: &str, color: StatusColor) {
        let line = if self.color {
            format!("Status: {}{}\x1b[0m", color.ansi(), label)
        } else {
            format!("Status: {}", label)
        };
        self.emit(&[line]).await;
    }

    async fn render_log_entries(&self, lines: &[String]) {
        let mut out = Vec::with_capacity(lines.len() + 1);
        out.push(format!("Logg ({}):", lines.len()));
        out.extend(lines.iter().map(|l| format!("  {}", l)));
        self.emit(&out).await;
    }

    async fn render_log_message(&self, message: &str) {
        self.emit(&[message.to_string()]).await;
    }

    async fn bind_toggle(&self, binding: &ToggleBinding) {
        self.emit(&[format!("Knapp: {} ({})", binding.label, binding.command)])
            .await;
    }

    async fn alert(&self, message: &str) {
        self.emit(&[format!("! {}", message)]).await;
    }
}
