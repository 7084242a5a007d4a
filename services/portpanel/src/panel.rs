//! Status viewer, log viewer and command dispatcher
//!
//! A [`Panel`] owns nothing but the toggle binding: every refresh discards
//! what was rendered before and rebuilds it from the latest response. Failures
//! are rendered as fixed messages and reported through `tracing`; nothing is
//! propagated to the caller beyond an outcome value.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::adapter::ApiAdapter;
use crate::io::HttpClient;
use crate::model::{Command, LogEntry, LogFeed, PortStatus, StatusColor, ToggleBinding};
use crate::text;
use crate::view::View;

pub struct Panel {
    base_url: String,
    http: Arc<dyn HttpClient>,
    adapter: Arc<dyn ApiAdapter>,
    view: Arc<dyn View>,
    binding: RwLock<Option<ToggleBinding>>,
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("base_url", &self.base_url)
            .field("adapter", &self.adapter)
            .finish()
    }
}

impl Panel {
    pub fn new(
        base_url: &str,
        http: Arc<dyn HttpClient>,
        adapter: Arc<dyn ApiAdapter>,
        view: Arc<dyn View>,
    ) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::debug!("Created panel for {} ({} API)", base_url, adapter.name());
        Self {
            base_url,
            http,
            adapter,
            view,
            binding: RwLock::new(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The action the toggle control currently shows, if status was ever read
    pub async fn binding(&self) -> Option<ToggleBinding> {
        self.binding.read().await.clone()
    }

    async fn fetch_status(&self) -> crate::Result<PortStatus> {
        let response = self.http.get(&self.url(&self.adapter.status_path())).await?;
        if !response.is_success() {
            tracing::debug!("Status answered with HTTP {}", response.status);
        }
        self.adapter.parse_status(&response.body)
    }

    async fn fetch_log(&self) -> crate::Result<LogFeed> {
        let response = self.http.get(&self.url(&self.adapter.log_path())).await?;
        if !response.is_success() {
            tracing::debug!("Log answered with HTTP {}", response.status);
        }
        self.adapter.parse_log(&response.body)
    }

    /// Fetch and render the port status, then rebind the toggle control.
    ///
    /// Returns the status that was rendered, or `None` after rendering the
    /// status error.
    pub async fn refresh_status(&self) -> Option<PortStatus> {
        match self.fetch_status().await {
            Ok(status) => {
                tracing::debug!("Port is {}", status);
                self.view.render_status(status.label(), status.color()).await;

                let binding = ToggleBinding::from(self.adapter.command_for(status));
                *self.binding.write().await = Some(binding.clone());
                self.view.bind_toggle(&binding).await;
                Some(status)
            }
            Err(e) => {
                tracing::error!("Failed to fetch port status: {}", e);
                self.view
                    .render_status(text::STATUS_ERROR, StatusColor::Orange)
                    .await;
                None
            }
        }
    }

    /// Fetch and render the event log.
    ///
    /// Returns how many entries were rendered, or `None` when a message was
    /// rendered instead of a list.
    pub async fn refresh_log(&self) -> Option<usize> {
        match self.fetch_log().await {
            Ok(LogFeed::Entries(entries)) => {
                let lines: Vec<String> = entries.iter().map(LogEntry::display_text).collect();
                self.view.render_log_entries(&lines).await;
                Some(lines.len())
            }
            Ok(LogFeed::Unavailable) => {
                tracing::debug!("Backend reports the log as unavailable");
                self.view.render_log_message(text::LOG_UNAVAILABLE).await;
                None
            }
            Err(e) => {
                tracing::error!("Failed to fetch log: {}", e);
                self.view.render_log_message(text::LOG_ERROR).await;
                None
            }
        }
    }

    /// Refresh status, then log
    pub async fn refresh(&self) {
        self.refresh_status().await;
        self.refresh_log().await;
    }

    async fn post_command(&self, command: Command) -> crate::Result<()> {
        let response = self
            .http
            .post(&self.url(&self.adapter.command_path(command)))
            .await?;
        if !response.is_success() {
            return Err(crate::PanelError::Rejected(response.status));
        }
        Ok(())
    }

    /// Whether the backend accepts `command`
    pub fn supports(&self, command: Command) -> bool {
        self.adapter.supports(command)
    }

    /// Send a command, then refresh status and log.
    ///
    /// On failure nothing is refreshed and the user is alerted once. A command
    /// the backend has no endpoint for is never posted.
    pub async fn send_command(&self, command: Command) -> bool {
        if !self.supports(command) {
            tracing::error!(
                "The {} API has no '{}' command",
                self.adapter.name(),
                command
            );
            self.view.alert(text::COMMAND_FAILED).await;
            return false;
        }

        tracing::info!("Sending '{}'", command);
        match self.post_command(command).await {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::error!("Command '{}' failed: {}", command, e);
                self.view.alert(text::COMMAND_FAILED).await;
                false
            }
        }
    }

    /// Handle a press on the toggle control.
    ///
    /// When the command depends on the port status, the action is resolved
    /// from status fetched now rather than from the binding shown since the
    /// last refresh, so a change made by another client in between cannot make
    /// the control send the wrong command.
    pub async fn press_toggle(&self) -> bool {
        if let Some(command) = self.adapter.press_command() {
            return self.send_command(command).await;
        }

        let shown = self.binding().await;
        let Some(status) = self.refresh_status().await else {
            tracing::error!("Not sending a command without a current port status");
            self.view.alert(text::COMMAND_FAILED).await;
            return false;
        };

        let command = self.adapter.command_for(status);
        if let Some(shown) = shown.filter(|b| b.command != command) {
            tracing::debug!(
                "Control showed '{}' but the port is now {}, sending '{}'",
                shown.command,
                status,
                command
            );
        }
        self.send_command(command).await
    }
}
