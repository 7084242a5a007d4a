//! Portpanel - status, log and command panel for a garage port controller
//!
//! Polls the controller's HTTP API, renders the port status and event log into
//! a [`View`], and sends open/close/toggle commands.

pub mod adapter;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod model;
pub mod panel;
pub mod text;
pub mod view;
pub mod watch;

pub use config::{load_config, Config};
pub use error::{PanelError, Result};
pub use model::{Command, LogEntry, LogFeed, PortStatus, StatusColor, ToggleBinding};
pub use panel::Panel;
pub use view::View;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::dashboard::PageView;
use crate::io::HttpClient;

/// Build a panel for the configured backend rendering into `view`
pub fn build_panel(config: &Config, http: Arc<dyn HttpClient>, view: Arc<dyn View>) -> Panel {
    let adapter = adapter::from_config(&config.backend);
    tracing::debug!(
        "Using {} backend at {}",
        config.backend.type_name(),
        config.backend.base_url()
    );
    Panel::new(config.backend.base_url(), http, adapter, view)
}

/// Serve the web page until `cancel` fires
pub async fn serve(
    config: &Config,
    http: Arc<dyn HttpClient>,
    cancel: CancellationToken,
) -> Result<()> {
    let page = Arc::new(PageView::new());
    let panel = Arc::new(build_panel(config, http, page.clone()));
    let router = dashboard::build_router(panel, page);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        PanelError::Config(format!(
            "Failed to bind dashboard to port {}: {}",
            config.dashboard.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::debug!("Dashboard stopped");
    Ok(())
}

/// Cancellation token that fires on Ctrl-C
pub fn shutdown_token() -> CancellationToken {
    let cancel = CancellationToken::new();
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });
    cancel
}
