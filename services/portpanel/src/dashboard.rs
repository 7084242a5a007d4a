//! Local web page rendering the panel as server-side HTML

use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tokio::sync::{Mutex, RwLock};

use crate::model::{Command, StatusColor, ToggleBinding};
use crate::panel::Panel;
use crate::text;
use crate::view::View;

/// Rendered status label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub label: String,
    pub color: StatusColor,
}

/// Contents of the log region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LogRegion {
    #[default]
    Empty,
    Entries(Vec<String>),
    Message(String),
}

/// Everything the page currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub status: Option<StatusLine>,
    pub log: LogRegion,
    pub toggle: Option<ToggleBinding>,
    pub alert: Option<String>,
}

/// View that keeps the page contents in memory
#[derive(Debug, Default)]
pub struct PageView {
    snapshot: RwLock<PageSnapshot>,
}

impl PageView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Snapshot for rendering; a pending alert is shown once
    pub async fn take_snapshot(&self) -> PageSnapshot {
        let mut snapshot = self.snapshot.write().await;
        let current = snapshot.clone();
        snapshot.alert = None;
        current
    }
}

#[async_trait]
impl View for PageView {
    async fn render_status(&self, label: &str, color: StatusColor) {
        self.snapshot.write().await.status = Some(StatusLine {
            label: label.to_string(),
            color,
        });
    }

    async fn render_log_entries(&self, lines: &[String]) {
        self.snapshot.write().await.log = LogRegion::Entries(lines.to_vec());
    }

    async fn render_log_message(&self, message: &str) {
        self.snapshot.write().await.log = LogRegion::Message(message.to_string());
    }

    async fn bind_toggle(&self, binding: &ToggleBinding) {
        self.snapshot.write().await.toggle = Some(binding.clone());
    }

    async fn alert(&self, message: &str) {
        self.snapshot.write().await.alert = Some(message.to_string());
    }
}

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub panel: Arc<Panel>,
    pub page: Arc<PageView>,
    /// One page action at a time, like a single browser event loop
    turn: Arc<Mutex<()>>,
}

/// Build the dashboard axum router. `panel` must render into `page`.
pub fn build_router(panel: Arc<Panel>, page: Arc<PageView>) -> Router {
    let dashboard_state = DashboardState {
        panel,
        page,
        turn: Arc::new(Mutex::new(())),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/toggle", post(toggle_handler))
        .route("/command/{action}", post(command_handler))
        .route("/api/page", get(page_handler))
        .route("/health", get(health_handler))
        .with_state(dashboard_state)
}

async fn index_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let _turn = dashboard.turn.lock().await;
    dashboard.panel.refresh().await;
    Html(render_page(&dashboard.page.take_snapshot().await))
}

async fn toggle_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    let _turn = dashboard.turn.lock().await;
    dashboard.panel.press_toggle().await;
    Redirect::to("/")
}

async fn command_handler(
    State(dashboard): State<DashboardState>,
    Path(action): Path<String>,
) -> Response {
    let command: Command = match action.parse() {
        Ok(command) => command,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };
    if !dashboard.panel.supports(command) {
        return (
            StatusCode::BAD_REQUEST,
            format!("The backend has no '{}' command", command),
        )
            .into_response();
    }
    let _turn = dashboard.turn.lock().await;
    dashboard.panel.send_command(command).await;
    Redirect::to("/").into_response()
}

async fn page_handler(State(dashboard): State<DashboardState>) -> impl IntoResponse {
    axum::Json(dashboard.page.snapshot().await)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Render the page HTML for a snapshot
pub fn render_page(snapshot: &PageSnapshot) -> String {
    let status = match &snapshot.status {
        Some(line) => format!(
            r#"<p id="statusText" style="font-size: 1.5rem; font-weight: 600; color: {};">{}</p>"#,
            line.color.css(),
            escape_html(&line.label)
        ),
        None => r#"<p id="statusText" style="font-size: 1.5rem;"></p>"#.to_string(),
    };

    let button = match &snapshot.toggle {
        Some(binding) => format!(
            r#"<form method="post" action="/toggle"><button id="toggleBtn" type="submit" data-command="{}">{}</button></form>"#,
            binding.command,
            escape_html(&binding.label)
        ),
        None => format!(
            r#"<button id="toggleBtn" type="button" disabled>{}</button>"#,
            text::BUTTON_TOGGLE
        ),
    };

    let log: String = match &snapshot.log {
        LogRegion::Empty => String::new(),
        LogRegion::Entries(lines) => lines
            .iter()
            .map(|l| format!("<p>{}</p>", escape_html(l)))
            .collect(),
        LogRegion::Message(message) => escape_html(message),
    };

    let alert = match &snapshot.alert {
        Some(message) => format!(
            r#"<div id="alert" role="alert" style="padding: 0.75rem; margin-bottom: 1rem; color: #721c24; background-color: #f8d7da; border-radius: 0.25rem;">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="no">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Portstatus</title>
</head>
<body style="font-family: system-ui, sans-serif; max-width: 640px; margin: 0 auto; padding: 1rem;">
    {alert}
    <h1>Port</h1>
    <section>
        {status}
        {button}
    </section>
    <section>
        <h2>Logg</h2>
        <div id="logg">{log}</div>
    </section>
</body>
</html>"#,
        alert = alert,
        status = status,
        button = button,
        log = log,
    )
}
