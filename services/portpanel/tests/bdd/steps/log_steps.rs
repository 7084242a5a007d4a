//! BDD step definitions for the log viewer

use cucumber::{given, then, when};

use portpanel::dashboard::LogRegion;

use crate::backend::Reply;
use crate::world::PanelWorld;

#[given(expr = "the backend returns the log {string}")]
fn backend_returns_log(world: &mut PanelWorld, body: String) {
    world.backend.set_log(Reply::Body(200, body));
}

#[when(expr = "the backend log changes to {string}")]
fn backend_log_changes(world: &mut PanelWorld, body: String) {
    world.backend.set_log(Reply::Body(200, body));
}

#[given(expr = "the backend answers the log with HTTP {int} and {string}")]
fn backend_answers_log(world: &mut PanelWorld, status: u16, body: String) {
    world.backend.set_log(Reply::Body(status, body));
}

#[given("the log endpoint is unreachable")]
fn log_unreachable(world: &mut PanelWorld) {
    world.backend.set_log(Reply::Unreachable);
}

#[when("the log is refreshed")]
async fn refresh_log(world: &mut PanelWorld) {
    world.panel().refresh_log().await;
}

#[then(expr = "the log shows {int} entries")]
async fn log_shows_entries(world: &mut PanelWorld, count: usize) {
    match world.page.snapshot().await.log {
        LogRegion::Entries(lines) => assert_eq!(lines.len(), count, "{lines:?}"),
        other => panic!("expected log entries, got {other:?}"),
    }
}

#[then(expr = "log entry {int} reads {string}")]
async fn log_entry_reads(world: &mut PanelWorld, index: usize, text: String) {
    match world.page.snapshot().await.log {
        LogRegion::Entries(lines) => assert_eq!(lines[index - 1], text),
        other => panic!("expected log entries, got {other:?}"),
    }
}

#[then(expr = "the log shows the message {string}")]
async fn log_shows_message(world: &mut PanelWorld, message: String) {
    assert_eq!(
        world.page.snapshot().await.log,
        LogRegion::Message(message)
    );
}
