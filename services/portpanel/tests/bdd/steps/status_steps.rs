//! BDD step definitions for the status viewer

use std::sync::Arc;

use cucumber::{given, then, when};

use portpanel::adapter::{DiscreteApi, ToggleApi};
use portpanel::StatusColor;

use crate::backend::Reply;
use crate::world::PanelWorld;

fn parse_color(s: &str) -> StatusColor {
    match s {
        "green" => StatusColor::Green,
        "red" => StatusColor::Red,
        "orange" => StatusColor::Orange,
        other => panic!("Unknown color: {}", other),
    }
}

#[given("a discrete backend")]
fn discrete_backend(world: &mut PanelWorld) {
    world.adapter = Some(Arc::new(DiscreteApi::default()));
}

#[given(expr = "a discrete backend for port {string}")]
fn discrete_backend_for_port(world: &mut PanelWorld, port: String) {
    world.adapter = Some(Arc::new(DiscreteApi::new("event".to_string(), Some(port))));
}

#[given("a toggle backend")]
fn toggle_backend(world: &mut PanelWorld) {
    world.adapter = Some(Arc::new(ToggleApi));
}

#[given(expr = "the backend reports status {string}")]
fn backend_reports_status(world: &mut PanelWorld, body: String) {
    world.backend.push_status(Reply::Body(200, body));
}

#[given("the status endpoint is unreachable")]
fn status_unreachable(world: &mut PanelWorld) {
    world.backend.push_status(Reply::Unreachable);
}

#[when("the status is refreshed")]
async fn refresh_status(world: &mut PanelWorld) {
    world.panel().refresh_status().await;
}

#[when(expr = "the status is refreshed {int} times")]
async fn refresh_status_times(world: &mut PanelWorld, times: usize) {
    for _ in 0..times {
        world.panel().refresh_status().await;
    }
}

#[then(expr = "the status label is {string} in {word}")]
async fn status_label_is(world: &mut PanelWorld, label: String, color: String) {
    let status = world.page.snapshot().await.status.expect("no status rendered");
    assert_eq!(status.label, label);
    assert_eq!(status.color, parse_color(&color));
}

#[then(expr = "the toggle button reads {string}")]
async fn toggle_button_reads(world: &mut PanelWorld, label: String) {
    let binding = world.page.snapshot().await.toggle.expect("toggle not bound");
    assert_eq!(binding.label, label);
}

#[then("the toggle button is not bound")]
async fn toggle_button_not_bound(world: &mut PanelWorld) {
    assert!(world.page.snapshot().await.toggle.is_none());
    assert!(world.panel().binding().await.is_none());
}

#[then(expr = "the toggle button would send {string}")]
async fn toggle_button_would_send(world: &mut PanelWorld, command: String) {
    let shown = world.page.snapshot().await.toggle.expect("toggle not bound");
    let held = world.panel().binding().await.expect("panel has no binding");
    assert_eq!(shown, held, "page and panel disagree on the binding");
    assert_eq!(held.command.as_str(), command);
}
