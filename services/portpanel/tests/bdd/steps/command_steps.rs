//! BDD step definitions for the command dispatcher

use cucumber::{given, then, when};

use portpanel::Command;

use crate::backend::Reply;
use crate::world::PanelWorld;

fn parse_command(s: &str) -> Command {
    s.parse()
        .unwrap_or_else(|_| panic!("Unknown command: {}", s))
}

#[given("the backend accepts commands")]
fn backend_accepts_commands(world: &mut PanelWorld) {
    world.backend.set_command(Reply::Body(200, "{}".to_string()));
}

#[given(expr = "the backend rejects commands with HTTP {int}")]
fn backend_rejects_commands(world: &mut PanelWorld, status: u16) {
    world
        .backend
        .set_command(Reply::Body(status, r#"{"success": false}"#.to_string()));
}

#[given("the command endpoint is unreachable")]
fn command_unreachable(world: &mut PanelWorld) {
    world.backend.set_command(Reply::Unreachable);
}

#[when("the request history is cleared")]
fn clear_requests(world: &mut PanelWorld) {
    world.backend.clear_requests();
}

#[when(expr = "the command {string} is sent")]
async fn send_command(world: &mut PanelWorld, command: String) {
    let command = parse_command(&command);
    let result = world.panel().send_command(command).await;
    world.command_result = Some(result);
}

#[when("the toggle button is pressed")]
async fn press_toggle(world: &mut PanelWorld) {
    let result = world.panel().press_toggle().await;
    world.command_result = Some(result);
}

#[then("the command succeeds")]
fn command_succeeds(world: &mut PanelWorld) {
    assert_eq!(world.command_result, Some(true));
}

#[then("the command fails")]
fn command_fails(world: &mut PanelWorld) {
    assert_eq!(world.command_result, Some(false));
}

#[then(expr = "a POST was sent to {string}")]
fn post_sent_to(world: &mut PanelWorld, path: String) {
    let requests = world.backend.requests();
    assert!(
        requests
            .iter()
            .any(|(method, url)| method == "POST" && url.ends_with(&path)),
        "no POST to {} in {:?}",
        path,
        requests
    );
}

#[then("no POST was sent")]
fn no_post_sent(world: &mut PanelWorld) {
    let requests = world.backend.requests();
    assert!(
        !requests.iter().any(|(method, _)| method == "POST"),
        "{requests:?}"
    );
}

#[then(expr = "{int} GET request(s) went to {string}")]
fn get_requests_went_to(world: &mut PanelWorld, count: usize, path: String) {
    let requests = world.backend.requests();
    let matching = requests
        .iter()
        .filter(|(method, url)| method == "GET" && url.ends_with(&path))
        .count();
    assert_eq!(matching, count, "{requests:?}");
}

#[then(expr = "the user is alerted with {string}")]
async fn user_alerted(world: &mut PanelWorld, message: String) {
    assert_eq!(world.page.snapshot().await.alert, Some(message));
}

#[then("the user is not alerted")]
async fn user_not_alerted(world: &mut PanelWorld) {
    assert_eq!(world.page.snapshot().await.alert, None);
}
