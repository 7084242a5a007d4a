//! Scripted stand-in for the port controller's HTTP API

use std::collections::VecDeque;
use std::sync::Mutex;

use portpanel::io::{HttpClient, HttpResponse};
use portpanel::PanelError;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Reply {
    Body(u16, String),
    Unreachable,
}

impl Reply {
    fn into_result(self, url: &str) -> portpanel::Result<HttpResponse> {
        match self {
            Reply::Body(status, body) => Ok(HttpResponse { status, body }),
            Reply::Unreachable => Err(PanelError::Http(format!(
                "{} failed: connection refused",
                url
            ))),
        }
    }
}

/// Answers status, log and command requests from a script and records every
/// request it sees.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    /// Consumed front to back; the last reply repeats
    statuses: Mutex<VecDeque<Reply>>,
    log: Mutex<Option<Reply>>,
    command: Mutex<Option<Reply>>,
    requests: Mutex<Vec<(String, String)>>,
}

impl ScriptedBackend {
    pub fn push_status(&self, reply: Reply) {
        self.statuses.lock().unwrap().push_back(reply);
    }

    pub fn set_log(&self, reply: Reply) {
        *self.log.lock().unwrap() = Some(reply);
    }

    pub fn set_command(&self, reply: Reply) {
        *self.command.lock().unwrap() = Some(reply);
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn next_status(&self) -> Reply {
        let mut statuses = self.statuses.lock().unwrap();
        if statuses.len() > 1 {
            statuses.pop_front().unwrap()
        } else {
            statuses.front().cloned().unwrap_or(Reply::Unreachable)
        }
    }
}

#[async_trait::async_trait]
impl HttpClient for ScriptedBackend {
    async fn get(&self, url: &str) -> portpanel::Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(("GET".to_string(), url.to_string()));

        let reply = if url.contains("/api/status") {
            self.next_status()
        } else if url.contains("/api/log") {
            self.log.lock().unwrap().clone().unwrap_or(Reply::Unreachable)
        } else {
            Reply::Body(404, r#"{"error": "not found"}"#.to_string())
        };
        reply.into_result(url)
    }

    async fn post(&self, url: &str) -> portpanel::Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push(("POST".to_string(), url.to_string()));

        self.command
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(Reply::Unreachable)
            .into_result(url)
    }
}
