#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use cinedex_core::{Adapter, Error, Result};

/// Canned-response adapter: hands back queued payloads in order and records
/// every request it served.
#[derive(Debug, Default)]
pub struct StubAdapter {
    responses: Mutex<VecDeque<Value>>,
    requests: Mutex<Vec<Request>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl StubAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Value) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Adapter for StubAdapter {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<Value> {
        self.requests.lock().unwrap().push(Request {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
        });

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Api("no stubbed response queued".to_string()))
    }
}

/// Opt-in log capture for debugging test runs: `RUST_LOG=debug cargo test`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
