//! Mock implementations for testing

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::station::{FetchError, StationFetcher};

/// Station fetcher that replays queued responses in order
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    responses: Mutex<VecDeque<Result<Value, FetchError>>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch sleeps for `delay` before answering
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn push_json(&self, json: Value) {
        self.responses.lock().unwrap().push_back(Ok(json));
    }

    pub fn push_error(&self, error: FetchError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StationFetcher for ScriptedFetcher {
    async fn fetch_json(&self, _url: &str) -> Result<Value, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::NetworkError("no scripted response".to_string())))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
