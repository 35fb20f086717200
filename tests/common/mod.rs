//! Shared test helpers.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reverse_dns_client::{ApiError, ApiRequester, DEFAULT_BASE_URL, RequestPayload, Result};

/// Skip a test when required environment variables are missing.
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("skipping test: missing environment variable {}", $var);
                return;
            }
        )+
    };
}

/// What the mock hands back from `post`.
enum Reply {
    Body(String),
    Error(ApiError),
}

/// Observable side of a [`MockRequester`], shared with the test.
pub struct MockState {
    last_payload: Mutex<Option<RequestPayload>>,
    calls: AtomicUsize,
}

impl MockState {
    /// Number of `post` calls the mock has received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The payload of the most recent `post` call.
    pub fn last_payload(&self) -> Option<RequestPayload> {
        self.last_payload.lock().unwrap().clone()
    }
}

/// Transport double: records each payload and replies with a canned body
/// or a canned error.
pub struct MockRequester {
    reply: Reply,
    state: Arc<MockState>,
    base_url: String,
    timeout: Duration,
}

impl MockRequester {
    fn build(reply: Reply) -> (Self, Arc<MockState>) {
        let state = Arc::new(MockState {
            last_payload: Mutex::new(None),
            calls: AtomicUsize::new(0),
        });
        let mock = Self {
            reply,
            state: Arc::clone(&state),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        };
        (mock, state)
    }

    /// A mock replying with `body` on every call.
    pub fn replying(body: impl Into<String>) -> (Self, Arc<MockState>) {
        Self::build(Reply::Body(body.into()))
    }

    /// A mock failing with `error` on every call.
    pub fn failing(error: ApiError) -> (Self, Arc<MockState>) {
        Self::build(Reply::Error(error))
    }
}

#[async_trait]
impl ApiRequester for MockRequester {
    async fn post(&self, payload: &RequestPayload) -> Result<String> {
        self.state.calls.fetch_add(1, Ordering::SeqCst);
        *self.state.last_payload.lock().unwrap() = Some(payload.clone());
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Error(error) => Err(error.clone()),
        }
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }
}
