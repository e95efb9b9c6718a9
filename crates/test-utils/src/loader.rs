//! In-memory loader for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use wfs_protocol::{WfsError, WfsResult, XmlLoader};

/// Serves canned bodies by URL and counts every call.
///
/// Unknown URLs fail with a transport error. An optional delay keeps loads
/// in flight long enough to exercise request coalescing.
#[derive(Debug, Default)]
pub struct MockLoader {
    bodies: Mutex<HashMap<String, String>>,
    calls: Mutex<HashMap<String, usize>>,
    total_calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every response by `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Serve `body` for `url`.
    pub fn with_body(self, url: &str, body: &str) -> Self {
        self.bodies
            .try_lock()
            .expect("loader not shared yet")
            .insert(url.to_string(), body.to_string());
        self
    }

    /// Calls made for `url`.
    pub async fn calls_for(&self, url: &str) -> usize {
        self.calls.lock().await.get(url).copied().unwrap_or(0)
    }

    /// Calls made for any URL.
    pub fn total_calls(&self) -> usize {
        self.total_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl XmlLoader for MockLoader {
    async fn load_xml(&self, url: &str) -> WfsResult<String> {
        self.total_calls.fetch_add(1, Ordering::SeqCst);
        *self.calls.lock().await.entry(url.to_string()).or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.bodies
            .lock()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| WfsError::Transport {
                url: url.to_string(),
                message: "HTTP 404 Not Found".to_string(),
            })
    }
}
