use std::{future::Future, time::Duration};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use tokio_retry::RetryIf;

use crate::app::models::upstream_error::UpstreamError;

use super::shutdown::Shutdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_backoff: Duration::from_millis(1000),
            max_backoff: Duration::from_millis(10000),
        }
    }
}

impl RetryPolicy {
    pub fn backoff(&self) -> Backoff {
        Backoff {
            next: self.initial_backoff,
            max: self.max_backoff,
            remaining: self.max_retries,
        }
    }

    /// Delay slept after the given failed attempt (1-based), if another attempt follows.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt == 0 {
            return None;
        }
        self.backoff().nth((attempt - 1) as usize)
    }
}

/// Doubling delays, each capped at `max`, one per retry.
#[derive(Debug, Clone)]
pub struct Backoff {
    next: Duration,
    max: Duration,
    remaining: u32,
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let delay = self.next.min(self.max);
        self.next = self.next.saturating_mul(2);

        Some(delay)
    }
}

/// Runs `action` until it succeeds, fails with a non-transient error, or the
/// policy runs out of retries. The last error is returned in the latter cases.
/// Abandons the loop, including a pending backoff, once `shutdown` fires.
pub async fn retry<T, F, Fut>(
    policy: &RetryPolicy,
    shutdown: &Shutdown,
    action: F,
) -> Result<T, UpstreamError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, UpstreamError>>,
{
    let mut attempt: u32 = 0;
    let condition = |e: &UpstreamError| {
        attempt += 1;

        if !e.is_transient() {
            return false;
        }

        match policy.delay_after(attempt) {
            Some(delay) => tracing::warn!(
                attempt,
                max_retries = policy.max_retries,
                delay_ms = delay.as_millis() as u64,
                "retrying after transient upstream error: {e}"
            ),
            None => tracing::error!(attempt, "upstream retries exhausted: {e}"),
        }

        true
    };

    tokio::select! {
        biased;
        _ = shutdown.cancelled() => {
            tracing::warn!("abandoning upstream call on shutdown");
            Err(UpstreamError::Cancelled)
        }
        result = RetryIf::spawn(policy.backoff(), action, condition) => result,
    }
}

/// Sends the request built by `request` under the retry policy and decodes the
/// JSON body. Non-success statuses become `UpstreamError::Status` so they can be
/// classified; an undecodable success body is `UpstreamError::Decode`.
pub async fn fetch_json_with_retry<T, F>(
    policy: &RetryPolicy,
    shutdown: &Shutdown,
    request: F,
) -> Result<T, UpstreamError>
where
    T: DeserializeOwned,
    F: Fn() -> RequestBuilder,
{
    retry(policy, shutdown, || fetch_json(request())).await
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, UpstreamError> {
    let res = request.send().await?;
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        tracing::error!(status = status.as_u16(), body = %text, "upstream returned an error response");
        return Err(UpstreamError::Status { status, body: text });
    }

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(%text, "failed to deserialize upstream response");
            Err(UpstreamError::Decode(e.to_string()))
        }
    }
}
