use anyhow::Result;
use tokio::time::{sleep, Duration};
use tracing::{error, warn};

/// Exponential backoff applied to the IAM login exchange.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub attempts: u32,
    /// doubled on every attempt until max_delay_ms
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            base_delay_ms: 250,
            max_delay_ms: 2_000,
        }
    }
}

impl RetryPolicy {
    pub async fn run<F, Fut, T>(&self, mut operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let attempts = self.attempts.max(1);
        let mut delay = self.base_delay_ms;

        for attempt in 1..=attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < attempts => {
                    warn!(attempt, attempts, delay_ms = delay, "retrying after failure: {e}");
                    sleep(Duration::from_millis(delay)).await;
                    delay = (delay * 2).min(self.max_delay_ms);
                }
                Err(e) => {
                    error!("giving up after {attempt} attempts: {e}");
                    return Err(e);
                }
            }
        }
        unreachable!("loop covers every attempt")
    }
}
