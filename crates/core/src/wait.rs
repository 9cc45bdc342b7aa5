//! Bounded condition polling.
//!
//! The demo application drives every flow with AJAX, so the DOM reaches its
//! interesting state some time after navigation returns. All synchronization
//! in this crate goes through the polls defined here; there are no fixed
//! sleeps anywhere in the harness.

use std::future::Future;
use std::time::{Duration, Instant};

use thirtyfour::{By, WebDriver, WebElement};
use tokio::time::sleep;

use crate::error::{Result, ShelfError};

/// Default ceiling for a single wait (matches the explicit waits the demo
/// page needs for its slowest AJAX round trips).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default interval between condition checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Timeout and poll interval for a bounded wait.
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
	pub timeout: Duration,
	pub poll_interval: Duration,
}

impl WaitConfig {
	pub fn new(timeout: Duration, poll_interval: Duration) -> Self {
		Self {
			timeout,
			poll_interval,
		}
	}

	pub fn with_timeout(timeout: Duration) -> Self {
		Self::new(timeout, DEFAULT_POLL_INTERVAL)
	}

	pub fn timeout_ms(&self) -> u64 {
		self.timeout.as_millis() as u64
	}
}

impl Default for WaitConfig {
	fn default() -> Self {
		Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
	}
}

/// Polls `condition` until it reports true or `config.timeout` elapses.
///
/// `description` names the condition in the timeout error so a failed wait
/// can be diagnosed without re-running.
pub async fn wait_for<F, Fut>(condition: F, config: WaitConfig, description: &str) -> Result<()>
where
	F: Fn() -> Fut,
	Fut: Future<Output = bool>,
{
	let start = Instant::now();

	loop {
		if condition().await {
			return Ok(());
		}

		if start.elapsed() >= config.timeout {
			return Err(ShelfError::Timeout {
				ms: config.timeout_ms(),
				condition: description.to_string(),
			});
		}

		sleep(config.poll_interval).await;
	}
}

/// Polls for an element with the given id until it is present.
///
/// This is the interactive-state wait every page flow starts with; failure
/// maps to `ElementNotFound` rather than a bare timeout because the missing
/// control is the diagnosis.
pub async fn wait_for_element(
	driver: &WebDriver,
	element_id: &str,
	config: WaitConfig,
) -> Result<WebElement> {
	let start = Instant::now();

	loop {
		if let Ok(element) = driver.find(By::Id(element_id)).await {
			return Ok(element);
		}

		if start.elapsed() >= config.timeout {
			return Err(ShelfError::ElementNotFound {
				selector: element_id.to_string(),
				timeout_ms: config.timeout_ms(),
			});
		}

		sleep(config.poll_interval).await;
	}
}
