//! Assertions over the page's result element.

use std::time::Instant;

use thirtyfour::By;
use tokio::time::sleep;

use crate::error::{Result, ShelfError};
use crate::page::ids;
use crate::session::BrowserSession;
use crate::wait::WaitConfig;

/// Result text after a successful user registration.
pub const REGISTERED_OK: &str = "successfully registered: true";
/// Result text after a successful login.
pub const ACCESS_GRANTED: &str = "access granted";
/// Result text after a successful book checkout.
pub const LEND_SUCCESS: &str = "SUCCESS";

/// Waits for the result element and asserts its text contains `substring`.
///
/// The element appears asynchronously after form submission, so this polls
/// within `wait`: the element may be missing entirely, or present with
/// stale text that the pending AJAX response is about to replace. On
/// timeout the error carries the expected substring and the last text
/// actually observed, which is the whole diagnosis.
pub async fn expect_result_contains(
	session: &BrowserSession,
	substring: &str,
	wait: WaitConfig,
) -> Result<String> {
	let start = Instant::now();
	let mut last_seen: Option<String> = None;

	loop {
		if let Ok(element) = session.driver().find(By::Id(ids::RESULT)).await {
			// A read can fail if the element went stale mid-poll; the next
			// iteration finds the replacement.
			if let Ok(text) = element.text().await {
				if text.contains(substring) {
					return Ok(text);
				}
				last_seen = Some(text);
			}
		}

		if start.elapsed() >= wait.timeout {
			return Err(match last_seen {
				Some(actual) => ShelfError::AssertionMismatch {
					expected: substring.to_string(),
					actual,
				},
				None => ShelfError::ElementNotFound {
					selector: ids::RESULT.to_string(),
					timeout_ms: wait.timeout_ms(),
				},
			});
		}

		sleep(wait.poll_interval).await;
	}
}
