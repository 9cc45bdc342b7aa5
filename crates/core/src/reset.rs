//! Remote application-state reset.
//!
//! The demo application exposes a Flyway migration endpoint that wipes its
//! database; every scenario starts by hitting it so no state leaks between
//! scenarios. The call is idempotent server-side, so a repeated reset is
//! harmless.

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::error::{Result, ShelfError};

/// Appends a path segment to the base URL without disturbing its path.
///
/// `Url::join` would replace the last segment of a base like
/// `http://demo-app:8080/demo`, which is exactly the wrong thing here.
pub(crate) fn endpoint_url(base: &Url, segment: &str) -> Result<Url> {
	let mut url = base.clone();
	url.path_segments_mut()
		.map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
		.pop_if_empty()
		.push(segment);
	Ok(url)
}

/// Issues the reset and requires a 2xx answer.
///
/// Anything else (including transport failure) is a precondition failure:
/// the caller must skip the scenario instead of running it against unknown
/// state.
pub async fn reset_remote_state(http: &Client, base_url: &Url) -> Result<()> {
	let url = endpoint_url(base_url, "flyway")?;
	debug!(target = "shelf", %url, "resetting remote application state");

	let response = http
		.get(url.clone())
		.send()
		.await
		.map_err(|err| ShelfError::Precondition {
			url: url.to_string(),
			detail: err.to_string(),
		})?;

	let status = response.status();
	if !status.is_success() {
		return Err(ShelfError::Precondition {
			url: url.to_string(),
			detail: format!("status {status}"),
		});
	}

	Ok(())
}
