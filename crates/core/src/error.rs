use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShelfError>;

#[derive(Debug, Error)]
pub enum ShelfError {
	/// Browser or driver process could not start. Fatal for the whole run.
	#[error("browser launch failed: {0}")]
	Launch(String),

	/// Remote state reset failed; the scenario cannot assume an empty
	/// database and must be skipped rather than run against unknown state.
	#[error("precondition failed: reset via {url}: {detail}")]
	Precondition { url: String, detail: String },

	#[error("element not found: {selector} (after {timeout_ms}ms)")]
	ElementNotFound { selector: String, timeout_ms: u64 },

	#[error("interaction with {selector} failed: {detail}")]
	Interaction { selector: String, detail: String },

	#[error("result mismatch: expected text containing {expected:?}, got {actual:?}")]
	AssertionMismatch { expected: String, actual: String },

	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error(transparent)]
	WebDriver(#[from] thirtyfour::error::WebDriverError),

	#[error(transparent)]
	Http(#[from] reqwest::Error),

	#[error(transparent)]
	InvalidUrl(#[from] url::ParseError),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl ShelfError {
	/// Wrap a driver-level failure on a located element that rejected input.
	pub fn interaction(selector: &str, detail: impl std::fmt::Display) -> Self {
		Self::Interaction {
			selector: selector.to_string(),
			detail: detail.to_string(),
		}
	}

	/// True when the run cannot continue past this error (as opposed to
	/// failing the current scenario and moving on).
	pub fn is_fatal(&self) -> bool {
		matches!(self, ShelfError::Launch(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn element_not_found_carries_selector_and_timeout() {
		let err = ShelfError::ElementNotFound {
			selector: "register_submit".into(),
			timeout_ms: 10_000,
		};
		let msg = err.to_string();
		assert!(msg.contains("register_submit"), "{msg}");
		assert!(msg.contains("10000ms"), "{msg}");
	}

	#[test]
	fn assertion_mismatch_shows_expected_and_actual() {
		let err = ShelfError::AssertionMismatch {
			expected: "access granted".into(),
			actual: "access denied".into(),
		};
		let msg = err.to_string();
		assert!(msg.contains("access granted"), "{msg}");
		assert!(msg.contains("access denied"), "{msg}");
	}

	#[test]
	fn only_launch_errors_are_fatal() {
		assert!(ShelfError::Launch("no chromedriver".into()).is_fatal());
		assert!(
			!ShelfError::Precondition {
				url: "http://demo-app:8080/demo/flyway".into(),
				detail: "status 500".into(),
			}
			.is_fatal()
		);
		assert!(!ShelfError::interaction("lend_book", "element is disabled").is_fatal());
	}
}
