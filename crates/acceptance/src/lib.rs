//! Run-time configuration and shared test data for the acceptance suite.
//!
//! The suite targets a live deployment, so everything it needs is supplied
//! through the environment. Without [`BASE_URL_VAR`] there is nothing to
//! run against and the runner skips itself.

use shelf::{ProxyConfig, SessionConfig};
use url::Url;

pub const DEFAULT_USERNAME: &str = "alice";
pub const DEFAULT_PASSWORD: &str = "asdfkljhasdfishdfksaljdfh";
pub const BORROWER_NAME: &str = "some borrower";
pub const BOOK_TITLE: &str = "some book";

/// Base URL of the deployed demo application, e.g. `http://demo-app:8080/demo`.
pub const BASE_URL_VAR: &str = "SHELF_BASE_URL";
/// Existing WebDriver endpoint to attach to instead of spawning chromedriver.
pub const WEBDRIVER_URL_VAR: &str = "SHELF_WEBDRIVER_URL";
/// Override path to the chromedriver binary.
pub const CHROMEDRIVER_VAR: &str = "SHELF_CHROMEDRIVER";
/// Proxy address to probe before launch.
pub const PROXY_VAR: &str = "SHELF_PROXY";
/// Any value disables headless mode.
pub const HEADED_VAR: &str = "SHELF_HEADED";

/// Session configuration from the process environment, or `None` when no
/// deployment is configured.
pub fn live_config() -> Option<SessionConfig> {
	live_config_from(|name| std::env::var(name).ok())
}

/// Same mapping as [`live_config`] over an arbitrary variable source, so it
/// is testable without mutating the process environment.
pub fn live_config_from(var: impl Fn(&str) -> Option<String>) -> Option<SessionConfig> {
	let base_url = Url::parse(&var(BASE_URL_VAR)?).ok()?;
	let mut config = SessionConfig::new(base_url);

	if let Some(url) = var(WEBDRIVER_URL_VAR).and_then(|value| Url::parse(&value).ok()) {
		config = config.with_webdriver_url(url);
	}
	if let Some(path) = var(CHROMEDRIVER_VAR) {
		config = config.with_driver_path(path.into());
	}
	if let Some(address) = var(PROXY_VAR) {
		config = config.with_proxy(ProxyConfig::new(address));
	}
	if var(HEADED_VAR).is_some() {
		config = config.with_headless(false);
	}

	Some(config)
}
