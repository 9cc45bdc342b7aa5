//! Session configuration.
//!
//! One configuration object replaces the fleet of copy-pasted environment
//! setups the original suite accreted; every knob the variants differed on
//! (driver path, headless mode, proxy handling) is an explicit option here.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::wait::WaitConfig;

/// Default chromedriver port when the harness spawns the process itself.
pub const DEFAULT_DRIVER_PORT: u16 = 9515;

/// Fully owned browser-session configuration.
///
/// This type is the stable handoff between run-time configuration (CLI
/// flags, environment variables) and session startup.
#[derive(Debug, Clone)]
pub struct SessionConfig {
	/// Base URL of the deployed demo application, e.g.
	/// `http://demo-app:8080/demo`.
	pub base_url: Url,
	/// Existing WebDriver endpoint to attach to. When set, no driver
	/// process is spawned.
	pub webdriver_url: Option<Url>,
	/// Override path to the chromedriver binary; defaults to `chromedriver`
	/// on `PATH`.
	pub driver_path: Option<PathBuf>,
	/// Port the spawned chromedriver listens on.
	pub driver_port: u16,
	/// Whether the browser launches headless.
	pub headless: bool,
	/// Optional proxy, routed through only if its probe succeeds.
	pub proxy: Option<ProxyConfig>,
	/// Bounded-wait settings used by all page operations.
	pub wait: WaitConfig,
}

impl SessionConfig {
	/// Creates a baseline config: headless, spawn-our-own chromedriver,
	/// no proxy, default waits.
	pub fn new(base_url: Url) -> Self {
		Self {
			base_url,
			webdriver_url: None,
			driver_path: None,
			driver_port: DEFAULT_DRIVER_PORT,
			headless: true,
			proxy: None,
			wait: WaitConfig::default(),
		}
	}

	pub fn with_webdriver_url(mut self, url: Url) -> Self {
		self.webdriver_url = Some(url);
		self
	}

	pub fn with_driver_path(mut self, path: PathBuf) -> Self {
		self.driver_path = Some(path);
		self
	}

	pub fn with_driver_port(mut self, port: u16) -> Self {
		self.driver_port = port;
		self
	}

	pub fn with_headless(mut self, headless: bool) -> Self {
		self.headless = headless;
		self
	}

	pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
		self.proxy = Some(proxy);
		self
	}

	pub fn with_wait(mut self, wait: WaitConfig) -> Self {
		self.wait = wait;
		self
	}
}

/// Proxy candidate for the browser.
///
/// The address is only used after a short connectivity probe succeeds, so a
/// configured-but-absent proxy never blocks launch beyond `probe_timeout`.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
	/// `host:port` the browser would route through.
	pub address: String,
	/// Upper bound on the connectivity probe.
	pub probe_timeout: Duration,
}

impl ProxyConfig {
	pub fn new(address: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			probe_timeout: Duration::from_secs(2),
		}
	}

	pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
		self.probe_timeout = timeout;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn base_url() -> Url {
		Url::parse("http://demo-app:8080/demo").unwrap()
	}

	#[test]
	fn defaults_are_headless_with_spawned_driver() {
		let cfg = SessionConfig::new(base_url());
		assert!(cfg.headless);
		assert!(cfg.webdriver_url.is_none());
		assert!(cfg.driver_path.is_none());
		assert_eq!(cfg.driver_port, DEFAULT_DRIVER_PORT);
		assert!(cfg.proxy.is_none());
	}

	#[test]
	fn builder_overrides_stick() {
		let cfg = SessionConfig::new(base_url())
			.with_driver_path("/opt/chromedriver".into())
			.with_driver_port(4444)
			.with_headless(false)
			.with_proxy(ProxyConfig::new("proxy:3128"));

		assert_eq!(cfg.driver_path.as_deref(), Some("/opt/chromedriver".as_ref()));
		assert_eq!(cfg.driver_port, 4444);
		assert!(!cfg.headless);
		assert_eq!(cfg.proxy.unwrap().address, "proxy:3128");
	}
}
