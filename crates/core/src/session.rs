//! Browser session lifecycle.

use std::fmt;
use std::sync::Mutex;

use thirtyfour::{ChromeCapabilities, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::SessionConfig;
use crate::driver::ChromeDriver;
use crate::error::{Result, ShelfError};
use crate::page::LibraryPage;
use crate::profile::ProfileDir;
use crate::wait::WaitConfig;
use crate::{proxy, reset};

/// One live browser, one isolated profile directory, one WebDriver session.
///
/// Created once per run; scenarios share it and rely on
/// [`BrowserSession::reset_remote_state`] for isolation instead of
/// relaunching the browser.
pub struct BrowserSession {
	driver: WebDriver,
	driver_proc: Mutex<Option<ChromeDriver>>,
	profile: Mutex<Option<ProfileDir>>,
	http: reqwest::Client,
	base_url: Url,
	wait: WaitConfig,
}

impl BrowserSession {
	/// Launches the browser described by `config`.
	///
	/// Ordering matters: the profile directory and capabilities are
	/// assembled first (including the bounded proxy probe), then the
	/// driver process comes up, then the WebDriver session connects.
	/// Any failure along the way is fatal for the run.
	pub async fn start(config: SessionConfig) -> Result<Self> {
		let profile = ProfileDir::create()?;
		let capabilities = build_capabilities(&config, &profile).await?;

		let http = reqwest::Client::new();
		let (driver_proc, server_url) = match &config.webdriver_url {
			Some(url) => (None, url.as_str().trim_end_matches('/').to_string()),
			None => {
				let proc =
					ChromeDriver::spawn(config.driver_path.as_deref(), config.driver_port, &http)
						.await?;
				let url = proc.url();
				(Some(proc), url)
			}
		};

		info!(target = "shelf", %server_url, headless = config.headless, "starting browser session");
		let driver = WebDriver::new(&server_url, capabilities)
			.await
			.map_err(|err| {
				ShelfError::Launch(format!("webdriver session at {server_url}: {err}"))
			})?;

		Ok(Self {
			driver,
			driver_proc: Mutex::new(driver_proc),
			profile: Mutex::new(Some(profile)),
			http,
			base_url: config.base_url,
			wait: config.wait,
		})
	}

	pub fn driver(&self) -> &WebDriver {
		&self.driver
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn wait(&self) -> WaitConfig {
		self.wait
	}

	/// Entry point to the page-interaction layer.
	pub fn library(&self) -> LibraryPage<'_> {
		LibraryPage::new(self)
	}

	/// Wipes the demo application's database via its Flyway endpoint.
	/// Called before every scenario; failure means the scenario must be
	/// skipped, not run against unknown state.
	pub async fn reset_remote_state(&self) -> Result<()> {
		reset::reset_remote_state(&self.http, &self.base_url).await
	}

	/// Navigates to `segment` under the configured base URL.
	pub async fn goto(&self, segment: &str) -> Result<()> {
		let url = reset::endpoint_url(&self.base_url, segment)?;
		debug!(target = "shelf", %url, "navigate");
		self.driver.goto(url.as_str()).await?;
		Ok(())
	}

	/// Quits the browser, stops the driver process and removes the profile
	/// directory. Profile removal failures are demoted to warnings: later
	/// sessions always get fresh directories.
	pub async fn close(&self) -> Result<()> {
		info!(target = "shelf", "closing browser session");
		if let Err(err) = self.driver.clone().quit().await {
			warn!(target = "shelf", %err, "browser quit failed");
		}

		if let Some(mut proc) = lock(&self.driver_proc).take() {
			proc.stop();
		}
		if let Some(profile) = lock(&self.profile).take() {
			profile.remove();
		}
		Ok(())
	}
}

impl fmt::Debug for BrowserSession {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BrowserSession")
			.field("base_url", &self.base_url.as_str())
			.finish_non_exhaustive()
	}
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

async fn build_capabilities(
	config: &SessionConfig,
	profile: &ProfileDir,
) -> Result<ChromeCapabilities> {
	let mut caps = DesiredCapabilities::chrome();
	caps.add_arg(&format!("--user-data-dir={}", profile.path().display()))?;
	// Stability flags for containerized CI runners.
	caps.add_arg("--no-sandbox")?;
	caps.add_arg("--disable-dev-shm-usage")?;
	if config.headless {
		caps.add_arg("--headless=new")?;
	}

	if let Some(proxy) = &config.proxy {
		if proxy::probe(&proxy.address, proxy.probe_timeout).await {
			info!(target = "shelf", address = %proxy.address, "routing through proxy");
			caps.add_arg(&format!("--proxy-server={}", proxy.address))?;
		} else {
			info!(
				target = "shelf",
				address = %proxy.address,
				"proxy not reachable, launching unproxied"
			);
		}
	}

	Ok(caps)
}
