use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use shelf::config::DEFAULT_DRIVER_PORT;
use shelf::{ProxyConfig, SessionConfig, WaitConfig};
use url::Url;

use crate::output::OutputFormat;

/// Root CLI for the library demo-app harness.
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(about = "Drive library demo-app flows through a real browser")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Output format for flow reports
	#[arg(short = 'f', long, global = true, value_enum, default_value = "text")]
	pub format: OutputFormat,

	/// Reset the application database before running the flow
	#[arg(long, global = true)]
	pub reset: bool,

	#[command(flatten)]
	pub session: SessionOpts,

	#[command(subcommand)]
	pub command: Commands,
}

/// Everything the session manager is configurable on.
#[derive(Args, Debug, Clone)]
pub struct SessionOpts {
	/// Base URL of the deployed demo application
	#[arg(
		long,
		global = true,
		env = "SHELF_BASE_URL",
		default_value = "http://demo-app:8080/demo"
	)]
	pub base_url: Url,

	/// Attach to a running WebDriver endpoint instead of spawning chromedriver
	#[arg(long, global = true, env = "SHELF_WEBDRIVER_URL")]
	pub webdriver_url: Option<Url>,

	/// Path to the chromedriver binary (defaults to `chromedriver` on PATH)
	#[arg(long, global = true, env = "SHELF_CHROMEDRIVER")]
	pub driver_path: Option<PathBuf>,

	/// Port for the spawned chromedriver
	#[arg(long, global = true, default_value_t = DEFAULT_DRIVER_PORT)]
	pub driver_port: u16,

	/// Run with a visible browser window
	#[arg(long, global = true)]
	pub headed: bool,

	/// Proxy address (host:port); probed before launch, skipped if unreachable
	#[arg(long, global = true, env = "SHELF_PROXY")]
	pub proxy: Option<String>,

	/// Ceiling for bounded page waits, in milliseconds
	#[arg(long, global = true, default_value_t = 10_000)]
	pub timeout_ms: u64,
}

impl SessionOpts {
	pub fn to_config(&self) -> SessionConfig {
		let mut config = SessionConfig::new(self.base_url.clone())
			.with_driver_port(self.driver_port)
			.with_headless(!self.headed)
			.with_wait(WaitConfig::with_timeout(Duration::from_millis(
				self.timeout_ms,
			)));

		if let Some(url) = &self.webdriver_url {
			config = config.with_webdriver_url(url.clone());
		}
		if let Some(path) = &self.driver_path {
			config = config.with_driver_path(path.clone());
		}
		if let Some(address) = &self.proxy {
			config = config.with_proxy(ProxyConfig::new(address.clone()));
		}

		config
	}
}

#[derive(Subcommand, Debug)]
pub enum Commands {
	/// Register a new user and expect successful registration
	RegisterUser { username: String, password: String },
	/// Log a registered user in and expect access granted
	Login { username: String, password: String },
	/// Register a borrower
	RegisterBorrower { name: String },
	/// Register a book
	RegisterBook { title: String },
	/// Check a book out to a borrower and expect success
	Lend { borrower: String, book: String },
	/// Reset the demo application's database and nothing else
	Reset,
	/// Run the built-in end-to-end scenarios
	Smoke,
}
