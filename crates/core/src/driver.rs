//! chromedriver process lifecycle.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::debug;

use crate::error::{Result, ShelfError};
use crate::wait::{self, WaitConfig};

/// A chromedriver child bound to one port for the lifetime of a session.
///
/// Spawned with `kill_on_drop` so an aborted run never leaks the process.
#[derive(Debug)]
pub struct ChromeDriver {
	child: Child,
	port: u16,
}

impl ChromeDriver {
	/// Spawns chromedriver and waits until its `/status` endpoint answers.
	///
	/// A binary that cannot start or never becomes ready is a `Launch`
	/// error; nothing downstream can run without the driver.
	pub async fn spawn(path: Option<&Path>, port: u16, http: &reqwest::Client) -> Result<Self> {
		let program = path.unwrap_or_else(|| Path::new("chromedriver"));
		debug!(target = "shelf", program = %program.display(), port, "spawning chromedriver");

		let child = Command::new(program)
			.arg(format!("--port={port}"))
			.stdout(Stdio::null())
			.stderr(Stdio::null())
			.kill_on_drop(true)
			.spawn()
			.map_err(|err| {
				ShelfError::Launch(format!(
					"could not spawn chromedriver at {}: {err}",
					program.display()
				))
			})?;

		let status_url = format!("http://127.0.0.1:{port}/status");
		let ready = wait::wait_for(
			move || {
				let http = http.clone();
				let status_url = status_url.clone();
				async move {
					http.get(&status_url)
						.send()
						.await
						.map(|resp| resp.status().is_success())
						.unwrap_or(false)
				}
			},
			WaitConfig::new(Duration::from_secs(10), Duration::from_millis(100)),
			"chromedriver status endpoint",
		)
		.await;

		if let Err(err) = ready {
			return Err(ShelfError::Launch(format!(
				"chromedriver on port {port} never became ready: {err}"
			)));
		}

		Ok(Self { child, port })
	}

	/// WebDriver endpoint served by this process.
	pub fn url(&self) -> String {
		format!("http://127.0.0.1:{}", self.port)
	}

	/// Sends the kill signal without waiting for exit; `kill_on_drop`
	/// covers the case where this is never called.
	pub fn stop(&mut self) {
		if let Err(err) = self.child.start_kill() {
			debug!(target = "shelf", port = self.port, %err, "chromedriver already gone");
		}
	}
}
