//! Cucumber runner for the live acceptance suite.
//!
//! One browser session serves the whole run; each scenario starts with a
//! database reset (see `world::LibraryWorld::fresh`) and scenarios run
//! sequentially, so nothing leaks between them. Without `SHELF_BASE_URL`
//! there is no deployment to test and the runner exits successfully.

mod steps;
mod world;

use cucumber::World as _;
use cucumber::writer::Stats as _;

use world::LibraryWorld;

#[tokio::main]
async fn main() {
	if shelf_acceptance::live_config().is_none() {
		eprintln!(
			"skipping live acceptance: {} is not set",
			shelf_acceptance::BASE_URL_VAR
		);
		return;
	}

	let writer = LibraryWorld::cucumber()
		.max_concurrent_scenarios(1)
		.fail_on_skipped()
		.run("tests/features")
		.await;

	// The run-wide session only exists if some scenario got far enough to
	// start it.
	if let Some(session) = world::session_handle() {
		if let Err(err) = session.close().await {
			eprintln!("warning: session teardown failed: {err}");
		}
	}

	if writer.execution_has_failed() {
		std::process::exit(1);
	}
}
