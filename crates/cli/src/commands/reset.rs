//! Database reset without a browser.

use shelf::Result;
use url::Url;

use crate::output::{FlowReport, OutputFormat};

pub async fn execute(base_url: &Url, format: OutputFormat) -> Result<()> {
	let http = reqwest::Client::new();
	shelf::reset::reset_remote_state(&http, base_url).await?;
	FlowReport::new("reset", None, "application database reset".into()).print(format);
	Ok(())
}
