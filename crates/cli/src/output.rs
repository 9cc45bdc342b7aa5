use clap::ValueEnum;
use serde::Serialize;
use shelf::ShelfError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable one-liner.
	Text,
	/// JSON object per flow (for scripting).
	Json,
}

/// Outcome of one completed flow.
#[derive(Debug, Serialize)]
pub struct FlowReport {
	pub flow: &'static str,
	/// Substring the result text was asserted against, when the flow
	/// asserts one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expected: Option<String>,
	/// Text the page's result element actually showed.
	pub result: String,
}

impl FlowReport {
	pub fn new(flow: &'static str, expected: Option<&str>, result: String) -> Self {
		Self {
			flow,
			expected: expected.map(str::to_string),
			result,
		}
	}

	pub fn print(&self, format: OutputFormat) {
		match format {
			OutputFormat::Text => println!("{}: {}", self.flow, self.result),
			OutputFormat::Json => match serde_json::to_string(self) {
				Ok(json) => println!("{json}"),
				Err(err) => eprintln!("error: could not serialize report: {err}"),
			},
		}
	}
}

pub fn print_error(err: &ShelfError, format: OutputFormat) {
	eprintln!("error: {err}");
	if format == OutputFormat::Json {
		println!(
			"{}",
			serde_json::json!({ "ok": false, "error": err.to_string() })
		);
	}
}
