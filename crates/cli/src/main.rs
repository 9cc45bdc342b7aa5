mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use tracing::error;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	let format = cli.format;
	if let Err(err) = commands::dispatch(cli).await {
		error!(target = "shelf", error = %err, "command failed");
		output::print_error(&err, format);
		// Launch failures mean nothing further can run; everything else
		// failed only this flow.
		std::process::exit(if err.is_fatal() { 2 } else { 1 });
	}
}
