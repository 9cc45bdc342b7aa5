mod auth;
mod lending;
mod reset;
mod smoke;

use shelf::{BrowserSession, Result};
use tracing::warn;

use crate::cli::{Cli, Commands};

pub async fn dispatch(cli: Cli) -> Result<()> {
	let format = cli.format;
	let config = cli.session.to_config();

	// Reset talks straight to the app over HTTP; no browser needed.
	if matches!(cli.command, Commands::Reset) {
		return reset::execute(&config.base_url, format).await;
	}

	let session = BrowserSession::start(config).await?;
	if cli.reset {
		if let Err(err) = session.reset_remote_state().await {
			teardown(&session).await;
			return Err(err);
		}
	}

	let outcome = run(&cli.command, &session, format).await;
	teardown(&session).await;
	outcome
}

async fn run(
	command: &Commands,
	session: &BrowserSession,
	format: crate::output::OutputFormat,
) -> Result<()> {
	match command {
		Commands::RegisterUser { username, password } => {
			auth::register_user(session, username, password, format).await
		}
		Commands::Login { username, password } => {
			auth::login(session, username, password, format).await
		}
		Commands::RegisterBorrower { name } => {
			lending::register_borrower(session, name, format).await
		}
		Commands::RegisterBook { title } => lending::register_book(session, title, format).await,
		Commands::Lend { borrower, book } => lending::lend(session, borrower, book, format).await,
		Commands::Smoke => smoke::execute(session, format).await,
		// Handled in dispatch before the session exists.
		Commands::Reset => Ok(()),
	}
}

async fn teardown(session: &BrowserSession) {
	if let Err(err) = session.close().await {
		warn!(target = "shelf", %err, "session teardown failed");
	}
}
