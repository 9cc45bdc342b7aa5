//! Lending flows: borrower registration, book registration, checkout.

use shelf::{BrowserSession, LEND_SUCCESS, Result, expect_result_contains};

use crate::output::{FlowReport, OutputFormat};

pub async fn register_borrower(
	session: &BrowserSession,
	name: &str,
	format: OutputFormat,
) -> Result<()> {
	session.library().register_borrower(name).await?;
	let text = observed_result(session).await?;
	FlowReport::new("register-borrower", None, text).print(format);
	Ok(())
}

pub async fn register_book(
	session: &BrowserSession,
	title: &str,
	format: OutputFormat,
) -> Result<()> {
	session.library().register_book(title).await?;
	let text = observed_result(session).await?;
	FlowReport::new("register-book", None, text).print(format);
	Ok(())
}

pub async fn lend(
	session: &BrowserSession,
	borrower: &str,
	book: &str,
	format: OutputFormat,
) -> Result<()> {
	session.library().lend_book(borrower, book).await?;
	let text = expect_result_contains(session, LEND_SUCCESS, session.wait()).await?;
	FlowReport::new("lend", Some(LEND_SUCCESS), text).print(format);
	Ok(())
}

/// Waits for the result element and reports whatever it says; borrower and
/// book registration have no fixed success marker to assert against.
async fn observed_result(session: &BrowserSession) -> Result<String> {
	expect_result_contains(session, "", session.wait()).await
}
