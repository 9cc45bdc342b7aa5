//! Built-in end-to-end scenarios, mirroring the acceptance suite.

use shelf::{
	ACCESS_GRANTED, BrowserSession, LEND_SUCCESS, REGISTERED_OK, Result, expect_result_contains,
};

use crate::output::{FlowReport, OutputFormat};

const USERNAME: &str = "alice";
const PASSWORD: &str = "asdfkljhasdfishdfksaljdfh";
const BORROWER: &str = "some borrower";
const BOOK: &str = "some book";

pub async fn execute(session: &BrowserSession, format: OutputFormat) -> Result<()> {
	let page = session.library();
	let wait = session.wait();

	// Scenario: register a user, then log in with the same credentials.
	session.reset_remote_state().await?;
	page.register_user(USERNAME, PASSWORD).await?;
	let text = expect_result_contains(session, REGISTERED_OK, wait).await?;
	FlowReport::new("smoke/register-user", Some(REGISTERED_OK), text).print(format);

	page.login_user(USERNAME, PASSWORD).await?;
	let text = expect_result_contains(session, ACCESS_GRANTED, wait).await?;
	FlowReport::new("smoke/login", Some(ACCESS_GRANTED), text).print(format);

	// Scenario: register a borrower and a book, then check the book out.
	session.reset_remote_state().await?;
	page.register_borrower(BORROWER).await?;
	page.register_book(BOOK).await?;
	page.lend_book(BORROWER, BOOK).await?;
	let text = expect_result_contains(session, LEND_SUCCESS, wait).await?;
	FlowReport::new("smoke/lend", Some(LEND_SUCCESS), text).print(format);

	Ok(())
}
