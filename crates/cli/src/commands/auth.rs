//! Authentication flows: user registration and login.

use shelf::{ACCESS_GRANTED, BrowserSession, REGISTERED_OK, Result, expect_result_contains};

use crate::output::{FlowReport, OutputFormat};

pub async fn register_user(
	session: &BrowserSession,
	username: &str,
	password: &str,
	format: OutputFormat,
) -> Result<()> {
	session.library().register_user(username, password).await?;
	let text = expect_result_contains(session, REGISTERED_OK, session.wait()).await?;
	FlowReport::new("register-user", Some(REGISTERED_OK), text).print(format);
	Ok(())
}

pub async fn login(
	session: &BrowserSession,
	username: &str,
	password: &str,
	format: OutputFormat,
) -> Result<()> {
	session.library().login_user(username, password).await?;
	let text = expect_result_contains(session, ACCESS_GRANTED, session.wait()).await?;
	FlowReport::new("login", Some(ACCESS_GRANTED), text).print(format);
	Ok(())
}
