//! Runtime dispatch over the lending form's two widget variants.

use std::time::{Duration, Instant};

use thirtyfour::By;
use thirtyfour::components::SelectElement;
use tracing::debug;

use crate::error::{Result, ShelfError};
use crate::session::BrowserSession;
use crate::wait;

/// How long a typed value may take to surface an autocomplete suggestion.
/// Suggestions are optional; this window only bounds how long we look.
const SUGGESTION_WINDOW: Duration = Duration::from_secs(1);
const SUGGESTION_POLL: Duration = Duration::from_millis(100);

/// The closed set of input widgets the lending form renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
	/// Plain text input, possibly backed by an autocomplete list.
	Text,
	/// `<select>` control chosen by visible label.
	Select,
}

impl WidgetKind {
	/// Resolves the widget kind from the element's tag name, once per call.
	pub fn from_tag(tag: &str) -> Self {
		if tag.eq_ignore_ascii_case("select") {
			Self::Select
		} else {
			Self::Text
		}
	}
}

/// Sets `value` on the widget with id `element_id`, whichever variant the
/// page rendered. Lookup and input failures surface as errors; they are
/// never swallowed.
pub(crate) async fn fill_widget(
	session: &BrowserSession,
	element_id: &str,
	value: &str,
) -> Result<()> {
	let element = wait::wait_for_element(session.driver(), element_id, session.wait()).await?;
	let tag = element
		.tag_name()
		.await
		.map_err(|err| ShelfError::interaction(element_id, err))?;
	let kind = WidgetKind::from_tag(&tag);
	debug!(target = "shelf", %element_id, ?kind, "filling lending widget");

	match kind {
		WidgetKind::Select => {
			let select = SelectElement::new(&element)
				.await
				.map_err(|err| ShelfError::interaction(element_id, err))?;
			select
				.select_by_exact_text(value)
				.await
				.map_err(|err| ShelfError::interaction(element_id, err))?;
		}
		WidgetKind::Text => {
			element
				.clear()
				.await
				.map_err(|err| ShelfError::interaction(element_id, err))?;
			element
				.send_keys(value)
				.await
				.map_err(|err| ShelfError::interaction(element_id, err))?;
			pick_suggestion(session, element_id, value).await?;
		}
	}

	Ok(())
}

/// Clicks the first autocomplete suggestion matching `value` if one shows
/// up within the bounded window. No suggestion is fine: the typed text
/// stands on its own.
async fn pick_suggestion(session: &BrowserSession, element_id: &str, value: &str) -> Result<()> {
	let locator = format!("//li[contains(text(), '{value}')]");
	let deadline = Instant::now() + SUGGESTION_WINDOW;

	loop {
		let matches = session
			.driver()
			.find_all(By::XPath(locator.as_str()))
			.await
			.map_err(|err| ShelfError::interaction(element_id, err))?;

		if let Some(suggestion) = matches.into_iter().next() {
			debug!(target = "shelf", %element_id, %value, "picking autocomplete suggestion");
			return suggestion
				.click()
				.await
				.map_err(|err| ShelfError::interaction(element_id, err));
		}

		if Instant::now() >= deadline {
			return Ok(());
		}
		tokio::time::sleep(SUGGESTION_POLL).await;
	}
}
