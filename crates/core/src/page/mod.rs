//! Page interaction layer for `library.html`.
//!
//! One operation per user-facing flow. Every operation follows the same
//! shape: navigate, wait for the flow's first control (an explicit bounded
//! wait, never a sleep), fill inputs located by their fixed ids, submit.
//!
//! A lookup or input failure here is scenario-fatal and surfaces
//! immediately; the original suite swallowed lending-flow lookup errors and
//! reported false positives, which this layer deliberately does not do.

mod widget;

pub use widget::WidgetKind;

use thirtyfour::WebElement;
use tracing::info;

use crate::error::{Result, ShelfError};
use crate::session::BrowserSession;
use crate::wait;

/// Page the whole demo lives on.
pub const LIBRARY_PAGE: &str = "library.html";

/// Fixed element ids exposed by `library.html`.
pub mod ids {
	pub const REGISTER_USERNAME: &str = "register_username";
	pub const REGISTER_PASSWORD: &str = "register_password";
	pub const REGISTER_SUBMIT: &str = "register_submit";
	pub const LOGIN_USERNAME: &str = "login_username";
	pub const LOGIN_PASSWORD: &str = "login_password";
	pub const LOGIN_SUBMIT: &str = "login_submit";
	pub const REGISTER_BORROWER: &str = "register_borrower";
	pub const REGISTER_BORROWER_SUBMIT: &str = "register_borrower_submit";
	pub const REGISTER_BOOK: &str = "register_book";
	pub const REGISTER_BOOK_SUBMIT: &str = "register_book_submit";
	pub const LEND_BOOK: &str = "lend_book";
	pub const LEND_BORROWER: &str = "lend_borrower";
	pub const LEND_BOOK_SUBMIT: &str = "lend_book_submit";
	pub const RESULT: &str = "result";
}

/// Flows on the library page, borrowed from a live session.
pub struct LibraryPage<'a> {
	session: &'a BrowserSession,
}

impl<'a> LibraryPage<'a> {
	pub(crate) fn new(session: &'a BrowserSession) -> Self {
		Self { session }
	}

	pub async fn register_user(&self, username: &str, password: &str) -> Result<()> {
		info!(target = "shelf", %username, "register user");
		self.open(ids::REGISTER_USERNAME).await?;
		self.fill(ids::REGISTER_USERNAME, username).await?;
		self.fill(ids::REGISTER_PASSWORD, password).await?;
		self.submit(ids::REGISTER_SUBMIT).await
	}

	pub async fn login_user(&self, username: &str, password: &str) -> Result<()> {
		info!(target = "shelf", %username, "login user");
		self.open(ids::LOGIN_USERNAME).await?;
		self.fill(ids::LOGIN_USERNAME, username).await?;
		self.fill(ids::LOGIN_PASSWORD, password).await?;
		self.submit(ids::LOGIN_SUBMIT).await
	}

	pub async fn register_borrower(&self, name: &str) -> Result<()> {
		info!(target = "shelf", borrower = %name, "register borrower");
		self.open(ids::REGISTER_BORROWER).await?;
		self.fill(ids::REGISTER_BORROWER, name).await?;
		self.submit(ids::REGISTER_BORROWER_SUBMIT).await
	}

	pub async fn register_book(&self, title: &str) -> Result<()> {
		info!(target = "shelf", book = %title, "register book");
		self.open(ids::REGISTER_BOOK).await?;
		self.fill(ids::REGISTER_BOOK, title).await?;
		self.submit(ids::REGISTER_BOOK_SUBMIT).await
	}

	/// Checks a book out to a borrower.
	///
	/// The lending widgets are rendered either as plain text inputs with an
	/// autocomplete list or as `<select>` controls depending on the demo's
	/// configuration; each one is inspected at runtime and dispatched over
	/// [`WidgetKind`], with identical outcomes either way.
	pub async fn lend_book(&self, borrower_name: &str, book_title: &str) -> Result<()> {
		info!(
			target = "shelf",
			borrower = %borrower_name,
			book = %book_title,
			"lend book"
		);
		self.open(ids::LEND_BOOK).await?;
		widget::fill_widget(self.session, ids::LEND_BOOK, book_title).await?;
		widget::fill_widget(self.session, ids::LEND_BORROWER, borrower_name).await?;
		self.submit(ids::LEND_BOOK_SUBMIT).await
	}

	/// Navigates to the library page and waits for the flow's first
	/// control, which doubles as the page-interactive signal.
	async fn open(&self, first_control: &str) -> Result<()> {
		self.session.goto(LIBRARY_PAGE).await?;
		self.locate(first_control).await.map(|_| ())
	}

	async fn locate(&self, element_id: &str) -> Result<WebElement> {
		wait::wait_for_element(self.session.driver(), element_id, self.session.wait()).await
	}

	async fn fill(&self, element_id: &str, value: &str) -> Result<()> {
		let element = self.locate(element_id).await?;
		let enabled = element
			.is_enabled()
			.await
			.map_err(|err| ShelfError::interaction(element_id, err))?;
		if !enabled {
			return Err(ShelfError::interaction(element_id, "element is disabled"));
		}
		element
			.clear()
			.await
			.map_err(|err| ShelfError::interaction(element_id, err))?;
		element
			.send_keys(value)
			.await
			.map_err(|err| ShelfError::interaction(element_id, err))?;
		Ok(())
	}

	async fn submit(&self, element_id: &str) -> Result<()> {
		let element = self.locate(element_id).await?;
		element
			.click()
			.await
			.map_err(|err| ShelfError::interaction(element_id, err))
	}
}
