//! Browser-driven acceptance harness for the "library" demo application.
//!
//! Three collaborating layers:
//!
//! - [`session`]: browser-process lifecycle (isolated profile directory,
//!   optional chromedriver spawn, optional proxy probing, teardown) and the
//!   per-scenario database reset against the app's `/flyway` endpoint.
//! - [`page`]: one operation per user-facing flow on `library.html`
//!   (registration, login, borrower/book registration, lending), driven
//!   through element ids with bounded waits instead of fixed sleeps.
//! - [`outcome`]: assertions over the page's result element.
//!
//! A scenario is a linear Given → When → Then sequence; any failure aborts
//! it immediately, and only [`ShelfError::Launch`] aborts the whole run.

pub mod config;
pub mod driver;
pub mod error;
pub mod outcome;
pub mod page;
pub mod profile;
pub mod proxy;
pub mod reset;
pub mod session;
pub mod wait;

pub use config::{ProxyConfig, SessionConfig};
pub use error::{Result, ShelfError};
pub use outcome::{ACCESS_GRANTED, LEND_SUCCESS, REGISTERED_OK, expect_result_contains};
pub use page::{LibraryPage, WidgetKind};
pub use session::BrowserSession;
pub use wait::WaitConfig;
