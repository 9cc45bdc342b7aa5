use anyhow::Context;
use cucumber::World;
use shelf::BrowserSession;
use tokio::sync::OnceCell;

static SESSION: OnceCell<BrowserSession> = OnceCell::const_new();

/// Run-wide browser session, started on first use.
pub async fn session() -> anyhow::Result<&'static BrowserSession> {
	SESSION
		.get_or_try_init(|| async {
			let config = shelf_acceptance::live_config()
				.with_context(|| format!("{} is not set", shelf_acceptance::BASE_URL_VAR))?;
			Ok::<_, anyhow::Error>(BrowserSession::start(config).await?)
		})
		.await
}

/// The session for run-end teardown, if one was ever started.
pub fn session_handle() -> Option<&'static BrowserSession> {
	SESSION.get()
}

/// Scenario-scoped state: one step writes a name, a later step reads it.
#[derive(Debug, Default, World)]
#[world(init = Self::fresh)]
pub struct LibraryWorld {
	pub username: String,
	pub password: String,
	pub borrower_name: String,
	pub book_title: String,
}

impl LibraryWorld {
	/// Every scenario starts from an empty application database. A failed
	/// reset fails the scenario here, before any step can run against
	/// unknown state.
	async fn fresh() -> anyhow::Result<Self> {
		session().await?.reset_remote_state().await?;
		Ok(Self::default())
	}
}
