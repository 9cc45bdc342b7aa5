//! Reset-endpoint behavior against a local stand-in for the demo app.

use std::net::SocketAddr;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use url::Url;

use shelf::ShelfError;
use shelf::reset::reset_remote_state;

async fn serve(app: Router) -> SocketAddr {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, app).await.unwrap();
	});
	addr
}

#[tokio::test]
async fn reset_succeeds_on_2xx() {
	let addr = serve(Router::new().route("/demo/flyway", get(|| async { "reset ok" }))).await;
	let base = Url::parse(&format!("http://{addr}/demo")).unwrap();
	let http = reqwest::Client::new();

	reset_remote_state(&http, &base).await.unwrap();
}

#[tokio::test]
async fn reset_is_idempotent_at_the_client() {
	let addr = serve(Router::new().route("/demo/flyway", get(|| async { "reset ok" }))).await;
	let base = Url::parse(&format!("http://{addr}/demo")).unwrap();
	let http = reqwest::Client::new();

	reset_remote_state(&http, &base).await.unwrap();
	reset_remote_state(&http, &base).await.unwrap();
}

#[tokio::test]
async fn reset_fails_as_precondition_on_5xx() {
	let addr = serve(Router::new().route(
		"/demo/flyway",
		get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "migration failed") }),
	))
	.await;
	let base = Url::parse(&format!("http://{addr}/demo")).unwrap();
	let http = reqwest::Client::new();

	match reset_remote_state(&http, &base).await {
		Err(ShelfError::Precondition { url, detail }) => {
			assert!(url.ends_with("/demo/flyway"), "{url}");
			assert!(detail.contains("500"), "{detail}");
		}
		other => panic!("expected precondition failure, got {other:?}"),
	}
}

#[tokio::test]
async fn reset_fails_as_precondition_when_unreachable() {
	// Nothing listens here; the connect error must surface as a
	// precondition failure, not silently pass.
	let base = Url::parse("http://127.0.0.1:1/demo").unwrap();
	let http = reqwest::Client::new();

	match reset_remote_state(&http, &base).await {
		Err(ShelfError::Precondition { .. }) => {}
		other => panic!("expected precondition failure, got {other:?}"),
	}
}
