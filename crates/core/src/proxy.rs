use std::time::Duration;

use tokio::net::TcpStream;
use tracing::debug;

/// Checks whether a proxy at `address` (`host:port`) accepts connections.
///
/// Bounded by `timeout`; an unreachable or slow proxy means the browser
/// launches unproxied rather than the launch stalling.
pub async fn probe(address: &str, timeout: Duration) -> bool {
	match tokio::time::timeout(timeout, TcpStream::connect(address)).await {
		Ok(Ok(_)) => {
			debug!(target = "shelf", %address, "proxy reachable");
			true
		}
		Ok(Err(err)) => {
			debug!(target = "shelf", %address, %err, "proxy unreachable");
			false
		}
		Err(_) => {
			debug!(target = "shelf", %address, ?timeout, "proxy probe timed out");
			false
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::Instant;

	use tokio::net::TcpListener;

	use super::*;

	#[tokio::test]
	async fn probe_succeeds_against_listening_socket() {
		let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap().to_string();
		assert!(probe(&addr, Duration::from_secs(1)).await);
	}

	#[tokio::test]
	async fn probe_fails_against_closed_port() {
		// Port 1 is essentially never listening on a test host.
		assert!(!probe("127.0.0.1:1", Duration::from_secs(1)).await);
	}

	#[tokio::test]
	async fn probe_respects_its_timeout_bound() {
		let start = Instant::now();
		let _ = probe("203.0.113.1:3128", Duration::from_millis(100)).await;
		assert!(start.elapsed() < Duration::from_secs(2));
	}
}
