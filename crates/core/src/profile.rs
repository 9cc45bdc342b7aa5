use std::path::{Path, PathBuf};

use tracing::warn;
use uuid::Uuid;

use crate::error::Result;

/// Browser profile directory exclusively owned by one session.
///
/// Uniquely named so parallel runs on the same host can never collide, and
/// removed on teardown so no state leaks between runs.
#[derive(Debug)]
pub struct ProfileDir {
	path: PathBuf,
}

impl ProfileDir {
	pub fn create() -> Result<Self> {
		let path = std::env::temp_dir().join(format!("shelf-profile-{}", Uuid::new_v4()));
		std::fs::create_dir_all(&path)?;
		Ok(Self { path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Deletes the directory. Failure is a warning, not an error: later
	/// sessions get fresh directories either way.
	pub fn remove(self) {
		if let Err(err) = std::fs::remove_dir_all(&self.path) {
			warn!(
				target = "shelf",
				path = %self.path.display(),
				%err,
				"could not remove profile directory"
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn profiles_never_collide() {
		let a = ProfileDir::create().unwrap();
		let b = ProfileDir::create().unwrap();
		assert_ne!(a.path(), b.path());
		a.remove();
		b.remove();
	}

	#[test]
	fn remove_deletes_the_directory() {
		let profile = ProfileDir::create().unwrap();
		let path = profile.path().to_path_buf();
		assert!(path.is_dir());
		profile.remove();
		assert!(!path.exists());
	}
}
