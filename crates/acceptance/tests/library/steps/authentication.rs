//! Step definitions for the authentication feature.

use cucumber::{given, then, when};
use shelf::{ACCESS_GRANTED, REGISTERED_OK, expect_result_contains};
use shelf_acceptance::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

use crate::world::{LibraryWorld, session};

#[given("I am not registered")]
async fn i_am_not_registered(world: &mut LibraryWorld) {
	// The database was reset before the scenario; just pick credentials.
	world.username = DEFAULT_USERNAME.to_string();
	world.password = DEFAULT_PASSWORD.to_string();
}

#[given("I am registered as a user")]
async fn i_am_registered(world: &mut LibraryWorld) {
	world.username = DEFAULT_USERNAME.to_string();
	world.password = DEFAULT_PASSWORD.to_string();

	let session = session().await.expect("browser session");
	session
		.library()
		.register_user(&world.username, &world.password)
		.await
		.expect("user registration flow");
	// Confirm the registration landed before the scenario builds on it.
	expect_result_contains(session, REGISTERED_OK, session.wait())
		.await
		.expect("registration result");
}

#[when("I register with a valid username and password")]
async fn i_register(world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	session
		.library()
		.register_user(&world.username, &world.password)
		.await
		.expect("user registration flow");
}

#[when("I login")]
async fn i_login(world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	session
		.library()
		.login_user(&world.username, &world.password)
		.await
		.expect("login flow");
}

#[then("it indicates I am successfully registered")]
async fn it_indicates_registered(_world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	expect_result_contains(session, REGISTERED_OK, session.wait())
		.await
		.expect("registration result");
}

#[then("the system allows secure access")]
async fn system_allows_access(_world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	expect_result_contains(session, ACCESS_GRANTED, session.wait())
		.await
		.expect("login result");
}
