//! Step definitions for the lending feature.

use cucumber::{given, then, when};
use shelf::{LEND_SUCCESS, expect_result_contains};
use shelf_acceptance::{BOOK_TITLE, BORROWER_NAME};

use crate::world::{LibraryWorld, session};

#[given("a borrower is registered")]
async fn a_borrower_is_registered(world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	session
		.library()
		.register_borrower(BORROWER_NAME)
		.await
		.expect("borrower registration flow");
	// Wait out the registration round trip before the next step navigates
	// away; the empty substring matches as soon as the result shows.
	expect_result_contains(session, "", session.wait())
		.await
		.expect("borrower registration result");
	world.borrower_name = BORROWER_NAME.to_string();
}

#[given("a book is available for borrowing")]
async fn a_book_is_available(world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	session
		.library()
		.register_book(BOOK_TITLE)
		.await
		.expect("book registration flow");
	expect_result_contains(session, "", session.wait())
		.await
		.expect("book registration result");
	world.book_title = BOOK_TITLE.to_string();
}

#[when("they try to check out the book")]
async fn they_check_out_the_book(world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	session
		.library()
		.lend_book(&world.borrower_name, &world.book_title)
		.await
		.expect("lend flow");
}

#[then("the system indicates success")]
async fn system_indicates_success(_world: &mut LibraryWorld) {
	let session = session().await.expect("browser session");
	expect_result_contains(session, LEND_SUCCESS, session.wait())
		.await
		.expect("lend result");
}
