pub mod authentication;
pub mod librarian;
