use std::io;

use mongodb::{
    bson::{doc, Document},
    error::Error,
};

use super::MockDatabaseTrait;

/// The reply a healthy server sends to `{ ping: 1 }`.
pub fn ok_reply() -> Document {
    doc! { "ok": 1.0 }
}

/// A driver error that looks like the one produced when no server could be reached.
pub fn unreachable_error(message: &str) -> Error {
    io::Error::new(io::ErrorKind::ConnectionRefused, message.to_owned()).into()
}

/// Mocks a database that answers every ping.
pub fn mock_healthy_database() -> MockDatabaseTrait {
    let mut db = MockDatabaseTrait::new();
    db.expect_ping().returning(|| Ok(ok_reply()));
    db
}

/// Mocks a database whose pings fail with the given message.
pub fn mock_unreachable_database(message: &'static str) -> MockDatabaseTrait {
    let mut db = MockDatabaseTrait::new();
    db.expect_ping()
        .returning(move || Err(unreachable_error(message)));
    db
}
