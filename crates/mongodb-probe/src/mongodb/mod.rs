mod database;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use self::database::DatabaseTrait;

// MockDatabaseTrait is generated by automock when the test flag is active.
#[cfg(any(test, feature = "test-helpers"))]
pub use self::database::MockDatabaseTrait;
