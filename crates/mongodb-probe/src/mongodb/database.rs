use async_trait::async_trait;
use mongodb::{
    bson::{doc, Document},
    error::Error,
    Database,
};

#[cfg(any(test, feature = "test-helpers"))]
use mockall::automock;

/// Abstract the MongoDB database methods the prober needs. This lets us mock a database
/// connection in tests. The automock attribute generates a struct called MockDatabaseTrait that
/// implements this trait. See https://docs.rs/mockall/latest/mockall/
#[cfg_attr(any(test, feature = "test-helpers"), automock)]
#[async_trait]
pub trait DatabaseTrait {
    /// Run the `ping` command, which does nothing except prove that a server answered.
    async fn ping(&self) -> Result<Document, Error>;
}

#[async_trait]
impl DatabaseTrait for Database {
    async fn ping(&self) -> Result<Document, Error> {
        Database::run_command(self, doc! { "ping": 1 }, None).await
    }
}
