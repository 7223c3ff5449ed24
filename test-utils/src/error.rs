use thiserror::Error;

/// Errors raised while setting up a test context.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database, create a table or seed data.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to create the session store table.
    #[error("Failed to set up session store: {0}")]
    Session(String),
}
