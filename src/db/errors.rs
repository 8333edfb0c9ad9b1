use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Query execution error: {0}")]
    Query(#[from] mongodb::error::Error),

    #[error("Invalid record identifier: {0}")]
    InvalidId(String),

    #[error("Store returned an unexpected identifier: {0}")]
    UnexpectedId(String),
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
