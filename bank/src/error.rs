use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug, PartialEq)]
pub enum ScopeError {
    #[error("Missing quiz category")]
    Missing,

    #[error("Quiz category must be an object with type and id")]
    NotAnObject,

    #[error("Invalid category id: {0}")]
    InvalidId(String),
}
