//! # SQLite
//!
//! Disk-backed question bank.
//!
//! ## Requirements
//!
//! - Tens to low thousands of questions, a handful of categories
//! - Every quiz request reads one category (or everything) in full
//! - Writes are rare: create and delete from the admin view
//!
//! ## Implementation
//!
//! - Single connection behind a mutex in [`crate::state::AppState`]
//! - Lock is held for one query at a time, never across an await
//! - Schema is created on open, see [`bank::store`]
use bank::{Store, StoreError};
use tracing::info;

pub fn init_store(database_path: &str) -> Result<Store, StoreError> {
    let store = Store::open(database_path)?;

    info!(
        "Opened {database_path}: {} categories, {} questions",
        store.categories()?.len(),
        store.question_count()?
    );

    Ok(store)
}
