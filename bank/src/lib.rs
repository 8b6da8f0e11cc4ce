//! # Question Bank
//!
//! Trivia questions, their categories and the logic that picks the next quiz
//! question.
//!
//! ## Layout
//!
//! - [`models`]: typed records shared by the server and the loader
//! - [`scope`]: which slice of the bank a quiz draws from
//! - [`selector`]: non-repeating random pick from a candidate pool
//! - [`store`]: SQLite tables backing everything above
//!
//! ## Quiz Flow
//!
//! 1. Client sends its scope and the ids it has already been shown.
//! 2. Store fetches the candidate pool for that scope.
//! 3. Selector returns an unseen question, or [`selector::Selection::Exhausted`]
//!    once the pool has nothing left.
//! 4. Client appends the id and repeats. No session state lives on the server.
pub mod error;
pub mod models;
pub mod scope;
pub mod selector;
pub mod store;

pub use error::{ScopeError, StoreError};
pub use models::{Category, NewQuestion, Question};
pub use scope::QuizScope;
pub use selector::{Selection, select_question};
pub use store::Store;
