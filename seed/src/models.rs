use bank::{Category, NewQuestion};
use serde::Deserialize;

/// JSON dump of a question bank.
///
/// Categories carry their ids so questions can reference them before the
/// store has seen either.
#[derive(Deserialize)]
pub struct Dump {
    pub categories: Vec<Category>,
    pub questions: Vec<NewQuestion>,
}

#[derive(Debug, Default, PartialEq)]
pub struct Report {
    pub categories: usize,
    pub inserted: usize,
    pub skipped: usize,
}
