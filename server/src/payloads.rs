//! Request and response bodies of the HTTP API.
use std::collections::BTreeMap;

use bank::{Category, Question};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", alias = "search_term")]
    pub search_term: String,
}

/// `quiz_category` stays raw so [`bank::QuizScope`] can accept the loose
/// shapes clients send.
#[derive(Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<Value>,
}

pub type CategoryMap = BTreeMap<i64, String>;

#[derive(Serialize)]
pub struct Categories {
    pub success: bool,
    pub categories: CategoryMap,
}

#[derive(Serialize)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<i64>,
}

#[derive(Serialize)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

#[derive(Serialize)]
pub struct Created {
    pub success: bool,
    pub created: i64,
}

#[derive(Serialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i64,
}

/// `question` is `null` once the quiz has run out of questions.
#[derive(Serialize)]
pub struct QuizQuestion {
    pub success: bool,
    pub question: Option<Question>,
}

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories
        .into_iter()
        .map(|category| (category.id, category.label))
        .collect()
}
