use serde::{Deserialize, Serialize};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: i64,
}

/// Question as submitted by a client, before the store assigns an id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: u8,
    pub category: i64,
}

impl NewQuestion {
    /// Checks the fields a store cannot enforce on its own. Category existence
    /// is left to the caller since it needs a lookup.
    pub fn problems(&self) -> Vec<&'static str> {
        let mut problems = Vec::new();

        if self.question.trim().is_empty() {
            problems.push("question must not be empty");
        }

        if self.answer.trim().is_empty() {
            problems.push("answer must not be empty");
        }

        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            problems.push("difficulty must be between 1 and 5");
        }

        problems
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "type")]
    pub label: String,
}
