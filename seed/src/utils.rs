use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use bank::NewQuestion;

use crate::models::Dump;

pub fn read_dump(path: &Path) -> Result<Dump> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
}

pub fn tidy_question(question: &mut NewQuestion) {
    question.question = collapse(&question.question);
    question.answer = collapse(&question.answer);
}

pub fn collapse(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Why a question cannot be loaded, if anything.
pub fn rejection(question: &NewQuestion, categories: &HashSet<i64>) -> Option<String> {
    let problems = question.problems();
    if !problems.is_empty() {
        return Some(problems.join(", "));
    }

    if !categories.contains(&question.category) {
        return Some(format!("unknown category {}", question.category));
    }

    None
}
