use axum::body::Bytes;
use bank::{NewQuestion, Store};
use serde::de::DeserializeOwned;

use crate::error::AppError::{self, MalformedPayload, Unprocessable};

pub fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|_| MalformedPayload)
}

/// Pages start at 1. A missing page means the first one.
pub fn validate_page(page: Option<i64>) -> Result<usize, AppError> {
    match page {
        None => Ok(1),
        Some(page) if page >= 1 => usize::try_from(page).map_err(|_| MalformedPayload),
        Some(_) => Err(MalformedPayload),
    }
}

pub fn validate_new_question(store: &Store, question: &NewQuestion) -> Result<(), AppError> {
    let problems = question.problems();
    if !problems.is_empty() {
        return Err(Unprocessable(problems.join(", ")));
    }

    if store.category(question.category)?.is_none() {
        return Err(Unprocessable(format!(
            "category {} does not exist",
            question.category
        )));
    }

    Ok(())
}
