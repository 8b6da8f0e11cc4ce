//! # Quiz Scope
//!
//! Clients send the category they picked as `{ "type": ..., "id": ... }`.
//! The "all" choice arrives as `type: "click"` with `id: 0`, and some clients
//! send the id as a string, so the payload stays raw JSON until parsed here.
use serde_json::Value;

use crate::error::ScopeError;

const ALL_TYPES: [&str; 2] = ["click", "all"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

impl QuizScope {
    pub fn from_payload(payload: Option<&Value>) -> Result<Self, ScopeError> {
        let object = match payload {
            None | Some(Value::Null) => return Err(ScopeError::Missing),
            Some(Value::Object(object)) => object,
            Some(_) => return Err(ScopeError::NotAnObject),
        };

        let is_all_type = object
            .get("type")
            .and_then(Value::as_str)
            .is_some_and(|kind| ALL_TYPES.iter().any(|all| kind.eq_ignore_ascii_case(all)));

        if is_all_type {
            return Ok(QuizScope::All);
        }

        match parse_id(object.get("id"))? {
            0 => Ok(QuizScope::All),
            id => Ok(QuizScope::Category(id)),
        }
    }

    pub fn category_id(&self) -> Option<i64> {
        match self {
            QuizScope::All => None,
            QuizScope::Category(id) => Some(*id),
        }
    }
}

fn parse_id(raw: Option<&Value>) -> Result<i64, ScopeError> {
    let id = match raw {
        Some(Value::Number(number)) => number
            .as_i64()
            .ok_or_else(|| ScopeError::InvalidId(number.to_string()))?,
        Some(Value::String(text)) => text
            .trim()
            .parse()
            .map_err(|_| ScopeError::InvalidId(text.clone()))?,
        Some(other) => return Err(ScopeError::InvalidId(other.to_string())),
        None => return Err(ScopeError::InvalidId("missing".to_string())),
    };

    if id < 0 {
        return Err(ScopeError::InvalidId(id.to_string()));
    }

    Ok(id)
}
