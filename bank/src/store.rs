//! # SQLite
//!
//! Relational home of the question bank.
//!
//! ## Schema
//!
//! - `categories`: id, type (display label)
//! - `questions`: id, question, answer, difficulty, category
//! - `questions.category` references `categories.id`, indexed for scoped
//!   quiz lookups
//!
//! ## Notes
//!
//! - Ids are `INTEGER PRIMARY KEY AUTOINCREMENT`, so a deleted id is never
//!   handed out again and clients can keep old ids in their quiz history.
//! - `LIKE` is case-insensitive for ASCII in SQLite, which is what search wants.
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};

use crate::{
    error::StoreError,
    models::{Category, NewQuestion, Question},
    scope::QuizScope,
};

const SCHEMA: &str = r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        type TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS questions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        difficulty INTEGER NOT NULL,
        category INTEGER NOT NULL REFERENCES categories(id)
    );

    CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;

const QUESTION_COLUMNS: &str = "id, question, answer, difficulty, category";

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(SCHEMA)?;

        Ok(Self { conn })
    }

    pub fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, type FROM categories ORDER BY id")?;

        let categories = stmt
            .query_map([], category_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(categories)
    }

    pub fn category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        let category = self
            .conn
            .query_row(
                "SELECT id, type FROM categories WHERE id = ?1",
                params![id],
                category_from_row,
            )
            .optional()?;

        Ok(category)
    }

    pub fn insert_category(&self, label: &str) -> Result<i64, StoreError> {
        self.conn
            .execute("INSERT INTO categories (type) VALUES (?1)", params![label])?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Inserts a category under a fixed id, replacing the label if it exists.
    pub fn put_category(&self, category: &Category) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO categories (id, type) VALUES (?1, ?2)
             ON CONFLICT(id) DO UPDATE SET type = excluded.type",
            params![category.id, category.label],
        )?;

        Ok(())
    }

    /// Candidate pool for a quiz scope.
    pub fn questions(&self, scope: QuizScope) -> Result<Vec<Question>, StoreError> {
        match scope {
            QuizScope::All => self.query_questions(
                &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id"),
                params![],
            ),
            QuizScope::Category(category) => self.query_questions(
                &format!(
                    "SELECT {QUESTION_COLUMNS} FROM questions WHERE category = ?1 ORDER BY id"
                ),
                params![category],
            ),
        }
    }

    /// One page of all questions, 1-based, along with the total count.
    pub fn questions_page(
        &self,
        page: usize,
        per_page: usize,
    ) -> Result<(Vec<Question>, usize), StoreError> {
        let total = self.question_count()?;

        // Pages whose offset cannot be expressed lie past the end.
        let offset = page
            .saturating_sub(1)
            .checked_mul(per_page)
            .and_then(|offset| i64::try_from(offset).ok());
        let (Some(offset), Ok(limit)) = (offset, i64::try_from(per_page)) else {
            return Ok((Vec::new(), total));
        };

        let questions = self.query_questions(
            &format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY id LIMIT ?1 OFFSET ?2"),
            params![limit, offset],
        )?;

        Ok((questions, total))
    }

    pub fn question_count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))?;

        Ok(count as usize)
    }

    pub fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let pattern = format!("%{}%", escape_like(term));

        self.query_questions(
            &format!(
                "SELECT {QUESTION_COLUMNS} FROM questions
                 WHERE question LIKE ?1 ESCAPE '\\' ORDER BY id"
            ),
            params![pattern],
        )
    }

    pub fn insert_question(&self, question: &NewQuestion) -> Result<i64, StoreError> {
        self.conn.execute(
            "INSERT INTO questions (question, answer, difficulty, category)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                question.question,
                question.answer,
                question.difficulty,
                question.category
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Returns whether a question with this id existed.
    pub fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM questions WHERE id = ?1", params![id])?;

        Ok(removed > 0)
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch("DELETE FROM questions; DELETE FROM categories;")?;

        Ok(())
    }

    fn query_questions(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Question>, StoreError> {
        let mut stmt = self.conn.prepare(sql)?;

        let questions = stmt
            .query_map(params, question_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(questions)
    }
}

fn question_from_row(row: &Row) -> rusqlite::Result<Question> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        difficulty: row.get(3)?,
        category: row.get(4)?,
    })
}

fn category_from_row(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        label: row.get(1)?,
    })
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }

    escaped
}
