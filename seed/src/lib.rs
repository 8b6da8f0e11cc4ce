//! # Question Bank Loader
//!
//! Fills a SQLite question bank from a JSON dump.
//!
//! ## Dump Format
//!
//! ```json
//! {
//!     "categories": [{ "id": 1, "type": "Science" }],
//!     "questions": [
//!         { "question": "...", "answer": "...", "difficulty": 3, "category": 1 }
//!     ]
//! }
//! ```
//!
//! ## Steps
//!
//! 1. Optionally wipe the existing bank.
//! 2. Upsert every category under its own id.
//! 3. Collapse stray whitespace in question and answer text.
//! 4. Skip questions that fail validation or point at a missing category.
//! 5. Insert the rest, reporting progress.
//!
//! Loading the same dump twice without `--reset` duplicates its questions.
use std::{collections::HashSet, path::Path};

use anyhow::{Context, Result};
use bank::Store;
use indicatif::{ProgressBar, ProgressStyle};

pub mod models;
pub mod utils;

use models::{Dump, Report};
use utils::{read_dump, rejection, tidy_question};

pub fn load_bank(database: &Path, dump_path: &Path, reset: bool) -> Result<Report> {
    let store = Store::open(database).with_context(|| format!("opening {}", database.display()))?;
    let dump = read_dump(dump_path)?;

    println!("Loaded Categories: {}", dump.categories.len());
    println!("Loaded Questions: {}\n", dump.questions.len());

    if reset {
        println!("Clearing existing bank");
        store.clear()?;
    }

    let report = load_dump(&store, dump)?;

    println!("\nCategories: {}", report.categories);
    println!("Inserted Questions: {}", report.inserted);
    println!("Skipped Questions: {}", report.skipped);

    println!("Question Verification: {}", store.question_count()?);

    Ok(report)
}

pub fn load_dump(store: &Store, dump: Dump) -> Result<Report> {
    for category in &dump.categories {
        store.put_category(category)?;
    }

    let categories: HashSet<i64> = store
        .categories()?
        .into_iter()
        .map(|category| category.id)
        .collect();

    let pb = ProgressBar::new(dump.questions.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )?
        .progress_chars("=> "),
    );

    let mut report = Report {
        categories: dump.categories.len(),
        ..Report::default()
    };

    for mut question in dump.questions {
        tidy_question(&mut question);

        match rejection(&question, &categories) {
            Some(reason) => {
                pb.println(format!("Skipping {:?}: {reason}", question.question));
                report.skipped += 1;
            }
            None => {
                store.insert_question(&question)?;
                report.inserted += 1;
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    Ok(report)
}
