//! # Question Selector
//!
//! Picks the next quiz question from a candidate pool, skipping ids the
//! client has already been shown.
//!
//! ## Sampling
//!
//! - Draw a uniform index over the whole pool and keep it if unseen.
//! - Give up after [`MAX_DRAWS`] rejections, collect the unseen remainder and
//!   draw once from that instead.
//! - Either path is uniform over the remainder, so the combined result is too.
//!
//! ## Exhaustion
//!
//! Only previous ids that are actually in the pool count towards exhaustion.
//! A client switching categories mid-quiz may still send ids from the old
//! category, and those must neither end the quiz early nor keep it running
//! forever.
use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::models::Question;

pub const MAX_DRAWS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Next(&'a Question),
    Exhausted,
}

impl<'a> Selection<'a> {
    pub fn question(self) -> Option<&'a Question> {
        match self {
            Selection::Next(question) => Some(question),
            Selection::Exhausted => None,
        }
    }
}

pub fn select_question<'a, R: Rng>(
    pool: &'a [Question],
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Selection<'a> {
    let seen = pool
        .iter()
        .filter(|question| previous.contains(&question.id))
        .count();

    if seen >= pool.len() {
        return Selection::Exhausted;
    }

    for _ in 0..MAX_DRAWS {
        let candidate = &pool[rng.gen_range(0..pool.len())];

        if !previous.contains(&candidate.id) {
            return Selection::Next(candidate);
        }
    }

    let remaining: Vec<&Question> = pool
        .iter()
        .filter(|question| !previous.contains(&question.id))
        .collect();

    match remaining.choose(rng) {
        Some(question) => Selection::Next(*question),
        None => Selection::Exhausted,
    }
}
