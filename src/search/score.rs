//! Relevance scoring heuristic.
//!
//! One field against one query, case-insensitive, first matching rule wins:
//!
//! | rule            | score              |
//! |-----------------|--------------------|
//! | exact equality  | 100                |
//! | prefix          | 80                 |
//! | whole word      | 60                 |
//! | substring       | 40                 |
//! | subsequence     | 20 + chars matched |
//! | no match        | 0                  |
//!
//! This is deliberately not an IR-grade ranker (no TF-IDF, no stemming); the
//! corpus is a few dozen items and the goal is instant "good enough"
//! filtering. The subsequence rule is loose for very short queries: a couple
//! of scattered characters match almost any text and score nonzero nearly
//! everywhere. That looseness is intentional.

use crate::config::SearchConfig;
use crate::content::SearchableItem;

pub const SCORE_EXACT: u32 = 100;
pub const SCORE_PREFIX: u32 = 80;
pub const SCORE_WORD: u32 = 60;
pub const SCORE_SUBSTRING: u32 = 40;
pub const SCORE_FUZZY_BASE: u32 = 20;

/// Score one text field against a query. Deterministic, no side effects.
///
/// Empty text never matches. Callers are expected to guard empty queries
/// before scoring; see [`super::search`].
#[must_use]
pub fn score(text: &str, query: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }

    let text = text.to_lowercase();
    let query = query.to_lowercase();

    if text == query {
        return SCORE_EXACT;
    }
    if text.starts_with(&query) {
        return SCORE_PREFIX;
    }
    if contains_whole_word(&text, &query) {
        return SCORE_WORD;
    }
    if text.contains(&query) {
        return SCORE_SUBSTRING;
    }
    subsequence_score(&text, &query)
}

/// Combine per-field scores into one relevance number, applying the field
/// weights: full for the title, discounted for description/excerpt, halved
/// for tags. Returns 0.0 when nothing matches; the aggregator drops those
/// items entirely.
#[must_use]
pub fn score_item(item: &SearchableItem, query: &str, config: &SearchConfig) -> f64 {
    let title_score = f64::from(score(&item.title, query));

    let secondary_score = item
        .secondary_text
        .as_deref()
        .map_or(0.0, |text| f64::from(score(text, query)));

    let tag_score = item
        .tags
        .iter()
        .map(|tag| f64::from(score(tag, query)))
        .fold(0.0, f64::max);

    title_score
        .max(secondary_score * config.secondary_weight)
        .max(tag_score * config.tag_weight)
}

/// Whole-word containment: the query appears bounded by non-alphanumeric
/// characters or string edges on both sides.
fn contains_whole_word(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = text[from..].find(query) {
        let begin = from + offset;
        let end = begin + query.len();

        let bounded_left = text[..begin]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let bounded_right = text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric());

        if bounded_left && bounded_right {
            return true;
        }

        // Advance past the first char of this match to find overlapping ones.
        match text[begin..].chars().next() {
            Some(c) => from = begin + c.len_utf8(),
            None => break,
        }
    }
    false
}

/// Greedy left-to-right subsequence match. If every query character is
/// consumed, the score is the fuzzy base plus one per matched character;
/// otherwise the field does not match at all.
fn subsequence_score(text: &str, query: &str) -> u32 {
    let mut matched = 0u32;
    let mut remaining = query.chars().peekable();

    for c in text.chars() {
        match remaining.peek() {
            Some(&next) if next == c => {
                remaining.next();
                matched += 1;
            }
            Some(_) => {}
            None => break,
        }
    }

    if remaining.peek().is_none() {
        SCORE_FUZZY_BASE + matched
    } else {
        0
    }
}
