//! Relevance-ranked search over the content catalog.
//!
//! Stateless by design: every query rescans the three collections and ranks
//! from scratch. There is no persistent index and nothing to invalidate.

use serde::Serialize;

use crate::content::ItemKind;

pub mod aggregate;
pub mod score;

pub use aggregate::search;
pub use score::{score, score_item};

/// A ranked match. The relevance score used for ordering is internal and
/// already stripped; callers only see the navigable shape.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub kind: ItemKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_text: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
