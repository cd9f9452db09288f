//! Result aggregation: score all collections, merge, sort, truncate.

use crate::config::SearchConfig;
use crate::content::Catalog;

use super::SearchResult;
use super::score::score_item;

struct Scored {
    result: SearchResult,
    relevance: f64,
}

/// Run the scorer over the whole catalog and return the ranked matches.
///
/// A trimmed-empty query returns nothing at all: the palette never surfaces
/// "everything" as a default. Items are scanned pages first, then blog posts,
/// then projects; the sort is stable, so equal scores keep that order.
/// At most `config.limit` results come back, and the relevance number is
/// stripped before returning.
#[must_use]
pub fn search(catalog: &Catalog, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<Scored> = catalog
        .items()
        .filter_map(|item| {
            let relevance = score_item(&item, query, config);
            if relevance > 0.0 {
                Some(Scored {
                    result: SearchResult {
                        kind: item.kind,
                        title: item.title,
                        secondary_text: item.secondary_text,
                        url: item.url,
                        date: item.date,
                    },
                    relevance,
                })
            } else {
                None
            }
        })
        .collect();

    // Descending by relevance; sort_by is stable so ties keep scan order.
    scored.sort_by(|a, b| {
        b.relevance
            .partial_cmp(&a.relevance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(config.limit);

    scored.into_iter().map(|s| s.result).collect()
}
