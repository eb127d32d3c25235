//! Ordering of search results.

use super::finder::SearchResult;

/// Rank results by total station count, fewest first.
///
/// The sort is stable: results with equal counts keep the order they were
/// discovered in (direct routes in dataset order, then transfer pairs).
pub fn rank_results(mut results: Vec<SearchResult>) -> Vec<SearchResult> {
    results.sort_by_key(|r| r.total_stations);
    results
}
