//! Frequency-based ranking of result terms.
//!
//! Top-k selection uses one explicit total order: descending aggregate count,
//! with ties broken by ascending lexicographic order. Entries whose aggregate
//! count is zero are skipped during selection, not included and not treated
//! as a stop condition.

use std::cmp::Ordering;

use crate::ngram::FrequencyStore;

/// A term together with its aggregate count over the query window.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTerm {
    /// The term.
    pub term: String,
    /// Summed usage count over the aggregation window.
    pub count: f64,
}

/// Rank `terms` by their summed usage count over `[start_year, end_year]`.
///
/// The returned list is sorted by the documented total order: count
/// descending, then term ascending.
pub fn rank_by_total_count<I, S>(
    terms: I,
    store: &FrequencyStore,
    start_year: i32,
    end_year: i32,
) -> Vec<RankedTerm>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut ranked: Vec<RankedTerm> = terms
        .into_iter()
        .map(|term| {
            let term = term.into();
            let count = store.total_count(&term, start_year, end_year);
            RankedTerm { term, count }
        })
        .collect();
    ranked.sort_by(compare);
    ranked
}

/// Select up to `k` terms from a ranked list, skipping entries with a zero
/// aggregate count.
pub fn select_top_k(ranked: &[RankedTerm], k: usize) -> Vec<String> {
    ranked
        .iter()
        .filter(|entry| entry.count > 0.0)
        .take(k)
        .map(|entry| entry.term.clone())
        .collect()
}

fn compare(a: &RankedTerm, b: &RankedTerm) -> Ordering {
    b.count
        .partial_cmp(&a.count)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.term.cmp(&b.term))
}
