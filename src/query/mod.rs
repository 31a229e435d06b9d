//! Related-term queries and the engine that answers them.

pub mod engine;
pub mod ranking;

pub use self::engine::{QueryEngine, RelatedTermsResponse};
pub use self::ranking::{RankedTerm, rank_by_total_count, select_top_k};

use serde::{Deserialize, Serialize};

/// Default start of the aggregation window when a caller leaves it
/// unspecified.
pub const DEFAULT_START_YEAR: i32 = 1900;

/// Default end of the aggregation window when a caller leaves it
/// unspecified.
pub const DEFAULT_END_YEAR: i32 = 2020;

/// A related-terms lookup request.
///
/// `start_year` may exceed `end_year`; the window is then empty and every
/// aggregate count is zero. `k == 0` requests the full result set, `k > 0`
/// at most `k` frequency-ranked entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTermsQuery {
    /// The query words whose related-term sets are intersected.
    pub words: Vec<String>,
    /// Inclusive start of the frequency aggregation window.
    pub start_year: i32,
    /// Inclusive end of the frequency aggregation window.
    pub end_year: i32,
    /// Number of top entries to select; zero selects everything.
    pub k: usize,
}

impl RelatedTermsQuery {
    /// Create a query over `words` with the default window and `k = 0`.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RelatedTermsQuery {
            words: words.into_iter().map(Into::into).collect(),
            start_year: DEFAULT_START_YEAR,
            end_year: DEFAULT_END_YEAR,
            k: 0,
        }
    }

    /// Set the aggregation window, inclusive of both ends.
    pub fn with_window(mut self, start_year: i32, end_year: i32) -> Self {
        self.start_year = start_year;
        self.end_year = end_year;
        self
    }

    /// Set the number of top entries to select.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }
}

impl Default for RelatedTermsQuery {
    fn default() -> Self {
        RelatedTermsQuery::new(Vec::<String>::new())
    }
}
