//! # Lexnet
//!
//! An in-memory query engine for multi-word related-term lookups over a
//! lexical relation graph, optionally ranked by historical usage frequency
//! from an n-grams corpus.
//!
//! ## Features
//!
//! - Cycle-safe reachability closures over a hypernym/hyponym relation graph
//! - Inverted word index over synset contents
//! - Sparse per-word, per-year frequency series with windowed aggregation
//! - Frequency-ranked top-k selection with a deterministic total order
//! - Lenient bulk load with structured diagnostics, strict infallible queries

pub mod error;
pub mod graph;
pub mod lexicon;
pub mod loader;
pub mod ngram;
pub mod query;

pub mod prelude {
    //! Convenience re-exports for typical usage.

    pub use crate::error::{LexnetError, Result};
    pub use crate::graph::RelationGraph;
    pub use crate::lexicon::Lexicon;
    pub use crate::loader::{
        LoadReport, LoadWarning, build_frequency_store, build_graph, build_lexicon,
    };
    pub use crate::ngram::{FrequencyStore, TimeSeries};
    pub use crate::query::{QueryEngine, RelatedTermsQuery, RelatedTermsResponse};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
