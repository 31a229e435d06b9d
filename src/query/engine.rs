//! The query engine: lookup, closure, intersection, ranking, formatting.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::graph::RelationGraph;
use crate::lexicon::Lexicon;
use crate::ngram::FrequencyStore;
use crate::query::ranking::{rank_by_total_count, select_top_k};
use crate::query::RelatedTermsQuery;

/// Answers related-term lookups over a relation graph, a lexicon, and a
/// frequency store.
///
/// All three stores are immutable snapshots injected at construction; the
/// engine never mutates them, so a shared engine is safe to query from
/// multiple threads. The query path is infallible: unknown words, empty word
/// lists, and degenerate year windows all degrade to empty results.
#[derive(Debug)]
pub struct QueryEngine {
    graph: RelationGraph,
    lexicon: Lexicon,
    frequency: FrequencyStore,
}

/// The ordered terms selected for a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedTermsResponse {
    terms: Vec<String>,
}

impl QueryEngine {
    /// Create an engine over immutable snapshots of the three stores.
    pub fn new(graph: RelationGraph, lexicon: Lexicon, frequency: FrequencyStore) -> Self {
        QueryEngine {
            graph,
            lexicon,
            frequency,
        }
    }

    /// Get the relation graph.
    pub fn graph(&self) -> &RelationGraph {
        &self.graph
    }

    /// Get the lexicon.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Get the frequency store.
    pub fn frequency(&self) -> &FrequencyStore {
        &self.frequency
    }

    /// Execute a related-terms query.
    ///
    /// Per query word: look up the synsets containing it, take the descendant
    /// closure of those nodes, and union the closure's synset contents. The
    /// result is the intersection of those per-word sets, lexicographically
    /// sorted when `k == 0` or frequency-ranked and cut to `k` entries when
    /// `k > 0`.
    pub fn execute(&self, query: &RelatedTermsQuery) -> RelatedTermsResponse {
        if query.words.is_empty() {
            return RelatedTermsResponse::default();
        }

        let mut word_sets = query.words.iter().map(|word| self.related_terms(word));
        // The iterator is non-empty here, so the first set always exists.
        let mut intersection = word_sets.next().unwrap_or_default();
        for set in word_sets {
            if intersection.is_empty() {
                break;
            }
            intersection.retain(|word| set.contains(word));
        }

        let terms = if query.k == 0 {
            let mut terms: Vec<String> = intersection.into_iter().collect();
            terms.sort_unstable();
            terms
        } else {
            let ranked = rank_by_total_count(
                intersection,
                &self.frequency,
                query.start_year,
                query.end_year,
            );
            select_top_k(&ranked, query.k)
        };
        RelatedTermsResponse { terms }
    }

    /// Execute a query and render the response in the bracketed text format.
    pub fn handle(&self, query: &RelatedTermsQuery) -> String {
        self.execute(query).to_string()
    }

    /// Return the full related-term set of a single word: the union of
    /// synset contents over the descendant closure of every node containing
    /// the word. Unknown words yield the empty set.
    pub fn related_terms(&self, word: &str) -> AHashSet<String> {
        match self.lexicon.nodes_containing(word) {
            Some(ids) => {
                let closure = self.graph.descendants_of_any(ids.iter().copied());
                self.lexicon.words_of_all(closure)
            }
            None => AHashSet::new(),
        }
    }

    /// Render the relative usage weight of each word over the window, one
    /// line per word: `word: {year=weight, ...}`. Words with no recorded data
    /// render an empty brace pair.
    pub fn usage_history(&self, words: &[String], start_year: i32, end_year: i32) -> String {
        let mut response = String::new();
        for word in words {
            let weights = self.frequency.weight_history(word, start_year, end_year);
            response.push_str(word);
            response.push_str(": {");
            let mut first = true;
            for (year, weight) in weights.iter() {
                if !first {
                    response.push_str(", ");
                }
                response.push_str(&format!("{year}={weight}"));
                first = false;
            }
            response.push_str("}\n");
        }
        response
    }
}

impl RelatedTermsResponse {
    /// The selected terms, in response order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Whether the response holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Consume the response, yielding the ordered terms.
    pub fn into_terms(self) -> Vec<String> {
        self.terms
    }
}

impl fmt::Display for RelatedTermsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.terms.join(", "))
    }
}
