//! Builders for the graph, lexicon, and frequency store from tabular records.
//!
//! Each builder consumes an iterator of record lines and returns an immutable
//! snapshot. Record formats:
//!
//! - synset content: `id,word1 word2 word3[,gloss]` — fields after the word
//!   list are ignored
//! - relation edges: `parentId,childId1,childId2,...`
//! - word counts: `word<TAB>year<TAB>count`
//! - corpus totals: `year,totalCount[,...]`
//!
//! Malformed records are fatal ([`LexnetError::Parse`]): the engine never
//! serves queries over data it could not interpret. Edges it can interpret
//! but not apply (dangling references, duplicates) are reported in the
//! returned [`LoadReport`] and skipped, so one bad edge never prevents the
//! rest of the graph from loading.

use std::fs;
use std::path::Path;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LexnetError, Result};
use crate::graph::RelationGraph;
use crate::lexicon::Lexicon;
use crate::ngram::{FrequencyStore, TimeSeries};

/// A non-fatal problem encountered while loading relation edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadWarning {
    /// An edge named a node id that was not present; the edge was skipped.
    InvalidReference {
        /// Parent endpoint of the skipped edge.
        parent: u32,
        /// Child endpoint of the skipped edge.
        child: u32,
    },
    /// An edge appeared more than once; later occurrences were ignored.
    DuplicateEdge {
        /// Parent endpoint of the repeated edge.
        parent: u32,
        /// Child endpoint of the repeated edge.
        child: u32,
    },
}

/// Structured diagnostics returned by the graph load step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    /// Number of nodes in the loaded graph.
    pub nodes_loaded: usize,
    /// Number of distinct edges in the loaded graph.
    pub edges_loaded: u64,
    /// Records that were skipped rather than applied.
    pub warnings: Vec<LoadWarning>,
}

/// Build a [`Lexicon`] from synset content records.
pub fn build_lexicon<I, S>(records: I) -> Result<Lexicon>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut contents: AHashMap<u32, AHashSet<String>> = AHashMap::new();
    for record in records {
        let record = record.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        let mut fields = record.splitn(3, ',');
        let id = parse_id(fields.next().unwrap_or_default(), record)?;
        let words = fields.next().ok_or_else(|| {
            LexnetError::parse(format!("synset record '{record}' has no word list"))
        })?;
        let word_set: AHashSet<String> = words
            .split_whitespace()
            .map(|word| word.to_string())
            .collect();
        contents.insert(id, word_set);
    }
    Ok(Lexicon::new(contents))
}

/// Build a [`RelationGraph`] from edge records, returning the graph together
/// with a [`LoadReport`] of skipped records.
///
/// Node ids named by a record are added before its edges, so a well-formed
/// record never dangles; the report still captures duplicates and any edge
/// the graph rejects.
pub fn build_graph<I, S>(records: I) -> Result<(RelationGraph, LoadReport)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = RelationGraph::new();
    let mut warnings = Vec::new();
    for record in records {
        let record = record.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        let mut fields = record.split(',');
        let parent = parse_id(fields.next().unwrap_or_default(), record)?;
        graph.add_node(parent);
        for field in fields {
            let child = parse_id(field, record)?;
            graph.add_node(child);
            match graph.add_edge(parent, child) {
                Ok(true) => {}
                Ok(false) => {
                    warn!(parent, child, "duplicate edge ignored");
                    warnings.push(LoadWarning::DuplicateEdge { parent, child });
                }
                Err(LexnetError::InvalidReference { parent, child }) => {
                    warn!(parent, child, "dangling edge skipped");
                    warnings.push(LoadWarning::InvalidReference { parent, child });
                }
                Err(other) => return Err(other),
            }
        }
    }
    let report = LoadReport {
        nodes_loaded: graph.node_count(),
        edges_loaded: graph.edge_count(),
        warnings,
    };
    Ok((graph, report))
}

/// Build a [`FrequencyStore`] from per-word count records and corpus total
/// records.
pub fn build_frequency_store<I, J, S, T>(word_records: I, total_records: J) -> Result<FrequencyStore>
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut words: AHashMap<String, TimeSeries> = AHashMap::new();
    for record in word_records {
        let record = record.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        let fields: Vec<&str> = record.split('\t').collect();
        if fields.len() != 3 {
            return Err(LexnetError::parse(format!(
                "word count record '{record}' must have word, year, and count fields"
            )));
        }
        let year = parse_year(fields[1], record)?;
        let count = parse_count(fields[2], record)?;
        words
            .entry(fields[0].to_string())
            .or_default()
            .insert(year, count);
    }

    let mut totals = TimeSeries::new();
    for record in total_records {
        let record = record.as_ref().trim();
        if record.is_empty() {
            continue;
        }
        let mut fields = record.split(',');
        let year = parse_year(fields.next().unwrap_or_default(), record)?;
        let count = parse_count(
            fields.next().ok_or_else(|| {
                LexnetError::parse(format!("total count record '{record}' has no count field"))
            })?,
            record,
        )?;
        totals.insert(year, count);
    }

    Ok(FrequencyStore::new(words, totals))
}

/// Read synset content records from a file and build a [`Lexicon`].
pub fn lexicon_from_path<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let data = fs::read_to_string(path)?;
    build_lexicon(data.lines())
}

/// Read edge records from a file and build a [`RelationGraph`].
pub fn graph_from_path<P: AsRef<Path>>(path: P) -> Result<(RelationGraph, LoadReport)> {
    let data = fs::read_to_string(path)?;
    build_graph(data.lines())
}

/// Read word count and corpus total records from files and build a
/// [`FrequencyStore`].
pub fn frequency_store_from_path<P: AsRef<Path>>(
    words_path: P,
    totals_path: P,
) -> Result<FrequencyStore> {
    let word_data = fs::read_to_string(words_path)?;
    let total_data = fs::read_to_string(totals_path)?;
    build_frequency_store(word_data.lines(), total_data.lines())
}

fn parse_id(field: &str, record: &str) -> Result<u32> {
    field
        .trim()
        .parse::<u32>()
        .map_err(|_| LexnetError::parse(format!("invalid synset id '{field}' in record '{record}'")))
}

fn parse_year(field: &str, record: &str) -> Result<i32> {
    field
        .trim()
        .parse::<i32>()
        .map_err(|_| LexnetError::parse(format!("invalid year '{field}' in record '{record}'")))
}

fn parse_count(field: &str, record: &str) -> Result<f64> {
    let count = field
        .trim()
        .parse::<f64>()
        .map_err(|_| LexnetError::parse(format!("invalid count '{field}' in record '{record}'")))?;
    if count < 0.0 {
        return Err(LexnetError::parse(format!(
            "negative count '{field}' in record '{record}'"
        )));
    }
    Ok(count)
}
