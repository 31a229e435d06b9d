//! Synset content mapping and the inverted word index.
//!
//! A [`Lexicon`] owns the synset id → word set mapping and an inverted index
//! word → synset ids built once at construction. The inverted index replaces
//! a per-query linear scan over all nodes: the query engine performs one
//! lookup per query word per request, so lookups must be O(1) amortized.

use ahash::{AHashMap, AHashSet};

/// The content mapping for a relation graph: which words each synset
/// contains, and which synsets each word appears in.
///
/// A word may be associated with multiple synset ids (polysemy). Immutable
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// Synset id -> the set of words in that synset.
    contents: AHashMap<u32, AHashSet<String>>,
    /// Inverted index: word -> the set of synset ids containing it.
    index: AHashMap<String, AHashSet<u32>>,
}

impl Lexicon {
    /// Build a lexicon from a content mapping, constructing the inverted
    /// index in one pass.
    pub fn new(contents: AHashMap<u32, AHashSet<String>>) -> Self {
        let mut index: AHashMap<String, AHashSet<u32>> = AHashMap::new();
        for (&id, words) in &contents {
            for word in words {
                index.entry(word.clone()).or_default().insert(id);
            }
        }
        Lexicon { contents, index }
    }

    /// Return the words of a synset, or `None` for an unknown id.
    pub fn words_of(&self, id: u32) -> Option<&AHashSet<String>> {
        self.contents.get(&id)
    }

    /// Return the synset ids whose content includes `word`, or `None` if the
    /// word is unknown. An unknown word is not an error condition.
    pub fn nodes_containing(&self, word: &str) -> Option<&AHashSet<u32>> {
        self.index.get(word)
    }

    /// Return the union of synset contents over a set of node ids. Ids with
    /// no recorded content are skipped.
    pub fn words_of_all<I>(&self, ids: I) -> AHashSet<String>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut words = AHashSet::new();
        for id in ids {
            if let Some(content) = self.contents.get(&id) {
                words.extend(content.iter().cloned());
            }
        }
        words
    }

    /// Return the number of synsets in the lexicon.
    pub fn synset_count(&self) -> usize {
        self.contents.len()
    }

    /// Return the number of distinct words in the lexicon.
    pub fn word_count(&self) -> usize {
        self.index.len()
    }
}
