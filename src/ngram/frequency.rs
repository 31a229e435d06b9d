//! Per-word usage counts and corpus-wide yearly totals.

use ahash::AHashMap;

use crate::ngram::time_series::TimeSeries;

/// Historical usage statistics for a corpus: one [`TimeSeries`] per known
/// word plus one series of corpus-wide yearly totals.
///
/// Immutable after construction. Every returned series is a defensive copy;
/// callers cannot mutate internal state through a returned value. Unknown
/// words and empty windows degrade to empty series or zero, never to errors.
#[derive(Debug, Clone, Default)]
pub struct FrequencyStore {
    /// Word -> its yearly usage counts.
    words: AHashMap<String, TimeSeries>,
    /// Corpus-wide total word count per year.
    totals: TimeSeries,
}

impl FrequencyStore {
    /// Create a store from a word map and corpus totals.
    pub fn new(words: AHashMap<String, TimeSeries>, totals: TimeSeries) -> Self {
        FrequencyStore { words, totals }
    }

    /// Return whether the store has counts for `word`.
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Return the number of words with recorded counts.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Return a copy of the usage series of `word` restricted to
    /// `[start_year, end_year]`. Unknown words yield an empty series.
    pub fn count_history(&self, word: &str, start_year: i32, end_year: i32) -> TimeSeries {
        self.words
            .get(word)
            .map(|series| series.restricted_to(start_year, end_year))
            .unwrap_or_default()
    }

    /// Return the summed usage count of `word` over `[start_year, end_year]`.
    /// Zero if the word is unknown or the window contains no recorded years.
    pub fn total_count(&self, word: &str, start_year: i32, end_year: i32) -> f64 {
        self.count_history(word, start_year, end_year).sum()
    }

    /// Return a copy of the corpus-wide yearly totals.
    pub fn total_count_history(&self) -> TimeSeries {
        self.totals.clone()
    }

    /// Return the relative weight of `word` in `year`: its count divided by
    /// the corpus total for that year. Zero if the word has no count, the
    /// total is unrecorded, or the total is zero.
    pub fn weight(&self, word: &str, year: i32) -> f64 {
        let count = match self.words.get(word).and_then(|series| series.get(year)) {
            Some(count) => count,
            None => return 0.0,
        };
        match self.totals.get(year) {
            Some(total) if total != 0.0 => count / total,
            _ => 0.0,
        }
    }

    /// Return the relative frequency per year of `word` over
    /// `[start_year, end_year]`. Unknown words yield an empty series.
    pub fn weight_history(&self, word: &str, start_year: i32, end_year: i32) -> TimeSeries {
        self.count_history(word, start_year, end_year)
            .divided_by(&self.totals)
    }

    /// Return the summed relative frequency per year of all `words` over
    /// `[start_year, end_year]`. Words with no recorded data are ignored
    /// rather than treated as errors.
    pub fn summed_weight_history<'a, I>(
        &self,
        words: I,
        start_year: i32,
        end_year: i32,
    ) -> TimeSeries
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut summed = TimeSeries::new();
        for word in words {
            let history = self.count_history(word, start_year, end_year);
            if !history.is_empty() {
                summed = summed.plus(&history);
            }
        }
        summed.divided_by(&self.totals)
    }
}
