// src/analysis/keywords.rs
// Frequency-ranked keyword extraction

use std::collections::HashMap;

use super::lexicon::StopwordSet;
use super::tokenizer::token_len;

pub const DEFAULT_KEYWORD_LIMIT: usize = 5;
pub const DEFAULT_MIN_KEYWORD_LEN: usize = 3;

/// Token counts, kept in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable<'t> {
    entries: Vec<(&'t str, usize)>,
    index: HashMap<&'t str, usize>,
}

impl<'t> FrequencyTable<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, token: &'t str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(token, self.entries.len());
                self.entries.push((token, 1));
            }
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct tokens by descending count. Equal counts keep
    /// first-occurrence order (`sort_by` is stable).
    pub fn ranked(&self) -> Vec<(&'t str, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordExtractor {
    limit: usize,
    min_len: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self {
            limit: DEFAULT_KEYWORD_LIMIT,
            min_len: DEFAULT_MIN_KEYWORD_LEN,
        }
    }
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Is `token` eligible to be counted as a keyword?
    pub fn qualifies(&self, token: &str, stopwords: &StopwordSet) -> bool {
        !stopwords.contains(token) && token_len(token) >= self.min_len
    }

    pub fn frequencies<'t, I>(&self, tokens: I, stopwords: &StopwordSet) -> FrequencyTable<'t>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut table = FrequencyTable::new();
        for token in tokens {
            if self.qualifies(token, stopwords) {
                table.increment(token);
            }
        }
        table
    }

    pub fn extract<'t, I>(&self, tokens: I, stopwords: &StopwordSet) -> Vec<String>
    where
        I: IntoIterator<Item = &'t str>,
    {
        self.frequencies(tokens, stopwords)
            .ranked()
            .into_iter()
            .take(self.limit)
            .map(|(token, _)| token.to_owned())
            .collect()
    }
}
