// src/analysis/lexicon.rs
// Fixed vocabularies: sentiment word sets and keyword stopwords

use std::collections::HashSet;
use thiserror::Error;

const POSITIVE_WORDS: &[&str] = &["feliz", "alegre", "excelente", "maravilloso", "bueno"];

const NEGATIVE_WORDS: &[&str] = &["triste", "horrible", "malo", "terrible", "aburrido"];

const STOPWORDS: &[&str] = &["el", "la", "los", "y", "de", "que", "en", "a", "un", "una", "es"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LexiconError {
    #[error("word '{0}' is listed as both positive and negative")]
    Overlap(&'static str),
}

/// Positive and negative word sets. The two sets are disjoint.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

impl Lexicon {
    pub fn new(positive: &[&'static str], negative: &[&'static str]) -> Result<Self, LexiconError> {
        let positive: HashSet<&'static str> = positive.iter().copied().collect();
        let negative: HashSet<&'static str> = negative.iter().copied().collect();

        if let Some(word) = positive.intersection(&negative).next() {
            return Err(LexiconError::Overlap(*word));
        }

        Ok(Self { positive, negative })
    }

    /// The built-in Spanish lexicon.
    pub fn spanish() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
        }
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(word)
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::spanish()
    }
}

/// Words never reported as keywords.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<&'static str>,
}

impl StopwordSet {
    pub fn from_list(words: &[&'static str]) -> Self {
        Self {
            words: words.iter().copied().collect(),
        }
    }

    pub fn spanish() -> Self {
        Self::from_list(STOPWORDS)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::spanish()
    }
}
