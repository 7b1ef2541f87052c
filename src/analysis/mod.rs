// src/analysis/mod.rs
//! Text analysis core.
//!
//! Raw text is lowercased and split once ([`Tokenized`]); the sentiment
//! scorer and the keyword extractor then read the same token stream
//! independently. Everything here is synchronous, allocation-bounded by
//! the input, and free of shared mutable state, so a single [`Analyzer`]
//! can be shared across request tasks behind an `Arc`.

pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod tokenizer;

use serde::Serialize;

pub use keywords::{FrequencyTable, KeywordExtractor};
pub use lexicon::{Lexicon, LexiconError, StopwordSet};
pub use sentiment::{Sentiment, SentimentScore, SentimentScorer};
pub use tokenizer::{Tokenized, tokenize};

/// Result of analyzing one text. Field names are the wire names of the
/// `/analyze` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    #[serde(rename = "sentimiento")]
    pub sentiment: Sentiment,
    #[serde(rename = "palabrasClave")]
    pub keywords: Vec<String>,
}

/// Read-only vocabularies plus extraction settings.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    lexicon: Lexicon,
    stopwords: StopwordSet,
    extractor: KeywordExtractor,
}

impl Analyzer {
    pub fn new(lexicon: Lexicon, stopwords: StopwordSet, extractor: KeywordExtractor) -> Self {
        Self {
            lexicon,
            stopwords,
            extractor,
        }
    }

    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let tokenized = Tokenized::new(text);
        let score = self.score(&tokenized);
        let keywords = self.keywords(&tokenized);

        tracing::debug!(
            tokens = tokenized.len(),
            score = score.score,
            keywords = keywords.len(),
            "Analyzed text"
        );

        AnalysisResult {
            sentiment: score.label(),
            keywords,
        }
    }

    pub fn score(&self, tokenized: &Tokenized) -> SentimentScore {
        SentimentScorer::new(&self.lexicon).score(tokenized.tokens())
    }

    pub fn keywords(&self, tokenized: &Tokenized) -> Vec<String> {
        self.extractor.extract(tokenized.tokens(), &self.stopwords)
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        self.score(&Tokenized::new(text)).label()
    }
}
