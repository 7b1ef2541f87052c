// src/analysis/sentiment.rs
// Lexicon-based sentiment: +1 per positive hit, -1 per negative hit

use serde::Serialize;
use std::fmt;

use super::lexicon::Lexicon;

/// Coarse sentiment label, serialized with the service's Spanish names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sentiment {
    #[serde(rename = "positivo")]
    Positive,
    #[serde(rename = "negativo")]
    Negative,
    #[serde(rename = "neutral")]
    Neutral,
}

impl Sentiment {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s > 0 => Sentiment::Positive,
            s if s < 0 => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positivo",
            Sentiment::Negative => "negativo",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentScore {
    pub score: i64,
    pub positive_hits: usize,
    pub negative_hits: usize,
}

impl SentimentScore {
    pub fn label(&self) -> Sentiment {
        Sentiment::from_score(self.score)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SentimentScorer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentimentScorer<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn score<'t, I>(&self, tokens: I) -> SentimentScore
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut result = SentimentScore::default();

        for token in tokens {
            // Not else-if: both adjustments would apply if the sets overlapped.
            if self.lexicon.is_positive(token) {
                result.score += 1;
                result.positive_hits += 1;
            }
            if self.lexicon.is_negative(token) {
                result.score -= 1;
                result.negative_hits += 1;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::Tokenized;

    fn label(text: &str) -> Sentiment {
        let lexicon = Lexicon::spanish();
        SentimentScorer::new(&lexicon)
            .score(Tokenized::new(text).tokens())
            .label()
    }

    #[test]
    fn test_basic_labels() {
        assert_eq!(label(""), Sentiment::Neutral);
        assert_eq!(label("feliz"), Sentiment::Positive);
        assert_eq!(label("triste"), Sentiment::Negative);
        assert_eq!(label("feliz triste"), Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(label("FELIZ"), label("feliz"));
        assert_eq!(label("Día TERRIBLE"), Sentiment::Negative);
    }

    #[test]
    fn test_counts_every_occurrence() {
        let lexicon = Lexicon::spanish();
        let score = SentimentScorer::new(&lexicon)
            .score(Tokenized::new("bueno bueno malo mesa").tokens());
        assert_eq!(
            score,
            SentimentScore {
                score: 1,
                positive_hits: 2,
                negative_hits: 1,
            }
        );
        assert_eq!(score.label(), Sentiment::Positive);
    }

    #[test]
    fn test_punctuated_token_is_not_a_hit() {
        // "alegre," keeps its comma and so misses the lexicon
        assert_eq!(label("alegre,"), Sentiment::Neutral);
    }

    #[test]
    fn test_from_score_boundaries() {
        assert_eq!(Sentiment::from_score(1), Sentiment::Positive);
        assert_eq!(Sentiment::from_score(0), Sentiment::Neutral);
        assert_eq!(Sentiment::from_score(-1), Sentiment::Negative);
    }

    #[test]
    fn test_serializes_spanish_labels() {
        assert_eq!(serde_json::to_string(&Sentiment::Positive).unwrap(), "\"positivo\"");
        assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negativo\"");
        assert_eq!(serde_json::to_string(&Sentiment::Neutral).unwrap(), "\"neutral\"");
        assert_eq!(Sentiment::Negative.to_string(), "negativo");
    }
}
