// src/analysis/tokenizer.rs
// Lowercasing whitespace tokenizer shared by the scorer and the extractor

/// Token separators: ASCII space, tab, newline, vertical tab, form feed
/// and carriage return. Other Unicode spaces (e.g. U+00A0) stay inside tokens.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Lowercased copy of an input text, split lazily into tokens.
///
/// The text is normalized once; every consumer borrows tokens from the
/// same buffer, so running several analyzers costs a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    normalized: String,
}

impl Tokenized {
    pub fn new(text: &str) -> Self {
        Self {
            normalized: text.to_lowercase(),
        }
    }

    /// Maximal runs of non-separator characters, in input order.
    /// Never yields an empty token.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.normalized
            .split(is_separator)
            .filter(|token| !token.is_empty())
    }

    pub fn len(&self) -> usize {
        self.tokens().count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens().next().is_none()
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

/// Materialized form of [`Tokenized::tokens`].
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenized::new(text).tokens().map(str::to_owned).collect()
}

/// Token length in characters, not bytes.
pub fn token_len(token: &str) -> usize {
    token.chars().count()
}
