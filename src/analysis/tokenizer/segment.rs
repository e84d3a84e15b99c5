//! Separator-preserving segmentation tokenizer.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenKind, TokenStream};
use crate::error::{MilozvukError, Result};

/// The separator set: whitespace runs, or runs of sentence and quotation
/// punctuation including the hyphen. Everything between separators is a
/// word-bearing token.
const SEPARATOR_PATTERN: &str = r#"\s+|[.,;!?—:«»()"'\[\]{}\-]+"#;

/// A tokenizer that splits text on a fixed separator set while keeping the
/// separators as tokens.
///
/// Separator matches become [`TokenKind::Whitespace`] or
/// [`TokenKind::Punctuation`] tokens; the gaps between them become
/// [`TokenKind::Word`] tokens. Concatenating the token texts in order
/// reproduces the input exactly.
///
/// Characters outside both the separator set and the word-character class
/// (e.g. `…`) stay attached to their word token and are handled later by
/// word-base extraction.
#[derive(Clone, Debug)]
pub struct SegmentTokenizer {
    /// The compiled separator pattern.
    pattern: Arc<Regex>,
}

impl SegmentTokenizer {
    /// Create a new segment tokenizer with the default separator set.
    pub fn new() -> Result<Self> {
        Self::with_pattern(SEPARATOR_PATTERN)
    }

    /// Create a segment tokenizer with a custom separator pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| MilozvukError::analysis(format!("Invalid separator pattern: {e}")))?;

        Ok(SegmentTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the separator pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    fn separator_kind(text: &str) -> TokenKind {
        if text.chars().next().is_some_and(char::is_whitespace) {
            TokenKind::Whitespace
        } else {
            TokenKind::Punctuation
        }
    }
}

impl Default for SegmentTokenizer {
    fn default() -> Self {
        Self::new().expect("Default separator pattern should be valid")
    }
}

impl Tokenizer for SegmentTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut last_end = 0;
        let mut position = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                let gap_text = &text[last_end..mat.start()];
                tokens.push(Token::with_offsets(
                    gap_text,
                    position,
                    last_end,
                    mat.start(),
                    TokenKind::Word,
                ));
                position += 1;
            }

            tokens.push(Token::with_offsets(
                mat.as_str(),
                position,
                mat.start(),
                mat.end(),
                Self::separator_kind(mat.as_str()),
            ));
            position += 1;
            last_end = mat.end();
        }

        // Final gap if any
        if last_end < text.len() {
            let gap_text = &text[last_end..];
            tokens.push(Token::with_offsets(
                gap_text,
                position,
                last_end,
                text.len(),
                TokenKind::Word,
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "segment"
    }
}
