//! Token types and utilities for text analysis.
//!
//! This module defines the core data structures for representing text
//! tokens, which are the fundamental units that flow through the correction
//! pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single token with text, position, offsets and kind
//! - [`TokenKind`] - Classification of token content (word, whitespace, punctuation)
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! Tokens are produced so that concatenating their `text` fields in order
//! reproduces the tokenized input exactly; separators are retained as
//! tokens of their own, never dropped.
//!
//! # Examples
//!
//! ```
//! use milozvuk::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("хаті", 2, TokenKind::Word);
//! assert_eq!(token.text, "хаті");
//! assert_eq!(token.position, 2);
//! assert!(token.is_word());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Trailing punctuation tail: the final run of characters that are neither
/// word characters nor whitespace.
static TAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]+$").expect("tail pattern should be valid"));

/// Token kind classification.
///
/// Each token is a contiguous run of exactly one kind. Whitespace and
/// punctuation tokens pass through the correction pipeline unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Word-bearing text (may carry an attached trailing tail such as `…`
    /// that the separator set does not split off).
    Word,
    /// A run of whitespace characters.
    Whitespace,
    /// A run of punctuation characters from the separator set.
    Punctuation,
}

/// A token represents a single unit of text after tokenization.
///
/// # Fields
///
/// - `text` - The token's text content, exactly as it appeared in the input
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original text
/// - `kind` - Classification of the token content
///
/// # Examples
///
/// ```
/// use milozvuk::analysis::token::{Token, TokenKind};
///
/// let token = Token::with_offsets("дім", 2, 10, 16, TokenKind::Word);
/// assert_eq!(token.text, "дім");
/// assert_eq!(token.start_offset, 10);
/// assert_eq!(token.end_offset, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token.
    pub text: String,

    /// The position of the token in the token stream (0-based).
    pub position: usize,

    /// The byte offset where this token starts in the original text.
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text.
    pub end_offset: usize,

    /// The kind of content this token holds.
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token with the given text, position and kind.
    pub fn new<S: Into<String>>(text: S, position: usize, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            kind,
        }
    }

    /// Create a new token with text, position, byte offsets and kind.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
        kind: TokenKind,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            kind,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this is a word-bearing token.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// The word base: token text with the trailing punctuation tail removed.
    ///
    /// Stripping happens from the end only; leading punctuation attached to
    /// a word stays part of the base.
    pub fn word_base(&self) -> &str {
        word_base(&self.text)
    }

    /// The trailing punctuation tail removed by [`Token::word_base`].
    ///
    /// Reattached unchanged after any rewrite of the base.
    pub fn tail(&self) -> &str {
        &self.text[self.word_base().len()..]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Strip the trailing punctuation tail from a token text, returning the
/// leading word base.
///
/// # Examples
///
/// ```
/// use milozvuk::analysis::token::word_base;
///
/// assert_eq!(word_base("вдача…"), "вдача");
/// assert_eq!(word_base("слово"), "слово");
/// ```
pub fn word_base(text: &str) -> &str {
    match TAIL_PATTERN.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}

/// A token stream represents a sequence of tokens from the tokenizer.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
