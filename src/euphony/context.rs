//! Context resolution across punctuation and whitespace.
//!
//! The alternation rules judge a candidate by the nearest *real* words
//! around it, not the nearest tokens: punctuation and whitespace are
//! skipped, and so are word tokens that are not purely alphabetic (numbers,
//! Latin text, words with embedded marks). The scans are unbounded within
//! the token sequence.

use crate::analysis::token::Token;
use crate::euphony::alphabet;

/// The nearest pure-alphabetic words on either side of a token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordContext {
    /// Nearest preceding word, if any.
    pub prev: Option<String>,
    /// Nearest following word, if any.
    pub next: Option<String>,
}

impl WordContext {
    /// Last letter of the preceding word.
    pub fn prev_last(&self) -> Option<char> {
        self.prev.as_ref().and_then(|w| w.chars().last())
    }

    /// First letter of the following word.
    pub fn next_first(&self) -> Option<char> {
        self.next.as_ref().and_then(|w| w.chars().next())
    }
}

/// Resolve the word context for the token at `index`.
pub fn resolve(tokens: &[Token], index: usize) -> WordContext {
    WordContext {
        prev: prev_word(tokens, index),
        next: next_word(tokens, index),
    }
}

/// Nearest preceding pure-alphabetic word base before `index`.
pub fn prev_word(tokens: &[Token], index: usize) -> Option<String> {
    tokens[..index]
        .iter()
        .rev()
        .map(|token| token.word_base())
        .find(|base| !base.is_empty() && alphabet::is_ukrainian_word(base))
        .map(str::to_string)
}

/// Nearest following pure-alphabetic word base after `index`.
pub fn next_word(tokens: &[Token], index: usize) -> Option<String> {
    tokens[index + 1..]
        .iter()
        .map(|token| token.word_base())
        .find(|base| !base.is_empty() && alphabet::is_ukrainian_word(base))
        .map(str::to_string)
}
