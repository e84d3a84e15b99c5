//! Tokenizer trait and implementations.
//!
//! Tokenizers are the first step of the correction pipeline, responsible
//! for splitting input text into word, whitespace and punctuation tokens.
//! Unlike search-oriented tokenizers, the ones in this crate keep every
//! separator as a token of its own so the input can be reconstructed
//! exactly by concatenation.
//!
//! # Available Tokenizers
//!
//! - [`segment::SegmentTokenizer`] - Separator-preserving segmentation over
//!   a fixed punctuation set
//!
//! # Examples
//!
//! ```
//! use milozvuk::analysis::tokenizer::Tokenizer;
//! use milozvuk::analysis::tokenizer::segment::SegmentTokenizer;
//!
//! let tokenizer = SegmentTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Пішов в дім.").unwrap().collect();
//! assert_eq!(tokens.len(), 6);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    ///
    /// Returns an empty stream for empty input; never fails on any input
    /// text.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod segment;
