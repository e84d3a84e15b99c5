//! # Milozvuk
//!
//! A rule-based corrector for the Ukrainian у/в alternation, inspired by
//! the euphony (милозвучність) rules of Ukrainian orthography.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Deterministic, rule-table driven decisions (no statistics)
//! - Separator-preserving tokenization with exact reconstruction
//! - Corrected plain text plus highlighted HTML markup in one pass
//! - Lexical exception sets for words outside the alternation
//!
//! ## Example
//!
//! ```
//! use milozvuk::euphony::corrector::EuphonyCorrector;
//!
//! let corrector = EuphonyCorrector::new().unwrap();
//! let corrected = corrector.correct("Пішов в дім.").unwrap();
//! assert_eq!(corrected, "Пішов у дім.");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod euphony;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
