//! The у/в euphony correction engine.
//!
//! Ukrainian alternates between "у" and "в" (both as standalone
//! prepositions and as word prefixes) to avoid awkward sound clashes. The
//! choice is governed by the neighboring sounds: the last letter of the
//! preceding word, the first letter of the following word, and a small set
//! of lexical exceptions. This module implements the rule tables and the
//! decision pipeline.
//!
//! # Pipeline
//!
//! ```text
//! Raw Text → Tokenizer → Token Sequence
//!              ↓ per candidate
//!          Context Resolver
//!              ↓
//!          Decision Engine
//!              ↓
//!          Rewriter & Highlighter → (corrected, highlighted)
//! ```

pub mod alphabet;
pub mod context;
pub mod corrector;
pub mod engine;
pub mod highlight;
pub mod lexicon;

// Re-export commonly used types
pub use corrector::{Correction, EuphonyCorrector};
pub use engine::{AlternationEngine, Candidate, Decision};
pub use highlight::{HighlightStyle, Mistake};
pub use lexicon::ExceptionLexicon;
