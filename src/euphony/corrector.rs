//! The euphony corrector facade.
//!
//! Ties the pipeline together: tokenize, resolve context per candidate,
//! decide, and rebuild the corrected and highlighted streams in one pass.
//! Every invocation is a pure function of the input text and the static
//! rule tables; nothing persists between calls.
//!
//! # Examples
//!
//! ```
//! use milozvuk::euphony::corrector::EuphonyCorrector;
//!
//! let corrector = EuphonyCorrector::new().unwrap();
//!
//! let (corrected, highlighted) = corrector
//!     .correct_with_highlights("Пішов в дім.")
//!     .unwrap();
//! assert_eq!(corrected, "Пішов у дім.");
//! assert!(highlighted.contains(r#"<span class="mistake""#));
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::segment::SegmentTokenizer;
use crate::error::Result;
use crate::euphony::context;
use crate::euphony::engine::{AlternationEngine, Candidate, Decision};
use crate::euphony::highlight::{HighlightStyle, Mistake};
use crate::euphony::lexicon::ExceptionLexicon;

/// Result of a correction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// The input text as given.
    pub original: String,
    /// Plain text with all alternation mistakes fixed.
    pub corrected: String,
    /// The original text with each mistake wrapped in a highlight span.
    pub highlighted: String,
    /// Structured list of the detected mistakes.
    pub mistakes: Vec<Mistake>,
}

impl Correction {
    /// True when no mistakes were found.
    pub fn is_clean(&self) -> bool {
        self.mistakes.is_empty()
    }

    /// Number of detected mistakes.
    pub fn mistake_count(&self) -> usize {
        self.mistakes.len()
    }
}

/// The у/в alternation corrector.
///
/// Owns the tokenizer, the decision engine and the highlight style. Cheap
/// to construct; safe to share across threads since nothing is mutated
/// after construction.
pub struct EuphonyCorrector {
    tokenizer: SegmentTokenizer,
    engine: AlternationEngine,
    style: HighlightStyle,
}

impl EuphonyCorrector {
    /// Create a corrector with the built-in rule tables.
    pub fn new() -> Result<Self> {
        Ok(EuphonyCorrector {
            tokenizer: SegmentTokenizer::new()?,
            engine: AlternationEngine::new(),
            style: HighlightStyle::default(),
        })
    }

    /// Create a corrector with a custom exception lexicon.
    pub fn with_lexicon(lexicon: ExceptionLexicon) -> Result<Self> {
        Ok(EuphonyCorrector {
            tokenizer: SegmentTokenizer::new()?,
            engine: AlternationEngine::with_lexicon(lexicon),
            style: HighlightStyle::default(),
        })
    }

    /// Replace the highlight style.
    pub fn with_style(mut self, style: HighlightStyle) -> Self {
        self.style = style;
        self
    }

    /// The highlight style in use.
    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Run the full pipeline, returning the structured result.
    pub fn analyze(&self, text: &str) -> Result<Correction> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();

        let mut corrected = String::with_capacity(text.len());
        let mut highlighted = String::with_capacity(text.len());
        let mut mistakes = Vec::new();

        for (index, token) in tokens.iter().enumerate() {
            if !token.is_word() {
                corrected.push_str(&token.text);
                highlighted.push_str(&token.text);
                continue;
            }

            let base = token.word_base();
            let Some(candidate) = Candidate::from_base(base) else {
                corrected.push_str(&token.text);
                highlighted.push_str(&token.text);
                continue;
            };

            let context = context::resolve(&tokens, index);
            match self.engine.decide(&candidate, &context) {
                Decision::Keep => {
                    corrected.push_str(&token.text);
                    highlighted.push_str(&token.text);
                }
                Decision::Replace(letter) => {
                    let tail = token.tail();

                    let mut expected = String::with_capacity(base.len());
                    expected.push(letter);
                    expected.push_str(candidate.rest);

                    corrected.push_str(&expected);
                    corrected.push_str(tail);

                    highlighted.push_str(&self.style.wrap(base, &expected));
                    highlighted.push_str(tail);

                    mistakes.push(Mistake {
                        position: token.position,
                        found: base.to_string(),
                        expected,
                    });
                }
            }
        }

        Ok(Correction {
            original: text.to_string(),
            corrected,
            highlighted,
            mistakes,
        })
    }

    /// Correct a text, returning `(corrected, highlighted_markup)`.
    pub fn correct_with_highlights(&self, text: &str) -> Result<(String, String)> {
        let correction = self.analyze(text)?;
        Ok((correction.corrected, correction.highlighted))
    }

    /// Correct a text, discarding the highlight markup.
    pub fn correct(&self, text: &str) -> Result<String> {
        Ok(self.analyze(text)?.corrected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector() -> EuphonyCorrector {
        EuphonyCorrector::new().unwrap()
    }

    fn correct(text: &str) -> String {
        corrector().correct(text).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let (corrected, highlighted) = corrector().correct_with_highlights("").unwrap();
        assert_eq!(corrected, "");
        assert_eq!(highlighted, "");
    }

    #[test]
    fn test_no_candidates_pass_through() {
        let text = "Сонце сяяло над полем, 42 km!";
        assert_eq!(correct(text), text);
    }

    #[test]
    fn test_standalone_correction() {
        assert_eq!(correct("Пішов в дім."), "Пішов у дім.");
        assert_eq!(correct("Була у місті"), "Була в місті");
    }

    #[test]
    fn test_prefix_correction() {
        assert_eq!(correct("ввімкнути світло"), "увімкнути світло");
        assert_eq!(correct("Вважай на мене"), "Уважай на мене");
    }

    #[test]
    fn test_sentence_opening() {
        assert_eq!(correct("В школі"), "У школі");
        assert_eq!(correct("У очах"), "В очах");
        assert_eq!(correct("В очах"), "В очах");
    }

    #[test]
    fn test_exceptions_preserved() {
        assert_eq!(correct("Це вдача."), "Це вдача.");
        assert_eq!(correct("Умова важлива."), "Умова важлива.");
        assert_eq!(correct("Указ був підписаний."), "Указ був підписаний.");
        assert_eq!(correct("Бачив в вступ"), "Бачив в вступ");
    }

    #[test]
    fn test_multiple_mistakes_in_one_pass() {
        assert_eq!(
            correct("Він пішов в вдачу"),
            "Він пішов у удачу"
        );
        assert_eq!(
            correct("Вийшов в центр у вікні."),
            "Вийшов у центр у вікні."
        );
    }

    #[test]
    fn test_context_crosses_punctuation() {
        assert_eq!(
            correct("Квіти стояли у вазі, в воді."),
            "Квіти стояли у вазі, у воді."
        );
        assert_eq!(correct("Так, в понеділок!"), "Так, у понеділок!");
    }

    #[test]
    fn test_non_ukrainian_context_is_skipped() {
        assert_eq!(correct("Race: вписав у файл"), "Race: уписав у файл");
    }

    #[test]
    fn test_highlight_markup() {
        let correction = corrector().analyze("Пішов в дім.").unwrap();
        assert_eq!(correction.corrected, "Пішов у дім.");
        assert_eq!(
            correction.highlighted,
            r#"Пішов <span class="mistake" title="Мало бути: у">в</span> дім."#
        );
        assert_eq!(correction.mistakes.len(), 1);
        assert_eq!(correction.mistakes[0].found, "в");
        assert_eq!(correction.mistakes[0].expected, "у");
        assert_eq!(correction.mistakes[0].position, 2);
    }

    #[test]
    fn test_highlight_keeps_original_visible() {
        let correction = corrector().analyze("Вважай на мене").unwrap();
        assert_eq!(
            correction.highlighted,
            r#"<span class="mistake" title="Мало бути: Уважай">Вважай</span> на мене"#
        );
    }

    #[test]
    fn test_clean_text_has_no_markup() {
        let correction = corrector().analyze("У хаті було тепло.").unwrap();
        assert!(correction.is_clean());
        assert_eq!(correction.highlighted, correction.original);
    }

    #[test]
    fn test_idempotence() {
        let texts = [
            "Пішов в дім. У вікно був видно вдачу.",
            "Він пішов в вдачу",
            "Була у місті",
            "В вікні мерехтіли вогні вулиць, що тягнулися удалечінь.",
            "ввімкнути світло",
        ];
        for text in texts {
            let once = correct(text);
            assert_eq!(correct(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn test_tail_is_reattached() {
        let correction = corrector().analyze("Пішла у хатку…").unwrap();
        assert_eq!(correction.corrected, "Пішла в хатку…");
        assert!(correction.highlighted.ends_with("…"));
    }
}
