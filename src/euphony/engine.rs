//! The alternation decision engine.
//!
//! Given a candidate word starting with у/в, the nearest real words around
//! it, and the exception lexicon, the engine decides whether the initial
//! letter should be rewritten to its counterpart. The engine is a pure
//! function of its inputs and the static rule tables; it never mutates
//! anything.
//!
//! Two positions are distinguished:
//!
//! - **Prefix case** — the candidate is a longer word ("ввімкнути"): the
//!   decision looks at the letter right after the prefix.
//! - **Standalone case** — the candidate is the bare preposition "у"/"в":
//!   the decision looks at the last letter of the preceding word and the
//!   first letter of the following word.
//!
//! # Examples
//!
//! ```
//! use milozvuk::euphony::context::WordContext;
//! use milozvuk::euphony::engine::{AlternationEngine, Candidate, Decision};
//!
//! let engine = AlternationEngine::new();
//! let candidate = Candidate::from_base("ввімкнути").unwrap();
//! let decision = engine.decide(&candidate, &WordContext::default());
//! assert_eq!(decision, Decision::Replace('у'));
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::euphony::alphabet;
use crate::euphony::context::WordContext;
use crate::euphony::lexicon::ExceptionLexicon;

/// A word token is a candidate when its base starts with у/в followed by
/// word characters only.
static CANDIDATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[УуВв]\w*$").expect("candidate pattern should be valid"));

/// A candidate occurrence of the alternation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// The full word base (prefix letter + rest), without the tail.
    pub base: &'a str,
    /// The initial у/в letter, original case.
    pub prefix: char,
    /// Everything after the prefix letter.
    pub rest: &'a str,
}

impl<'a> Candidate<'a> {
    /// Build a candidate from a word base, if it qualifies.
    pub fn from_base(base: &'a str) -> Option<Self> {
        if !CANDIDATE_PATTERN.is_match(base) {
            return None;
        }
        let mut chars = base.chars();
        let prefix = chars.next()?;
        Some(Candidate {
            base,
            prefix,
            rest: chars.as_str(),
        })
    }

    /// True when the candidate is the bare preposition у/в.
    pub fn is_standalone(&self) -> bool {
        self.rest.is_empty()
    }
}

/// The engine's verdict for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the token as written.
    Keep,
    /// Rewrite the initial letter to the given one (already case-matched
    /// to the original prefix).
    Replace(char),
}

impl Decision {
    /// The expected replacement letter, if any.
    pub fn expected(&self) -> Option<char> {
        match self {
            Decision::Keep => None,
            Decision::Replace(ch) => Some(*ch),
        }
    }
}

/// Rule-table decision engine for the у/в alternation.
#[derive(Debug, Clone, Default)]
pub struct AlternationEngine {
    lexicon: ExceptionLexicon,
}

impl AlternationEngine {
    /// Create an engine with the built-in exception lexicon.
    pub fn new() -> Self {
        Self::with_lexicon(ExceptionLexicon::new())
    }

    /// Create an engine with a custom exception lexicon.
    pub fn with_lexicon(lexicon: ExceptionLexicon) -> Self {
        AlternationEngine { lexicon }
    }

    /// The exception lexicon in use.
    pub fn lexicon(&self) -> &ExceptionLexicon {
        &self.lexicon
    }

    /// Decide the fate of a candidate in its context.
    pub fn decide(&self, candidate: &Candidate<'_>, context: &WordContext) -> Decision {
        // Exception veto. The following word always vetoes; so does the
        // candidate word itself ("вдача" is a lexeme, not a misspelling of
        // "удача").
        if let Some(next) = context.next.as_deref() {
            if self.lexicon.contains(next) {
                return Decision::Keep;
            }
        }
        if self.lexicon.contains(candidate.base) {
            return Decision::Keep;
        }

        let target = candidate
            .prefix
            .to_lowercase()
            .next()
            .unwrap_or(candidate.prefix);

        let expected = if candidate.is_standalone() {
            self.decide_standalone(target, context)
        } else {
            self.decide_prefix(target, candidate.rest)
        };

        match expected {
            Some(letter) => Decision::Replace(match_case(letter, candidate.prefix)),
            None => Decision::Keep,
        }
    }

    /// Prefix case: the candidate is a bound prefix on a longer word.
    fn decide_prefix(&self, target: char, rest: &str) -> Option<char> {
        let next_letter = rest.chars().next()?;

        if target == 'у' && alphabet::is_vowel(next_letter) {
            return Some('в');
        }
        if target == 'в'
            && (alphabet::is_consonant(next_letter) || alphabet::starts_with_hard_cluster(rest))
        {
            return Some('у');
        }
        None
    }

    /// Standalone case: the candidate is the whole preposition token.
    fn decide_standalone(&self, target: char, context: &WordContext) -> Option<char> {
        let prev_last = context.prev_last();
        let next_first = context.next_first();
        let next_is_hard = context
            .next
            .as_deref()
            .is_some_and(alphabet::starts_with_hard_cluster);

        if target == 'в' {
            let between_consonants = prev_last.is_some_and(alphabet::is_consonant)
                && next_first.is_some_and(alphabet::is_consonant);
            let opening_before_consonant =
                context.prev.is_none() && next_first.is_some_and(alphabet::is_consonant);

            if between_consonants || opening_before_consonant || next_is_hard {
                return Some('у');
            }
        } else if target == 'у' {
            let after_vowel = prev_last.is_some_and(alphabet::is_vowel);
            let between_vowels = after_vowel && next_first.is_some_and(alphabet::is_vowel);
            let vowel_then_plain_consonant =
                after_vowel && next_first.is_some_and(alphabet::is_consonant) && !next_is_hard;
            let opening_before_vowel =
                context.prev.is_none() && next_first.is_some_and(alphabet::is_vowel);

            if between_vowels || vowel_then_plain_consonant || opening_before_vowel {
                return Some('в');
            }
        }
        None
    }
}

/// Match the replacement letter's case to the original prefix.
fn match_case(expected: char, original: char) -> char {
    if original.is_uppercase() {
        expected.to_uppercase().next().unwrap_or(expected)
    } else {
        expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(prev: Option<&str>, next: Option<&str>) -> WordContext {
        WordContext {
            prev: prev.map(str::to_string),
            next: next.map(str::to_string),
        }
    }

    fn decide(engine: &AlternationEngine, base: &str, context: &WordContext) -> Decision {
        let candidate = Candidate::from_base(base).unwrap();
        engine.decide(&candidate, context)
    }

    #[test]
    fn test_candidate_parsing() {
        let candidate = Candidate::from_base("Вважай").unwrap();
        assert_eq!(candidate.prefix, 'В');
        assert_eq!(candidate.rest, "важай");
        assert!(!candidate.is_standalone());

        assert!(Candidate::from_base("у").unwrap().is_standalone());
        assert!(Candidate::from_base("хата").is_none());
        assert!(Candidate::from_base("").is_none());
        assert!(Candidate::from_base("word").is_none());
    }

    #[test]
    fn test_prefix_v_before_consonant() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "ввімкнути", &WordContext::default()),
            Decision::Replace('у')
        );
    }

    #[test]
    fn test_prefix_u_before_vowel() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "Уосени", &WordContext::default()),
            Decision::Replace('В')
        );
    }

    #[test]
    fn test_prefix_keeps() {
        let engine = AlternationEngine::new();
        // "у" before a consonant is fine as a prefix.
        assert_eq!(
            decide(&engine, "уміння", &WordContext::default()),
            Decision::Keep
        );
        // "в" before a vowel is fine as a prefix.
        assert_eq!(
            decide(&engine, "вийшов", &WordContext::default()),
            Decision::Keep
        );
    }

    #[test]
    fn test_standalone_v_between_consonants() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "в", &ctx(Some("Пішов"), Some("дім"))),
            Decision::Replace('у')
        );
    }

    #[test]
    fn test_standalone_v_opening_before_consonant() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "В", &ctx(None, Some("школі"))),
            Decision::Replace('У')
        );
    }

    #[test]
    fn test_standalone_v_before_hard_cluster() {
        let engine = AlternationEngine::new();
        // Even after a vowel, "в" yields to "у" before a hard onset.
        assert_eq!(
            decide(&engine, "в", &ctx(Some("вона"), Some("своїй"))),
            Decision::Replace('у')
        );
    }

    #[test]
    fn test_standalone_v_keeps_after_vowel() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "в", &ctx(Some("нього"), Some("очах"))),
            Decision::Keep
        );
    }

    #[test]
    fn test_standalone_u_between_vowels() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "у", &ctx(Some("вона"), Some("очах"))),
            Decision::Replace('в')
        );
    }

    #[test]
    fn test_standalone_u_after_vowel_before_plain_consonant() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "у", &ctx(Some("Була"), Some("місті"))),
            Decision::Replace('в')
        );
    }

    #[test]
    fn test_standalone_u_keeps_before_hard_cluster() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "у", &ctx(Some("Пішла"), Some("свята"))),
            Decision::Keep
        );
    }

    #[test]
    fn test_standalone_u_opening_before_vowel() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "У", &ctx(None, Some("очах"))),
            Decision::Replace('В')
        );
    }

    #[test]
    fn test_standalone_keeps_after_consonant() {
        let engine = AlternationEngine::new();
        // "у" after a consonant never changes.
        assert_eq!(
            decide(&engine, "у", &ctx(Some("Пішов"), Some("дім"))),
            Decision::Keep
        );
    }

    #[test]
    fn test_isolated_candidate_keeps() {
        let engine = AlternationEngine::new();
        assert_eq!(decide(&engine, "в", &WordContext::default()), Decision::Keep);
        assert_eq!(decide(&engine, "у", &WordContext::default()), Decision::Keep);
    }

    #[test]
    fn test_next_word_veto() {
        let engine = AlternationEngine::new();
        // "вступ" is an exception word: the preceding preposition is left
        // alone even though the hard cluster rule would fire.
        assert_eq!(
            decide(&engine, "в", &ctx(Some("Бачив"), Some("вступ"))),
            Decision::Keep
        );
    }

    #[test]
    fn test_candidate_self_veto() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "вдача", &ctx(Some("Це"), None)),
            Decision::Keep
        );
        assert_eq!(decide(&engine, "вклад", &WordContext::default()), Decision::Keep);
    }

    #[test]
    fn test_inflected_exception_is_not_vetoed() {
        let engine = AlternationEngine::new();
        // Only listed base forms veto; "вдачу" is still rewritten.
        assert_eq!(
            decide(&engine, "вдачу", &ctx(Some("пішов"), None)),
            Decision::Replace('у')
        );
    }

    #[test]
    fn test_case_matching() {
        let engine = AlternationEngine::new();
        assert_eq!(
            decide(&engine, "Вважай", &WordContext::default()),
            Decision::Replace('У')
        );
        assert_eq!(
            decide(&engine, "вважай", &WordContext::default()),
            Decision::Replace('у')
        );
    }

    #[test]
    fn test_custom_lexicon() {
        let engine =
            AlternationEngine::with_lexicon(ExceptionLexicon::from_words(
                ["угода"],
                std::iter::empty(),
            ));
        assert_eq!(
            decide(&engine, "в", &ctx(Some("Пішов"), Some("угода"))),
            Decision::Keep
        );
        // The built-in words are gone with a custom lexicon.
        assert_eq!(
            decide(&engine, "в", &ctx(Some("Бачив"), Some("вступ"))),
            Decision::Replace('у')
        );
    }
}
