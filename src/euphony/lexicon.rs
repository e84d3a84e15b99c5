//! Lexical exception sets for the у/в alternation.
//!
//! A small number of Ukrainian words keep their initial letter regardless
//! of phonetic context, because the letter is part of the lexeme rather
//! than a euphonic variant ("вдача" and "удача" are different words). The
//! decision engine consults these sets to veto a correction.

use std::collections::HashSet;

/// Words always written with initial "у".
const ALWAYS_U: &[&str] = &[
    "увага",
    "ударник",
    "узбережжя",
    "указ",
    "умова",
    "усталення",
    "установа",
    "уява",
    "університет",
    "успіх",
    "уклад",
];

/// Words always written with initial "в".
const ALWAYS_V: &[&str] = &[
    "вдача",
    "вклад",
    "вправа",
    "вступ",
    "взаємини",
    "влада",
    "власний",
    "властивість",
    "вплив",
    "відповідь",
    "вихід",
    "вигляд",
    "відомість",
];

/// The exception word sets used to veto alternation.
///
/// Membership tests are case-insensitive. The sets are fixed at
/// construction time and never mutated.
///
/// # Examples
///
/// ```
/// use milozvuk::euphony::lexicon::ExceptionLexicon;
///
/// let lexicon = ExceptionLexicon::new();
/// assert!(lexicon.contains("вдача"));
/// assert!(lexicon.contains("Умова"));
/// assert!(!lexicon.contains("хата"));
/// ```
#[derive(Debug, Clone)]
pub struct ExceptionLexicon {
    /// Words always kept with "у".
    always_u: HashSet<String>,
    /// Words always kept with "в".
    always_v: HashSet<String>,
}

impl ExceptionLexicon {
    /// Create a lexicon with the built-in exception sets.
    pub fn new() -> Self {
        Self::from_words(
            ALWAYS_U.iter().copied(),
            ALWAYS_V.iter().copied(),
        )
    }

    /// Create a lexicon from custom word sets.
    ///
    /// Words are lowercase-normalized on the way in.
    pub fn from_words<'a, U, V>(always_u: U, always_v: V) -> Self
    where
        U: IntoIterator<Item = &'a str>,
        V: IntoIterator<Item = &'a str>,
    {
        ExceptionLexicon {
            always_u: always_u.into_iter().map(str::to_lowercase).collect(),
            always_v: always_v.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// Check if a word is always written with "у".
    pub fn is_always_u(&self, word: &str) -> bool {
        self.always_u.contains(&word.to_lowercase())
    }

    /// Check if a word is always written with "в".
    pub fn is_always_v(&self, word: &str) -> bool {
        self.always_v.contains(&word.to_lowercase())
    }

    /// Check if a word is in either exception set.
    pub fn contains(&self, word: &str) -> bool {
        let normalized = word.to_lowercase();
        self.always_u.contains(&normalized) || self.always_v.contains(&normalized)
    }

    /// Total number of exception words.
    pub fn len(&self) -> usize {
        self.always_u.len() + self.always_v.len()
    }

    /// Check if the lexicon holds no words.
    pub fn is_empty(&self) -> bool {
        self.always_u.is_empty() && self.always_v.is_empty()
    }
}

impl Default for ExceptionLexicon {
    fn default() -> Self {
        Self::new()
    }
}
