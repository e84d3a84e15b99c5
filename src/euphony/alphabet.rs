//! Ukrainian letter classification tables.
//!
//! The alternation rules only ever look at single letters (the last letter
//! of the preceding word, the first letter of the following word) and at
//! word-initial consonant clusters. This module holds the fixed alphabet
//! tables and the membership tests over them.
//!
//! # Examples
//!
//! ```
//! use milozvuk::euphony::alphabet;
//!
//! assert!(alphabet::is_vowel('а'));
//! assert!(alphabet::is_consonant('Ш'));
//! assert!(alphabet::starts_with_hard_cluster("святі"));
//! assert!(alphabet::is_ukrainian_word("хаті"));
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Ukrainian vowels.
const VOWELS: &[char] = &['а', 'е', 'и', 'і', 'о', 'у', 'ю', 'я', 'є', 'ї'];

/// Ukrainian consonants.
const CONSONANTS: &[char] = &[
    'б', 'в', 'г', 'ґ', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц',
    'ч', 'ш', 'щ', 'й',
];

/// Word-initial letter clusters after which "в" is kept rather than
/// simplified to "у". Single letters and digraphs behave as one hard onset.
const HARD_STARTERS: &[&str] = &[
    "в", "ф", "ль", "св", "тв", "хв", "зв", "дв", "жв", "цв", "чв", "шв", "щв",
];

/// Leading quote characters ignored when testing a word's onset.
const LEADING_QUOTES: &[char] = &['«', '\'', '"'];

static VOWEL_SET: LazyLock<HashSet<char>> = LazyLock::new(|| VOWELS.iter().copied().collect());

static CONSONANT_SET: LazyLock<HashSet<char>> =
    LazyLock::new(|| CONSONANTS.iter().copied().collect());

/// A word made of Ukrainian letters only; the test that qualifies a token
/// as a context word.
static UKRAINIAN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[а-яіїєґА-ЯІЇЄҐ]+$").expect("word pattern should be valid"));

fn to_lower(ch: char) -> char {
    // Cyrillic case folding is one-to-one.
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Check whether a character is a Ukrainian vowel (case-insensitive).
///
/// Characters outside the Ukrainian alphabet return false.
pub fn is_vowel(ch: char) -> bool {
    VOWEL_SET.contains(&to_lower(ch))
}

/// Check whether a character is a Ukrainian consonant (case-insensitive).
///
/// Characters outside the Ukrainian alphabet return false.
pub fn is_consonant(ch: char) -> bool {
    CONSONANT_SET.contains(&to_lower(ch))
}

/// Check whether a word starts with a hard consonant cluster.
///
/// The word is lowercased and leading quote characters are ignored. All
/// starter patterns are tested, so multi-letter onsets like "св" are caught
/// alongside the single letters.
pub fn starts_with_hard_cluster(word: &str) -> bool {
    let w = word.to_lowercase();
    let w = w.trim_start_matches(LEADING_QUOTES);
    HARD_STARTERS.iter().any(|starter| w.starts_with(starter))
}

/// Check whether a text consists entirely of Ukrainian letters.
pub fn is_ukrainian_word(text: &str) -> bool {
    UKRAINIAN_WORD.is_match(text)
}
