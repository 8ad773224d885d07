//! Porter stemming algorithm implementation.
//!
//! This module provides an implementation of the Porter stemming algorithm,
//! a widely-used algorithm for reducing English words to their stems.
//!
//! # Algorithm
//!
//! The Porter stemmer applies a series of rewrite rules in five steps:
//! 1. Plurals and -ed/-ing suffixes, terminal y → i
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Each step is a table of `(suffix, replacement, condition)` rules. The first
//! rule whose suffix matches decides the step: if its condition holds on the
//! remaining stem the suffix is rewritten, otherwise the word is left alone
//! and the step ends.
//!
//! # Examples
//!
//! ```
//! use hunt::analysis::token_filter::stem::Stemmer;
//! use hunt::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("kissing"), "kiss");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Condition the stem (the word minus the matched suffix) must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Always,
    /// The stem's measure is greater than the given value.
    MeasureAbove(usize),
    /// The stem contains a vowel.
    HasVowel,
    /// Measure above one and the stem ends in `s` or `t` (for `-ion`).
    MeasureAboveOneEndsST,
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    condition: Condition,
}

const fn rule(suffix: &'static str, replacement: &'static str, condition: Condition) -> Rule {
    Rule {
        suffix,
        replacement,
        condition,
    }
}

const STEP1A: &[Rule] = &[
    rule("sses", "ss", Condition::Always),
    rule("ies", "i", Condition::Always),
    rule("ss", "ss", Condition::Always),
    rule("s", "", Condition::Always),
];

const STEP1B: &[Rule] = &[
    rule("eed", "ee", Condition::MeasureAbove(0)),
    rule("ed", "", Condition::HasVowel),
    rule("ing", "", Condition::HasVowel),
];

// Applied only after step 1b removed -ed or -ing.
const STEP1B_RESTORE: &[Rule] = &[
    rule("at", "ate", Condition::Always),
    rule("bl", "ble", Condition::Always),
    rule("iz", "ize", Condition::Always),
];

const STEP1C: &[Rule] = &[rule("y", "i", Condition::HasVowel)];

const STEP2: &[Rule] = &[
    rule("ational", "ate", Condition::MeasureAbove(0)),
    rule("tional", "tion", Condition::MeasureAbove(0)),
    rule("enci", "ence", Condition::MeasureAbove(0)),
    rule("anci", "ance", Condition::MeasureAbove(0)),
    rule("izer", "ize", Condition::MeasureAbove(0)),
    rule("bli", "ble", Condition::MeasureAbove(0)),
    rule("alli", "al", Condition::MeasureAbove(0)),
    rule("entli", "ent", Condition::MeasureAbove(0)),
    rule("eli", "e", Condition::MeasureAbove(0)),
    rule("ousli", "ous", Condition::MeasureAbove(0)),
    rule("ization", "ize", Condition::MeasureAbove(0)),
    rule("ation", "ate", Condition::MeasureAbove(0)),
    rule("ator", "ate", Condition::MeasureAbove(0)),
    rule("alism", "al", Condition::MeasureAbove(0)),
    rule("iveness", "ive", Condition::MeasureAbove(0)),
    rule("fulness", "ful", Condition::MeasureAbove(0)),
    rule("ousness", "ous", Condition::MeasureAbove(0)),
    rule("aliti", "al", Condition::MeasureAbove(0)),
    rule("iviti", "ive", Condition::MeasureAbove(0)),
    rule("biliti", "ble", Condition::MeasureAbove(0)),
    rule("logi", "log", Condition::MeasureAbove(0)),
];

const STEP3: &[Rule] = &[
    rule("icate", "ic", Condition::MeasureAbove(0)),
    rule("ative", "", Condition::MeasureAbove(0)),
    rule("alize", "al", Condition::MeasureAbove(0)),
    rule("iciti", "ic", Condition::MeasureAbove(0)),
    rule("ical", "ic", Condition::MeasureAbove(0)),
    rule("ful", "", Condition::MeasureAbove(0)),
    rule("ness", "", Condition::MeasureAbove(0)),
];

const STEP4: &[Rule] = &[
    rule("al", "", Condition::MeasureAbove(1)),
    rule("ance", "", Condition::MeasureAbove(1)),
    rule("ence", "", Condition::MeasureAbove(1)),
    rule("er", "", Condition::MeasureAbove(1)),
    rule("ic", "", Condition::MeasureAbove(1)),
    rule("able", "", Condition::MeasureAbove(1)),
    rule("ible", "", Condition::MeasureAbove(1)),
    rule("ant", "", Condition::MeasureAbove(1)),
    rule("ement", "", Condition::MeasureAbove(1)),
    rule("ment", "", Condition::MeasureAbove(1)),
    rule("ent", "", Condition::MeasureAbove(1)),
    rule("ion", "", Condition::MeasureAboveOneEndsST),
    rule("ou", "", Condition::MeasureAbove(1)),
    rule("ism", "", Condition::MeasureAbove(1)),
    rule("ate", "", Condition::MeasureAbove(1)),
    rule("iti", "", Condition::MeasureAbove(1)),
    rule("ous", "", Condition::MeasureAbove(1)),
    rule("ive", "", Condition::MeasureAbove(1)),
    rule("ize", "", Condition::MeasureAbove(1)),
];

/// Outcome of running one rule table over a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// No rule's suffix matched.
    NoMatch,
    /// A suffix matched but its condition failed.
    Kept,
    /// The matched rule was applied.
    Applied(&'static str),
}

/// Porter stemming algorithm implementation.
///
/// Works on lowercase ASCII words; input is lowercased first and anything
/// that is not ASCII afterwards is returned unchanged. Words of one or two
/// letters are never stemmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    fn apply(word: &mut Vec<u8>, rules: &[Rule]) -> Step {
        let Some(rule) = rules.iter().find(|r| word.ends_with(r.suffix.as_bytes())) else {
            return Step::NoMatch;
        };

        let stem_len = word.len() - rule.suffix.len();
        if !holds(rule.condition, &word[..stem_len]) {
            return Step::Kept;
        }

        word.truncate(stem_len);
        word.extend_from_slice(rule.replacement.as_bytes());
        Step::Applied(rule.suffix)
    }

    fn step1b(word: &mut Vec<u8>) {
        match Self::apply(word, STEP1B) {
            Step::Applied(suffix) if suffix != "eed" => {}
            _ => return,
        }

        if let Step::Applied(_) = Self::apply(word, STEP1B_RESTORE) {
            return;
        }

        let last = word[word.len() - 1];
        if ends_double_consonant(word) && !matches!(last, b'l' | b's' | b'z') {
            word.pop();
        } else if measure(word) == 1 && ends_cvc(word) {
            word.push(b'e');
        }
    }

    fn step5(word: &mut Vec<u8>) {
        if word.ends_with(b"e") {
            let stem = &word[..word.len() - 1];
            let m = measure(stem);
            if m > 1 || (m == 1 && !ends_cvc(stem)) {
                word.pop();
            }
        }

        if word.ends_with(b"ll") && measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        if lowered.len() <= 2 || !lowered.is_ascii() {
            return lowered;
        }

        let mut bytes = lowered.into_bytes();

        Self::apply(&mut bytes, STEP1A);
        Self::step1b(&mut bytes);
        Self::apply(&mut bytes, STEP1C);
        Self::apply(&mut bytes, STEP2);
        Self::apply(&mut bytes, STEP3);
        Self::apply(&mut bytes, STEP4);
        Self::step5(&mut bytes);

        // Only ASCII bytes were removed or appended.
        String::from_utf8(bytes).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}

fn holds(condition: Condition, stem: &[u8]) -> bool {
    match condition {
        Condition::Always => true,
        Condition::MeasureAbove(n) => measure(stem) > n,
        Condition::HasVowel => contains_vowel(stem),
        Condition::MeasureAboveOneEndsST => {
            measure(stem) > 1 && matches!(stem.last(), Some(b's' | b't'))
        }
    }
}

/// `y` is a consonant at the start of a word or after a vowel.
fn is_consonant(word: &[u8], i: usize) -> bool {
    match word[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences in `[C](VC)^m[V]`.
fn measure(word: &[u8]) -> usize {
    let n = word.len();
    let mut i = 0;

    // Skip initial consonants
    while i < n && is_consonant(word, i) {
        i += 1;
    }

    let mut m = 0;
    loop {
        while i < n && !is_consonant(word, i) {
            i += 1;
        }
        if i >= n {
            return m;
        }
        while i < n && is_consonant(word, i) {
            i += 1;
        }
        m += 1;
    }
}

fn contains_vowel(word: &[u8]) -> bool {
    (0..word.len()).any(|i| !is_consonant(word, i))
}

fn ends_double_consonant(word: &[u8]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// Consonant-vowel-consonant ending where the last letter is not w, x or y.
fn ends_cvc(word: &[u8]) -> bool {
    let n = word.len();
    n >= 3
        && is_consonant(word, n - 1)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 3)
        && !matches!(word[n - 1], b'w' | b'x' | b'y')
}
