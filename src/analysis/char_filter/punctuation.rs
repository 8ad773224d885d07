//! Punctuation stripping char filter.

use std::sync::LazyLock;

use regex::Regex;

use super::CharFilter;

/// Anything that is not a letter, a number or whitespace.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s]+").expect("punctuation pattern is valid"));

/// A char filter that deletes punctuation and symbols.
///
/// Characters are removed in place, not replaced by a space, so a contraction
/// such as `didn't` stays one word (`didnt`) and `woot!` becomes `woot`.
/// Combining marks are removed too; precomposed letters are left for the
/// transliteration step.
#[derive(Clone, Debug, Default)]
pub struct PunctuationCharFilter;

impl PunctuationCharFilter {
    pub fn new() -> Self {
        PunctuationCharFilter
    }
}

impl CharFilter for PunctuationCharFilter {
    fn filter(&self, input: &str) -> String {
        PUNCTUATION.replace_all(input, "").into_owned()
    }

    fn name(&self) -> &'static str {
        "punctuation"
    }
}
