//! Transliteration char filter.
//!
//! Maps non-ASCII letters to ASCII spellings so that `łódź` and `lodz` index
//! to the same term. The Latin table is always consulted; a
//! [`TransliterationOption`] adds a script or locale table that takes
//! precedence over it. Letters missing from both tables are folded by
//! canonical decomposition (`é` → `e`), and anything that still is not ASCII
//! is dropped.

use std::sync::Arc;

use ahash::AHashMap;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::CharFilter;
use crate::config::TransliterationOption;

/// Letters that canonical decomposition does not reduce to ASCII.
const LATIN: &[(char, &str)] = &[
    ('ł', "l"),
    ('ß', "ss"),
    ('æ', "ae"),
    ('œ', "oe"),
    ('ø', "o"),
    ('đ', "d"),
    ('ð', "d"),
    ('þ', "th"),
    ('ı', "i"),
    ('ŀ', "l"),
    ('ħ', "h"),
    ('ŧ', "t"),
    ('ĸ', "k"),
    ('ŋ', "n"),
];

const GERMAN: &[(char, &str)] = &[('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('ß', "ss")];

// Hard and soft signs carry no sound of their own and are dropped.
const CYRILLIC: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "jo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "c"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "shch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "ju"),
    ('я', "ja"),
    ('і', "i"),
    ('ї', "ji"),
    ('є', "je"),
    ('ґ', "g"),
    ('ў', "u"),
];

/// A char filter that replaces non-ASCII letters with ASCII spellings.
///
/// Lookups are done on the lowercase form of a letter; an uppercase source
/// yields a capitalized replacement (`Ł` → `L`, `Ж` → `Zh`). Non-ASCII
/// whitespace becomes a plain space so word boundaries survive.
#[derive(Clone, Debug)]
pub struct TransliterationCharFilter {
    option: TransliterationOption,
    table: Arc<AHashMap<char, &'static str>>,
}

impl TransliterationCharFilter {
    /// Create a filter for the given option.
    pub fn new(option: TransliterationOption) -> Self {
        let extra: &[(char, &str)] = match option {
            TransliterationOption::None => &[],
            TransliterationOption::Cyrillic => CYRILLIC,
            TransliterationOption::German => GERMAN,
        };

        let table = LATIN
            .iter()
            .chain(extra.iter())
            .copied()
            .collect::<AHashMap<_, _>>();

        TransliterationCharFilter {
            option,
            table: Arc::new(table),
        }
    }

    /// The option this filter was built for.
    pub fn option(&self) -> TransliterationOption {
        self.option
    }

    fn push_char(&self, c: char, output: &mut String) {
        if c.is_ascii() {
            output.push(c);
            return;
        }

        if c.is_whitespace() {
            output.push(' ');
            return;
        }

        if let Some(replacement) = self.table.get(&c) {
            output.push_str(replacement);
            return;
        }

        let lower = c.to_lowercase().next().unwrap_or(c);
        if lower != c {
            if let Some(replacement) = self.table.get(&lower) {
                push_capitalized(replacement, output);
                return;
            }
        }

        // Base letter plus combining marks, e.g. 'ą' -> 'a' + U+0328.
        let folded: String = c.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
        if !folded.is_empty() && folded.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            output.push_str(&folded);
        }
    }
}

impl Default for TransliterationCharFilter {
    fn default() -> Self {
        Self::new(TransliterationOption::None)
    }
}

fn push_capitalized(replacement: &str, output: &mut String) {
    let mut chars = replacement.chars();
    if let Some(first) = chars.next() {
        output.push(first.to_ascii_uppercase());
        output.extend(chars);
    }
}

impl CharFilter for TransliterationCharFilter {
    fn filter(&self, input: &str) -> String {
        if input.is_ascii() {
            return input.to_string();
        }

        let mut output = String::with_capacity(input.len());
        for c in input.chars() {
            self.push_char(c, &mut output);
        }
        output
    }

    fn name(&self) -> &'static str {
        "transliterate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_folding() {
        let filter = TransliterationCharFilter::default();
        assert_eq!(
            filter.filter("łąkę źródło łódź Börse äußert"),
            "lake zrodlo lodz Borse aussert"
        );
        assert_eq!(filter.filter("Ærøskøbing café naïve"), "Aeroskobing cafe naive");
        assert_eq!(filter.filter("ŁÓDŹ"), "LODZ");
    }

    #[test]
    fn test_german_option() {
        let filter = TransliterationCharFilter::new(TransliterationOption::German);
        assert_eq!(filter.filter("Börse äußert Übel"), "Boerse aeussert Uebel");
        // Latin table still applies.
        assert_eq!(filter.filter("łódź"), "lodz");
    }

    #[test]
    fn test_cyrillic_option() {
        let filter = TransliterationCharFilter::new(TransliterationOption::Cyrillic);
        assert_eq!(filter.filter("Карта сайта"), "Karta sajta");
        assert_eq!(filter.filter("Жёлтый щит"), "Zhjoltyj shchit");
        assert_eq!(filter.filter("объём"), "objom");
    }

    #[test]
    fn test_cyrillic_dropped_without_option() {
        let filter = TransliterationCharFilter::default();
        assert_eq!(filter.filter("Карта map"), " map");
    }

    #[test]
    fn test_drops_unmapped_scripts() {
        let filter = TransliterationCharFilter::default();
        assert_eq!(filter.filter("東京 tokyo"), " tokyo");
    }

    #[test]
    fn test_non_ascii_whitespace_becomes_space() {
        let filter = TransliterationCharFilter::default();
        assert_eq!(filter.filter("first\u{00A0}sentence"), "first sentence");
    }

    #[test]
    fn test_option_is_recorded() {
        let filter = TransliterationCharFilter::new(TransliterationOption::Cyrillic);
        assert_eq!(filter.option(), TransliterationOption::Cyrillic);
        assert_eq!(filter.name(), "transliterate");
    }
}
