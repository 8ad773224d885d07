//! Ordered, duplicate-free collections of stemmed terms.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// The stemmed terms of a record or of a search query.
///
/// Terms keep the order of their first occurrence; inserting a term that is
/// already present is a no-op. Serializes as a plain array of strings, which
/// is what gets written to the indexed field.
///
/// # Examples
///
/// ```
/// use hunt::analysis::term_set::TermSet;
///
/// let terms: TermSet = ["mongo", "nosql", "mongo"].into_iter().collect();
/// assert_eq!(terms.as_slice(), ["mongo", "nosql"]);
/// assert!(terms.contains("nosql"));
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TermSet {
    terms: Vec<String>,
    seen: AHashSet<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term unless it is already present. Returns whether it was added.
    pub fn insert<S: Into<String>>(&mut self, term: S) -> bool {
        let term = term.into();
        if self.seen.contains(&term) {
            return false;
        }
        self.seen.insert(term.clone());
        self.terms.push(term);
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    /// Whether at least one term is shared with `other`.
    pub fn intersects(&self, other: &TermSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|t| large.contains(t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.terms.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.terms
    }

    pub fn into_vec(self) -> Vec<String> {
        self.terms
    }

    /// The terms as an unordered set, for order-insensitive comparison.
    pub fn to_set(&self) -> AHashSet<&str> {
        self.terms.iter().map(String::as_str).collect()
    }
}

// Order matters: two sets with the same terms in a different order differ.
impl PartialEq for TermSet {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl Eq for TermSet {}

impl fmt::Debug for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TermSet").field(&self.terms).finish()
    }
}

impl<S: Into<String>> FromIterator<S> for TermSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TermSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for TermSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.insert(term);
        }
    }
}

impl From<Vec<String>> for TermSet {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<TermSet> for Vec<String> {
    fn from(set: TermSet) -> Self {
        set.terms
    }
}

impl IntoIterator for TermSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a TermSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for TermSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.terms.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let mut set = TermSet::new();
        assert!(set.insert("boom"));
        assert!(set.insert("bang"));
        assert!(!set.insert("boom"));

        assert_eq!(set.as_slice(), ["boom", "bang"]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_intersects() {
        let stored: TermSet = ["woot", "mongodb"].into_iter().collect();
        let query: TermSet = ["mongodb", "awesom"].into_iter().collect();
        let other: TermSet = ["frank"].into_iter().collect();

        assert!(stored.intersects(&query));
        assert!(query.intersects(&stored));
        assert!(!stored.intersects(&other));
        assert!(!stored.intersects(&TermSet::new()));
    }

    #[test]
    fn test_large_distinct_input() {
        let words: Vec<String> = (0..50_000).map(|i| format!("term{i}")).collect();
        let mut set: TermSet = words.iter().cloned().collect();

        assert_eq!(set.len(), 50_000);
        assert_eq!(set.as_slice(), words.as_slice());
        assert!(set.contains("term49999"));
        assert!(!set.insert("term0"));
        assert!(set.intersects(&["term123"].into_iter().collect()));
    }

    #[test]
    fn test_to_set_ignores_order() {
        let a: TermSet = ["just", "caught"].into_iter().collect();
        let b: TermSet = ["caught", "just"].into_iter().collect();

        assert_ne!(a, b);
        assert_eq!(a.to_set(), b.to_set());
    }

    #[test]
    fn test_serializes_as_array() {
        let set: TermSet = ["kiss", "barf"].into_iter().collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!(["kiss", "barf"]));

        let back: TermSet = serde_json::from_str(r#"["a1", "b2", "a1"]"#).unwrap();
        assert_eq!(back.as_slice(), ["a1", "b2"]);
        assert_eq!(back.to_string(), "[a1, b2]");
    }
}
