//! String view of a searchable database.
//!
//! Providers (a crawler, a local store, a test fixture) hand over items that
//! reduce to a string. Order and duplicates are preserved.

use serde::{Deserialize, Serialize};

use qseek_sim::qubits_for;

use crate::config::MatchRule;

/// Anything that can be searched by its string form.
pub trait SearchItem {
    /// The string the matching rule is applied to.
    fn search_key(&self) -> &str;
}

impl SearchItem for String {
    fn search_key(&self) -> &str {
        self
    }
}

impl SearchItem for &str {
    fn search_key(&self) -> &str {
        self
    }
}

/// Ordered, read-only list of item keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    items: Vec<String>,
}

impl Database {
    /// Build from anything yielding strings.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from provider items via their [`SearchItem::search_key`].
    pub fn from_items<'a, T, I>(items: I) -> Self
    where
        T: SearchItem + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        Self {
            items: items
                .into_iter()
                .map(|item| item.search_key().to_string())
                .collect(),
        }
    }

    /// Synthetic database `item-0, item-1, …` of the given size, indices
    /// zero-padded to equal width so no name contains another.
    pub fn synthetic(size: usize) -> Self {
        let width = size.saturating_sub(1).to_string().len();
        Self {
            items: (0..size).map(|i| format!("item-{i:0width$}")).collect(),
        }
    }

    /// Number of items (before padding).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if it is a real (non-padding) position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// All items in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Register width needed to index every item.
    pub fn register_width(&self) -> u32 {
        qubits_for(self.items.len())
    }

    /// Size of the padded index space, `2^n`.
    ///
    /// Positions `len()..padded_len()` are placeholders and never match.
    pub fn padded_len(&self) -> usize {
        1usize << self.register_width()
    }

    /// Position of `target` under `rule`.
    ///
    /// This is the single matching routine used by both engines.
    pub fn locate(&self, target: &str, rule: MatchRule) -> Option<usize> {
        let exact = || self.items.iter().position(|item| item == target);
        let contains = || self.items.iter().position(|item| item.contains(target));
        match rule {
            MatchRule::Exact => exact(),
            MatchRule::Contains => contains(),
            MatchRule::ExactThenContains => exact().or_else(contains),
        }
    }

    /// Candidate pre-filter: items containing `keyword`, in order.
    pub fn filter(&self, keyword: &str) -> Self {
        Self {
            items: self
                .items
                .iter()
                .filter(|item| item.contains(keyword))
                .cloned()
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Database {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Database {
        Database::new(["apple pie", "banana", "apple", "cherry", "banana"])
    }

    #[test]
    fn test_padding_geometry() {
        let db = fruits();
        assert_eq!(db.len(), 5);
        assert_eq!(db.register_width(), 3);
        assert_eq!(db.padded_len(), 8);
        assert_eq!(db.get(4), Some("banana"));
        assert_eq!(db.get(5), None);

        let single = Database::new(["only"]);
        assert_eq!(single.register_width(), 0);
        assert_eq!(single.padded_len(), 1);
    }

    #[test]
    fn test_locate_rules() {
        let db = fruits();
        assert_eq!(db.locate("apple", MatchRule::Exact), Some(2));
        assert_eq!(db.locate("apple", MatchRule::Contains), Some(0));
        assert_eq!(db.locate("apple", MatchRule::ExactThenContains), Some(2));
        assert_eq!(db.locate("cher", MatchRule::ExactThenContains), Some(3));
        assert_eq!(db.locate("cher", MatchRule::Exact), None);
        assert_eq!(db.locate("durian", MatchRule::Contains), None);
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        assert_eq!(fruits().locate("banana", MatchRule::Exact), Some(1));
    }

    #[test]
    fn test_filter_keeps_order() {
        let filtered = fruits().filter("an");
        assert_eq!(filtered.items(), &["banana", "banana"]);
    }

    #[test]
    fn test_synthetic_names_are_unique() {
        let db = Database::synthetic(100);
        assert_eq!(db.get(0), Some("item-00"));
        assert_eq!(db.get(99), Some("item-99"));
        assert_eq!(db.locate("item-42", MatchRule::ExactThenContains), Some(42));
        assert_eq!(Database::synthetic(1).get(0), Some("item-0"));
    }

    #[test]
    fn test_from_items() {
        struct Page {
            title: String,
        }
        impl SearchItem for Page {
            fn search_key(&self) -> &str {
                &self.title
            }
        }

        let pages = vec![
            Page {
                title: "Grover".into(),
            },
            Page {
                title: "Shor".into(),
            },
        ];
        let db = Database::from_items(&pages);
        assert_eq!(db.items(), &["Grover", "Shor"]);
    }
}
