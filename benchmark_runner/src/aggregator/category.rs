//!
//! The measurement categories.
//!

use std::collections::BTreeMap;

///
/// The result record key a measurement is collected under.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// UID-keyed map lookups.
    Map,
    /// Array-indexed lookups.
    Array,
    /// Vector-indexed lookups.
    Vector,
}

impl Category {
    /// All categories in record order.
    pub const ALL: [Self; 3] = [Self::Map, Self::Array, Self::Vector];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Map => write!(f, "map"),
            Self::Array => write!(f, "array"),
            Self::Vector => write!(f, "vector"),
        }
    }
}

///
/// Maps measurement line prefixes to categories.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    /// The prefix to category mapping.
    entries: BTreeMap<String, Category>,
}

impl CategoryTable {
    /// The prefix of UID-based measurements.
    pub const PREFIX_UID_BASED: &'static str = "UID-based:";
    /// The prefix of array-based measurements.
    pub const PREFIX_ARRAY_BASED: &'static str = "Array-based:";
    /// The prefix of vector-based measurements.
    pub const PREFIX_VECTOR_BASED: &'static str = "Vector-based:";

    ///
    /// A shortcut constructor.
    ///
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Category)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(prefix, category)| (prefix.into(), category))
                .collect(),
        }
    }

    ///
    /// Returns the category of `prefix`, if it is recognized.
    ///
    pub fn get(&self, prefix: &str) -> Option<Category> {
        self.entries.get(prefix).copied()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::new([
            (Self::PREFIX_UID_BASED, Category::Map),
            (Self::PREFIX_ARRAY_BASED, Category::Array),
            (Self::PREFIX_VECTOR_BASED, Category::Vector),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::Category;
    use super::CategoryTable;

    #[test]
    fn default() {
        let table = CategoryTable::default();

        assert_eq!(table.get("UID-based:"), Some(Category::Map));
        assert_eq!(table.get("Array-based:"), Some(Category::Array));
        assert_eq!(table.get("Vector-based:"), Some(Category::Vector));
    }

    #[test]
    fn prefix_must_match_exactly() {
        let table = CategoryTable::default();

        assert_eq!(table.get("UID-based"), None);
        assert_eq!(table.get("uid-based:"), None);
        assert_eq!(table.get("Weird-based:"), None);
    }
}
