//! Search parameters for group and membership listings.

use serde::{Deserialize, Serialize};

/// Immutable search term plus pagination window.
///
/// Two values with the same term, limit and offset are interchangeable;
/// handlers are expected to match on structural equality. A limit of `None`
/// means unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Search {
    term: String,
    limit: Option<usize>,
    offset: usize,
}

impl Search {
    pub fn new(term: impl Into<String>, limit: Option<usize>, offset: usize) -> Self {
        Self {
            term: term.into(),
            limit,
            offset,
        }
    }

    /// Search term; empty matches every row.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Maximum number of rows to return, `None` for unbounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Number of matching rows to skip.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Search::new("ser", Some(10), 5), Search::new("ser", Some(10), 5));
        assert_ne!(Search::new("ser", Some(10), 5), Search::new("ser", Some(5), 10));
        assert_ne!(Search::new("ser", None, 0), Search::new("", None, 0));
    }

    #[test]
    fn test_accessors() {
        let search = Search::new("adm", Some(20), 40);
        assert_eq!(search.term(), "adm");
        assert_eq!(search.limit(), Some(20));
        assert_eq!(search.offset(), 40);
    }

    #[test]
    fn test_default_is_unbounded_match_all() {
        let search = Search::default();
        assert_eq!(search.term(), "");
        assert_eq!(search.limit(), None);
        assert_eq!(search.offset(), 0);
    }
}
