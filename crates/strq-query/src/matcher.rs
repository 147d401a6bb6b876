//! Query evaluation against haystacks.
//!
//! Literals match by case-insensitive substring containment. AND stops at the first failing
//! term and OR at the first succeeding one. An empty AND matches everything; an empty OR
//! matches nothing.

use crate::ast::{Query, QueryNode, Term};

impl QueryNode {
    /// Evaluates the node against an already lower-cased haystack.
    fn matches_folded(&self, haystack: &str) -> bool {
        match self {
            Self::And(terms) => terms.iter().all(|term| term.matches_folded(haystack)),
            Self::Or(terms) => terms.iter().any(|term| term.matches_folded(haystack)),
        }
    }

    /// Evaluates the node against a haystack.
    pub fn matches(&self, haystack: &str) -> bool {
        self.matches_folded(&haystack.to_lowercase())
    }
}

impl Term {
    /// Evaluates the term against an already lower-cased haystack.
    fn matches_folded(&self, haystack: &str) -> bool {
        match self {
            Self::Literal(lit) => haystack.contains(lit.needle()),
            Self::Node(node) => node.matches_folded(haystack),
        }
    }
}

impl Query {
    /// Returns true if the haystack satisfies the query.
    pub fn matches(&self, haystack: &str) -> bool {
        self.root().matches(haystack)
    }

    /// Yields the haystacks that satisfy the query, in order.
    pub fn filter<I, S>(&self, haystacks: I) -> impl Iterator<Item = S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        haystacks
            .into_iter()
            .filter(move |haystack| self.matches(haystack.as_ref()))
    }
}
