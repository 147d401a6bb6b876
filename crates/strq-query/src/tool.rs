//! The owning query object.

use std::str::FromStr;

use log::debug;

use crate::{
    ast::Query,
    error::QueryError,
    parser::parse,
    validate::Separators,
};

/// Holds a query string, its separators, and the parsed [`Query`].
///
/// The query is parsed once on construction and again only when the query string is
/// reassigned, so it can be matched against any number of haystacks without re-parsing.
///
/// ```
/// use strq_query::{QueryTool, Separators};
///
/// let tool = QueryTool::new("(foo, bar)&(spam, eggs)", Separators::default()).unwrap();
/// assert!(tool.matches("Foo and eggs"));
/// assert!(!tool.matches("foo only"));
/// assert_eq!(tool.render(), "((foo or bar) and (spam or eggs))");
/// ```
#[derive(Debug, Clone)]
pub struct QueryTool {
    /// Separators used to parse every query string assigned to this tool.
    separators: Separators,
    /// The current query string.
    query_string: String,
    /// The parsed form of `query_string`.
    query: Query,
}

impl QueryTool {
    /// Parses `query_string` with the given separators.
    pub fn new(query_string: impl Into<String>, separators: Separators) -> Result<Self, QueryError> {
        let query_string = query_string.into();
        let query = parse(&query_string, &separators)?;
        Ok(Self {
            separators,
            query_string,
            query,
        })
    }

    /// Parses `query_string` with the default `,` (OR) and `&` (AND) separators.
    pub fn with_default_separators(query_string: impl Into<String>) -> Result<Self, QueryError> {
        Self::new(query_string, Separators::default())
    }

    /// Validates, separator-checks, and parses a query in one step.
    pub fn with_separators(
        query_string: impl Into<String>,
        or_separator: &str,
        and_separator: &str,
    ) -> Result<Self, QueryError> {
        Self::new(query_string, Separators::new(or_separator, and_separator)?)
    }

    /// Replaces the query string and its parsed form.
    ///
    /// On error the previous query is left in place.
    pub fn set_query_string(&mut self, query_string: impl Into<String>) -> Result<(), QueryError> {
        let query_string = query_string.into();
        let query = parse(&query_string, &self.separators)?;
        debug!("query replaced: {:?} -> {query_string:?}", self.query_string);
        self.query_string = query_string;
        self.query = query;
        Ok(())
    }

    /// Renders the current query as a parenthesized statement.
    pub fn render(&self) -> String {
        self.query.to_statement()
    }

    /// Returns true if the haystack satisfies the current query.
    pub fn matches(&self, haystack: &str) -> bool {
        self.query.matches(haystack)
    }

    /// The current query string.
    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// The parsed form of the current query string.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The separators this tool parses with.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}

impl FromStr for QueryTool {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::with_default_separators(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_and_match() {
        let tool = QueryTool::with_default_separators("this & that").unwrap();
        assert!(tool.matches("here is this and that"));
        assert!(!tool.matches("only this"));
        assert_eq!(tool.query_string(), "this & that");
    }

    #[test]
    fn custom_separators() {
        let tool = QueryTool::with_separators("rust or go and fast", " or ", " and ").unwrap();
        assert!(tool.matches("rust"));
        assert!(tool.matches("go is fast"));
        assert!(!tool.matches("go"));
        assert_eq!(tool.separators().or(), " or ");
    }

    #[test]
    fn illegal_separator_fails() {
        let err = QueryTool::with_separators("a", "{", "&").unwrap_err();
        assert!(err.is_illegal_character());
    }

    #[test]
    fn set_query_string_replaces() {
        let mut tool = QueryTool::with_default_separators("alpha").unwrap();
        assert!(tool.matches("alpha"));

        tool.set_query_string("beta, gamma").unwrap();
        assert_eq!(tool.query_string(), "beta, gamma");
        assert!(!tool.matches("alpha"));
        assert!(tool.matches("gamma"));
    }

    #[test]
    fn failed_set_keeps_previous_query() {
        let mut tool = QueryTool::with_default_separators("alpha").unwrap();

        let err = tool.set_query_string("x(foo,bar)").unwrap_err();
        assert!(err.is_invalid_query());
        let err = tool.set_query_string("a & [b]").unwrap_err();
        assert!(err.is_illegal_character());

        assert_eq!(tool.query_string(), "alpha");
        assert!(tool.matches("alpha"));
    }

    #[test]
    fn render_statement() {
        let tool: QueryTool = "a, b & c".parse().unwrap();
        assert_eq!(tool.render(), "(a or (b and c))");
    }

    #[test]
    fn shared_across_threads() {
        let tool = QueryTool::with_default_separators("needle").unwrap();
        std::thread::scope(|s| {
            for i in 0..4 {
                let tool = &tool;
                s.spawn(move || {
                    assert!(tool.matches(&format!("hay {i} NEEDLE hay")));
                });
            }
        });
    }
}
