//! Query expression tree.
//!
//! A parsed query is a tree of AND/OR nodes whose leaves are literal terms. Bracket groups
//! appear as nested nodes in the same position a literal would occupy.

use std::fmt;

use crate::validate::Separators;

/// A literal term that a haystack must (AND) or may (OR) contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// Trimmed text as written in the query.
    text: String,
    /// Lower-cased text used for matching.
    needle: String,
}

impl Literal {
    /// Creates a literal from its source text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let needle = text.to_lowercase();
        Self { text, needle }
    }

    /// The text as written in the query.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The lower-cased text used for containment tests.
    pub(crate) fn needle(&self) -> &str {
        &self.needle
    }
}

/// One entry in a node's term list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A leaf substring.
    Literal(Literal),
    /// A nested sub-expression (an AND inside an OR branch, or a bracket group).
    Node(QueryNode),
}

impl Term {
    /// Creates a literal term.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(Literal::new(text))
    }
}

impl From<QueryNode> for Term {
    fn from(node: QueryNode) -> Self {
        Self::Node(node)
    }
}

/// An operator node: every term must match (AND) or at least one must (OR).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Conjunction.
    And(Vec<Term>),
    /// Disjunction.
    Or(Vec<Term>),
}

impl QueryNode {
    /// The node's terms, in query order.
    pub fn terms(&self) -> &[Term] {
        match self {
            Self::And(terms) | Self::Or(terms) => terms,
        }
    }

    /// The operator keyword used in statements.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And(_) => "and",
            Self::Or(_) => "or",
        }
    }

    /// Renders the node as a parenthesized statement, e.g. `(this and (that or other))`.
    ///
    /// The output is semantically equivalent to the query, not a copy of its text. It re-parses
    /// (with ` or ` and ` and ` as separators) only while it has at most one bracket level, i.e.
    /// for queries that use a single operator and no groups. A mixed query such as `a, b & c`
    /// renders as `(a or (b and c))`, which nests brackets; use
    /// [`to_query_string`](Self::to_query_string) for a form that always re-parses.
    pub fn to_statement(&self) -> String {
        let parts: Vec<String> = self
            .terms()
            .iter()
            .map(|term| match term {
                Term::Literal(lit) => lit.text().to_string(),
                Term::Node(node) => node.to_statement(),
            })
            .collect();
        format!("({})", parts.join(&format!(" {} ", self.keyword())))
    }

    /// Renders the node as a query string that parses back into the same tree.
    ///
    /// OR branches are written without brackets since OR binds loosest. Nodes nested under an
    /// AND, and OR nodes nested under an OR, are written as bracket groups, placed directly
    /// after their separator. Only trees produced by the parser are guaranteed to re-parse, as
    /// they never need more than one bracket level.
    pub fn to_query_string(&self, separators: &Separators) -> String {
        match self {
            Self::Or(terms) => {
                let parts: Vec<String> = terms
                    .iter()
                    .map(|term| match term {
                        Term::Literal(lit) => lit.text().to_string(),
                        Term::Node(node @ Self::And(inner)) if inner.len() <= 1 => {
                            // A short AND branch keeps its separator so it stays a nested node.
                            format!("{}{}", node.to_query_string(separators), separators.and())
                        }
                        Term::Node(node @ Self::And(_)) => node.to_query_string(separators),
                        Term::Node(node @ Self::Or(_)) => {
                            format!("({})", node.to_query_string(separators))
                        }
                    })
                    .collect();
                join_parts(&parts, separators.or(), false)
            }
            Self::And(terms) => {
                let parts: Vec<String> = terms
                    .iter()
                    .map(|term| match term {
                        Term::Literal(lit) => lit.text().to_string(),
                        Term::Node(node) => format!("({})", node.to_query_string(separators)),
                    })
                    .collect();
                join_parts(&parts, separators.and(), true)
            }
        }
    }

    /// Formats the node as an indented tree.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::And(_) => writeln!(f, "{prefix}And")?,
            Self::Or(_) => writeln!(f, "{prefix}Or")?,
        }
        for term in self.terms() {
            match term {
                Term::Literal(lit) => writeln!(f, "{prefix}  Literal({:?})", lit.text())?,
                Term::Node(node) => node.fmt_tree(f, indent + 1)?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Joins rendered terms with a separator, padding it with spaces where it lacks whitespace.
///
/// A part that opens a bracket group is glued to the separator before it, since a group must
/// follow its separator directly.
fn join_parts(parts: &[String], separator: &str, leading: bool) -> String {
    let mut out = String::new();
    for (idx, part) in parts.iter().enumerate() {
        if idx > 0 {
            let group = part.starts_with('(');
            if leading && !group && !separator.starts_with(char::is_whitespace) {
                out.push(' ');
            }
            out.push_str(separator);
            if !group && !separator.ends_with(char::is_whitespace) {
                out.push(' ');
            }
        }
        out.push_str(part);
    }
    out
}

/// A parsed query string.
///
/// Built once and never mutated; it can be matched against any number of haystacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The query string this was parsed from.
    source: String,
    /// The single top-level node.
    root: QueryNode,
}

impl Query {
    /// Wraps a root node parsed from `source`.
    pub(crate) fn new(source: impl Into<String>, root: QueryNode) -> Self {
        Self {
            source: source.into(),
            root,
        }
    }

    /// The query string this was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The top-level node.
    pub fn root(&self) -> &QueryNode {
        &self.root
    }

    /// Renders the query as a parenthesized statement.
    pub fn to_statement(&self) -> String {
        self.root.to_statement()
    }

    /// Renders the query as a re-parseable query string using the given separators.
    pub fn to_query_string(&self, separators: &Separators) -> String {
        self.root.to_query_string(separators)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_tree(f, 0)
    }
}
