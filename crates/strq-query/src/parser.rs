//! Query parser.
//!
//! Turns a query string into a [`Query`] in a single left-to-right scan. The scanner splits the
//! input into text runs, separators, and bracket groups; each group's contents are parsed into
//! a node as soon as the group is closed and take the place of a term in the outer clause.
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`, one level only
//! 2. AND separator (default `&`)
//! 3. OR separator (default `,`)
//!
//! Blank terms, e.g. from a trailing separator, are dropped. A bracket group must open the
//! query or follow a separator directly: `a &(b, c)` is a group, `a & (b, c)` is an error.
//! Whitespace after a group's closing bracket is ignored.

use std::mem;

use log::{debug, trace};

use crate::{
    ast::{Query, QueryNode, Term},
    error::{QueryError, QueryErrorKind},
    validate::{Separators, validate_query},
};

/// A separator found by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    /// OR separator.
    Or,
    /// AND separator.
    And,
}

/// One lexical piece of a clause.
#[derive(Debug)]
enum Piece {
    /// Free text between separators (untrimmed).
    Text(String),
    /// An already-parsed bracket group.
    Group(QueryNode),
    /// An OR or AND separator.
    Separator(Operator),
}

/// Index-based scanner over a query string.
struct Scanner<'a> {
    /// The string being scanned.
    input: &'a str,
    /// Separators to recognize.
    separators: &'a Separators,
    /// Current byte position in `input`.
    position: usize,
    /// Text collected since the last separator or group.
    text: String,
    /// Whether the last non-whitespace item was a bracket group.
    after_group: bool,
    /// Pieces produced so far.
    pieces: Vec<Piece>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner at the start of `input`.
    fn new(input: &'a str, separators: &'a Separators) -> Self {
        Self {
            input,
            separators,
            position: 0,
            text: String::new(),
            after_group: false,
            pieces: Vec::new(),
        }
    }

    /// Creates an error pointing into the scanned input.
    fn error(&self, kind: QueryErrorKind) -> QueryError {
        QueryError::at(kind, self.input)
    }

    /// Scans the whole input into pieces.
    fn scan(mut self) -> Result<Vec<Piece>, QueryError> {
        while self.position < self.input.len() {
            if let Some((operator, len)) = self.separator_at() {
                self.flush_text();
                self.pieces.push(Piece::Separator(operator));
                self.position += len;
                self.after_group = false;
                continue;
            }

            let Some(ch) = self.input[self.position..].chars().next() else {
                break;
            };

            match ch {
                '(' => self.read_group()?,
                ')' => {
                    return Err(self.error(QueryErrorKind::UnexpectedClosingBracket {
                        position: self.position,
                    }));
                }
                _ => {
                    if self.after_group && !ch.is_whitespace() {
                        return Err(self.error(QueryErrorKind::TrailingText {
                            position: self.position,
                        }));
                    }
                    self.text.push(ch);
                    self.position += ch.len_utf8();
                }
            }
        }

        self.flush_text();
        Ok(self.pieces)
    }

    /// Returns the separator starting at the current position and its byte length.
    ///
    /// The longer separator is tried first so one separator may be a prefix of the other.
    fn separator_at(&self) -> Option<(Operator, usize)> {
        let rest = &self.input[self.position..];
        let or = (Operator::Or, self.separators.or());
        let and = (Operator::And, self.separators.and());
        let ordered = if and.1.len() > or.1.len() {
            [and, or]
        } else {
            [or, and]
        };

        ordered
            .into_iter()
            .find(|(_, sep)| rest.starts_with(sep))
            .map(|(operator, sep)| (operator, sep.len()))
    }

    /// Reads a bracket group starting at the current `(` and parses its contents.
    fn read_group(&mut self) -> Result<(), QueryError> {
        let start = self.position;

        // Only leading whitespace of the whole query may sit between a separator and `(`.
        let at_start = self.pieces.is_empty() && self.text.trim().is_empty();
        if self.after_group || !(self.text.is_empty() || at_start) {
            return Err(self.error(QueryErrorKind::UnseparatedBracket { position: start }));
        }

        // No depth counting: the first `)` closes the group.
        let Some(close) = self.input[start + 1..].find(')').map(|i| start + 1 + i) else {
            return Err(self.error(QueryErrorKind::UnclosedBracket { position: start }));
        };

        let contents = &self.input[start + 1..close];
        if let Some(inner) = contents.find('(') {
            return Err(self.error(QueryErrorKind::NestedBracket {
                position: start + 1 + inner,
            }));
        }

        trace!("bracket group at {start}..={close}: {contents:?}");
        let node = parse_clause(contents, self.separators)?;

        self.text.clear();
        self.pieces.push(Piece::Group(node));
        self.position = close + 1;
        self.after_group = true;
        Ok(())
    }

    /// Moves collected text into a piece.
    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.pieces.push(Piece::Text(mem::take(&mut self.text)));
        }
    }
}

/// Parses a clause (query text or group contents) into a single node.
fn parse_clause(input: &str, separators: &Separators) -> Result<QueryNode, QueryError> {
    let pieces = Scanner::new(input, separators).scan()?;
    Ok(build_node(pieces))
}

/// Assembles scanned pieces into a node: split on OR first, then on AND within each branch.
fn build_node(pieces: Vec<Piece>) -> QueryNode {
    let has_or = pieces
        .iter()
        .any(|p| matches!(p, Piece::Separator(Operator::Or)));
    if !has_or {
        return QueryNode::And(collect_terms(pieces));
    }

    let mut branches: Vec<Vec<Piece>> = vec![Vec::new()];
    for piece in pieces {
        match piece {
            Piece::Separator(Operator::Or) => branches.push(Vec::new()),
            other => {
                if let Some(branch) = branches.last_mut() {
                    branch.push(other);
                }
            }
        }
    }

    let mut terms = Vec::new();
    for branch in branches {
        let has_and = branch
            .iter()
            .any(|p| matches!(p, Piece::Separator(Operator::And)));
        let branch_terms = collect_terms(branch);
        if has_and {
            // An AND branch with no terms stays as an empty (always true) node.
            terms.push(Term::Node(QueryNode::And(branch_terms)));
        } else {
            terms.extend(branch_terms);
        }
    }

    QueryNode::Or(terms)
}

/// Converts text and group pieces into terms, dropping blank text and separators.
fn collect_terms(pieces: Vec<Piece>) -> Vec<Term> {
    pieces
        .into_iter()
        .filter_map(|piece| match piece {
            Piece::Text(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| Term::literal(trimmed))
            }
            Piece::Group(node) => Some(Term::Node(node)),
            Piece::Separator(_) => None,
        })
        .collect()
}

/// Parses a query string into a [`Query`].
///
/// Fails if the query contains a reserved character or a malformed bracket group. A blank
/// query parses into an empty AND node.
pub fn parse(input: &str, separators: &Separators) -> Result<Query, QueryError> {
    validate_query(input)?;
    let root = parse_clause(input, separators)?;
    debug!("parsed {input:?} as {}", root.to_statement());
    Ok(Query::new(input, root))
}
