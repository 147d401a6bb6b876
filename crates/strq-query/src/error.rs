//! Error types for query validation and parsing.
//!
//! Every failure is reported synchronously from the call that triggered parsing. Errors carry
//! the offending query string (when there is one) so they can be displayed with a caret under
//! the position that caused them.

use std::{error, fmt};

use thiserror::Error;

/// Which of the two separators an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorRole {
    /// The OR separator (lowest precedence).
    Or,
    /// The AND separator.
    And,
}

impl fmt::Display for SeparatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Or => write!(f, "OR"),
            Self::And => write!(f, "AND"),
        }
    }
}

/// The specific kind of query error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryErrorKind {
    /// A separator contains a reserved structural character.
    #[error("illegal character '{character}' chosen for the {role} separator")]
    IllegalSeparator {
        /// The separator that was rejected.
        role: SeparatorRole,
        /// The reserved character it contains.
        character: char,
    },

    /// The query string contains a reserved structural character.
    #[error("illegal character '{character}' in query string")]
    IllegalCharacter {
        /// The reserved character.
        character: char,
        /// Byte position of the character in the query.
        position: usize,
    },

    /// A separator cannot be used to split a query.
    #[error("invalid {role} separator {separator:?}: {reason}")]
    InvalidSeparator {
        /// The separator that was rejected.
        role: SeparatorRole,
        /// The separator text.
        separator: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A bracket group is glued to free text before it.
    #[error("bracket group not preceded by a separator")]
    UnseparatedBracket {
        /// Byte position of the opening bracket.
        position: usize,
    },

    /// A bracket group is glued to free text after it.
    #[error("bracket group not followed by a separator")]
    TrailingText {
        /// Byte position of the first character after the group.
        position: usize,
    },

    /// An opening bracket has no closing bracket.
    #[error("missing closing bracket")]
    UnclosedBracket {
        /// Byte position of the opening bracket.
        position: usize,
    },

    /// A bracket group contains another bracket group.
    #[error("nested brackets are not supported")]
    NestedBracket {
        /// Byte position of the inner opening bracket.
        position: usize,
    },

    /// A closing bracket without a matching opening bracket.
    #[error("unexpected closing bracket")]
    UnexpectedClosingBracket {
        /// Byte position of the closing bracket.
        position: usize,
    },
}

impl QueryErrorKind {
    /// Byte position in the query string, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::IllegalSeparator { .. } | Self::InvalidSeparator { .. } => None,
            Self::IllegalCharacter { position, .. }
            | Self::UnseparatedBracket { position }
            | Self::TrailingText { position }
            | Self::UnclosedBracket { position }
            | Self::NestedBracket { position }
            | Self::UnexpectedClosingBracket { position } => Some(*position),
        }
    }
}

/// A query error with optional query context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: QueryErrorKind,
    /// The original query string (if available).
    pub query: Option<String>,
}

impl QueryError {
    /// Creates an error without query context.
    pub fn new(kind: QueryErrorKind) -> Self {
        Self { kind, query: None }
    }

    /// Creates an error pointing into the given query string.
    pub fn at(kind: QueryErrorKind, query: impl Into<String>) -> Self {
        Self {
            kind,
            query: Some(query.into()),
        }
    }

    /// Sets the query string for this error.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// True for reserved-character errors in a separator or the query string.
    pub fn is_illegal_character(&self) -> bool {
        matches!(
            self.kind,
            QueryErrorKind::IllegalSeparator { .. } | QueryErrorKind::IllegalCharacter { .. }
        )
    }

    /// True for malformed queries (bracket placement, unterminated or nested groups).
    pub fn is_invalid_query(&self) -> bool {
        matches!(
            self.kind,
            QueryErrorKind::UnseparatedBracket { .. }
                | QueryErrorKind::TrailingText { .. }
                | QueryErrorKind::UnclosedBracket { .. }
                | QueryErrorKind::NestedBracket { .. }
                | QueryErrorKind::UnexpectedClosingBracket { .. }
        )
    }

    /// Returns a suggestion for common errors.
    pub fn suggestion(&self) -> Option<&'static str> {
        match &self.kind {
            QueryErrorKind::IllegalSeparator { .. } | QueryErrorKind::IllegalCharacter { .. } => {
                Some("the characters { } [ ] are reserved and cannot be used")
            }
            QueryErrorKind::UnseparatedBracket { .. } | QueryErrorKind::TrailingText { .. } => {
                Some("put a separator between a bracket group and adjacent terms, e.g. 'a &(b, c)'")
            }
            QueryErrorKind::UnclosedBracket { .. } => {
                Some("add a closing bracket ) to match the opening one")
            }
            QueryErrorKind::NestedBracket { .. } => {
                Some("bracket groups may only be one level deep")
            }
            QueryErrorKind::InvalidSeparator { .. }
            | QueryErrorKind::UnexpectedClosingBracket { .. } => None,
        }
    }
}

impl From<QueryErrorKind> for QueryError {
    fn from(kind: QueryErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "query error: {}", self.kind)?;

        if let Some(query) = &self.query {
            write!(f, "\n  {query}")?;
            if let Some(pos) = self.kind.position() {
                // Caret column counts characters, not bytes.
                let clamped = pos.min(query.len());
                let column = query
                    .get(..clamped)
                    .map_or(clamped, |prefix| prefix.chars().count());
                write!(f, "\n  {}^", " ".repeat(column))?;
            }
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "\nhint: {suggestion}")?;
        }

        Ok(())
    }
}

impl error::Error for QueryError {}
