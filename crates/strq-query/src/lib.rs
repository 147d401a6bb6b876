//! Boolean substring queries for strq.
//!
//! A query combines literal terms with two separators and one level of grouping:
//!
//! - **AND**: `this & that` - every term must appear
//! - **OR**: `this, that` - at least one term must appear
//! - **Grouping**: `(foo, bar)&(spam, eggs)` - a group acts as a single term and must open
//!   the query or follow a separator directly
//!
//! AND binds tighter than OR, so `a, b & c` means `a` or (`b` and `c`). Terms match by
//! case-insensitive substring containment. Both separators are configurable; the characters
//! `{ } [ ]` are reserved.
//!
//! # Example
//!
//! ```
//! use strq_query::{Separators, parse};
//!
//! let query = parse("(foo, bar)&(spam, eggs)", &Separators::default()).unwrap();
//! assert!(query.matches("FOO and eggs"));
//! assert!(!query.matches("foo only"));
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod matcher;
mod parser;
mod tool;
mod validate;

pub use ast::{Literal, Query, QueryNode, Term};
pub use error::{QueryError, QueryErrorKind, SeparatorRole};
pub use parser::parse;
pub use tool::QueryTool;
pub use validate::{
    DEFAULT_AND_SEPARATOR, DEFAULT_OR_SEPARATOR, RESERVED_CHARS, Separators, validate_query,
};
