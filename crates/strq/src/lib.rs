//! strq: boolean substring queries on the command line.
//!
//! strq filters lines of text with queries such as `(foo, bar)&(spam, eggs)`: `&` requires
//! every term, `,` requires any term, and one level of brackets groups terms. Matching is
//! case-insensitive substring containment. Separators and named queries can be set in
//! `.strq.toml` files.

#![warn(missing_docs)]

pub mod cli;
