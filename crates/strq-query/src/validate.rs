//! Separator and query-string validation.
//!
//! Runs before any parsing. The characters `{ } [ ]` are reserved and may appear neither in a
//! separator nor in a query string.

use log::trace;

use crate::error::{QueryError, QueryErrorKind, SeparatorRole};

/// Characters reserved for structural use.
pub const RESERVED_CHARS: [char; 4] = ['{', '}', '[', ']'];

/// Default OR separator.
pub const DEFAULT_OR_SEPARATOR: &str = ",";

/// Default AND separator.
pub const DEFAULT_AND_SEPARATOR: &str = "&";

/// A validated pair of OR/AND separators.
///
/// Separators may be longer than one character (e.g. `" or "`), but must be non-blank, distinct,
/// and free of brackets and reserved characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Splits alternatives.
    or: String,
    /// Splits required terms.
    and: String,
}

impl Separators {
    /// Validates and creates a separator pair.
    pub fn new(or: impl Into<String>, and: impl Into<String>) -> Result<Self, QueryError> {
        let or = or.into();
        let and = and.into();

        check_separator(SeparatorRole::Or, &or)?;
        check_separator(SeparatorRole::And, &and)?;

        if or == and {
            return Err(QueryErrorKind::InvalidSeparator {
                role: SeparatorRole::And,
                separator: and,
                reason: "AND and OR separators must differ",
            }
            .into());
        }

        Ok(Self { or, and })
    }

    /// The OR separator.
    pub fn or(&self) -> &str {
        &self.or
    }

    /// The AND separator.
    pub fn and(&self) -> &str {
        &self.and
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            or: DEFAULT_OR_SEPARATOR.to_string(),
            and: DEFAULT_AND_SEPARATOR.to_string(),
        }
    }
}

/// Rejects a separator that is reserved or cannot split a query.
fn check_separator(role: SeparatorRole, separator: &str) -> Result<(), QueryError> {
    if let Some(character) = separator.chars().find(|c| RESERVED_CHARS.contains(c)) {
        return Err(QueryErrorKind::IllegalSeparator { role, character }.into());
    }

    let reason = if separator.is_empty() {
        "separator is empty"
    } else if separator.trim().is_empty() {
        "separator is only whitespace"
    } else if separator.contains(['(', ')']) {
        "separator contains a bracket"
    } else {
        return Ok(());
    };

    Err(QueryErrorKind::InvalidSeparator {
        role,
        separator: separator.to_string(),
        reason,
    }
    .into())
}

/// Rejects a query string containing a reserved character.
pub fn validate_query(input: &str) -> Result<(), QueryError> {
    match input
        .char_indices()
        .find(|(_, c)| RESERVED_CHARS.contains(c))
    {
        Some((position, character)) => {
            trace!("reserved character {character:?} at byte {position}");
            Err(QueryError::at(
                QueryErrorKind::IllegalCharacter {
                    character,
                    position,
                },
                input,
            ))
        }
        None => Ok(()),
    }
}
