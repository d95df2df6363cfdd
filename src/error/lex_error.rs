use thiserror::Error;

/// Represents all errors that can occur while tokenizing a statement.
///
/// Columns are 1-based and count characters of the statement after all
/// whitespace has been removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that starts no operator, number or variable name.
    #[error("Illegal character '{character}' at column {column}.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        column:    usize,
    },
    /// A numeric literal was malformed, usually because of a second `.`.
    #[error("Invalid number '{literal}' at column {column}.")]
    MalformedNumber {
        /// The literal accumulated so far, including the offending character.
        literal: String,
        /// Where the literal starts.
        column:  usize,
    },
}
