/// Lexing errors.
///
/// Raised while turning a statement into tokens: characters that belong to no
/// token and numeric literals with more than one decimal point.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building an expression tree
/// from tokens. Parse errors include unbalanced parentheses, tokens in a
/// position where they make no sense, and operators missing an operand.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero, unknown variables and values outside the safe integer
/// range of an `f64`.
pub mod runtime_error;

use thiserror::Error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a single statement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The statement could not be split into tokens.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens did not form a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was well formed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The first failing statement of a `;`-separated batch.
///
/// Statements after the failing one are never run, while the statements before
/// it have already taken effect.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Error in statement {index} `{statement}`: {kind}")]
pub struct StatementError {
    /// 1-based position of the statement in the batch, counting empty ones.
    pub index:     usize,
    /// The trimmed statement text.
    pub statement: String,
    /// What went wrong.
    #[source]
    pub kind:      Error,
}
