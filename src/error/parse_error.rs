use thiserror::Error;

use crate::interpreter::operator::Operator;

/// Represents all errors that can occur while parsing a token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token in a position where it cannot appear.
    #[error("Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
    },
    /// A `)` closes a parenthesis that was never opened.
    #[error("Missing left parenthesis.")]
    MissingLeftParenthesis,
    /// A `(` was never closed.
    #[error("Missing right parenthesis.")]
    MissingRightParenthesis,
    /// A prefix operator is not followed by an operand.
    #[error("Missing operand after prefix operator '{operator}'.")]
    MissingPrefixOperand {
        /// The prefix operator.
        operator: Operator,
    },
    /// An infix operator lacks its left or right operand.
    #[error("Missing {side} operand for operator '{operator}'.")]
    MissingOperand {
        /// The infix operator.
        operator: Operator,
        /// `"left"` or `"right"`.
        side:     &'static str,
    },
    /// Parentheses, prefix operators or operator chains nest too deeply to
    /// be parsed and evaluated safely.
    #[error("Expression is nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit: usize,
    },
    /// The left-hand side of `=` is not a plain variable name.
    #[error("Cannot assign to '{target}', expected a variable name.")]
    InvalidAssignmentTarget {
        /// The rendered left-hand side.
        target: String,
    },
}
