use std::fmt;

use logos::Logos;

use crate::{
    error::LexError,
    interpreter::operator::{Operator, OperatorRegistry},
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token of a statement.
///
/// Tokens are immutable values. Numeric literals keep their source text and are
/// only converted to `f64` by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal, such as `42`, `3.14`, `.5` or `1.`.
    Number(String),
    /// Variable name, such as `x` or `_total2`.
    Variable(String),
    /// Any operator from the registry, parentheses included.
    Operator(Operator),
    /// Marks the end of the statement.
    End,
}

impl Token {
    /// Returns `true` for numbers and variables.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Variable(_))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) | Self::Variable(literal) => f.write_str(literal),
            Self::Operator(op) => write!(f, "{op}"),
            Self::End => f.write_str("EOF"),
        }
    }
}

/// Atoms recognised once no operator matches at the cursor.
///
/// A number takes digits and at most one `.`; the lexer checks afterwards
/// whether another `.` follows.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Atom {
    /// `12`, `12.`, `12.5`, `.5`
    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]+")]
    Number,
    /// `x`, `_tmp`, `rate2`
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
}

/// Splits a statement into tokens.
///
/// All whitespace is removed first, so `1 + 2` and `1+2` produce the same
/// tokens. At each position the operator registry is consulted first;
/// otherwise a digit or a `.` followed by a digit starts a number, and a letter
/// or `_` starts a variable name. A leading `-` is always an operator token:
/// telling negation from subtraction is left to the parser.
///
/// The returned tokens always end with [`Token::End`], which is the only token
/// for an empty statement.
///
/// # Errors
/// - `LexError::IllegalCharacter` for a character that starts no token.
/// - `LexError::MalformedNumber` for a number with a second `.` (reported with
///   the text read so far plus that `.`), or a `.` not followed by a digit.
///
/// # Example
/// ```
/// use tally::interpreter::{
///     lexer::{Token, tokenize},
///     operator::Operator,
/// };
///
/// let tokens = tokenize("x = 2 ** .5").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Variable("x".to_string()),
///                 Token::Operator(Operator::Assign),
///                 Token::Number("2".to_string()),
///                 Token::Operator(Operator::Power),
///                 Token::Number(".5".to_string()),
///                 Token::End]);
///
/// assert!(tokenize("1.2.3").is_err());
/// ```
pub fn tokenize(input: &str) -> LexResult<Vec<Token>> {
    let input: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let registry = OperatorRegistry::global();

    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < input.len() {
        if let Some((op, next)) = registry.lex(&input, cursor) {
            tokens.push(Token::Operator(op));
            cursor = next;
            continue;
        }

        let (token, next) = lex_atom(&input, cursor)?;
        tokens.push(token);
        cursor = next;
    }

    tokens.push(Token::End);
    Ok(tokens)
}

/// Reads a number or a variable name starting at `cursor`.
fn lex_atom(input: &str, cursor: usize) -> LexResult<(Token, usize)> {
    let rest = &input[cursor..];
    let column = || input[..cursor].chars().count() + 1;
    let mut lexer = Atom::lexer(rest);

    match lexer.next() {
        Some(Ok(Atom::Number)) => {
            let literal = lexer.slice();
            let next = cursor + lexer.span().end;
            if input[next..].starts_with('.') {
                return Err(LexError::MalformedNumber { literal: format!("{literal}."),
                                                       column:  column(), });
            }
            Ok((Token::Number(literal.to_string()), next))
        },
        Some(Ok(Atom::Identifier)) => {
            Ok((Token::Variable(lexer.slice().to_string()), cursor + lexer.span().end))
        },
        Some(Err(())) | None => match rest.chars().next() {
            Some('.') => Err(LexError::MalformedNumber { literal: ".".to_string(),
                                                         column:  column(), }),
            Some(character) => Err(LexError::IllegalCharacter { character,
                                                                column: column() }),
            None => unreachable!("lex_atom is only called before the end of input"),
        },
    }
}
