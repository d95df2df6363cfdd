//! # tally
//!
//! tally is a calculator for arithmetic expressions with variables.
//! It tokenizes, parses and evaluates `;`-separated statements such as
//! `r = 2; pi = 3.14159; pi * r ** 2`, keeping variables alive between lines.
//!
//! All arithmetic is done in `f64`. Any value whose magnitude reaches `2^53` is
//! rejected rather than silently rounded.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::StatementError, interpreter::session::Session};

/// Defines the structure of parsed statements.
///
/// This module declares the `Expr` enum, the tree built by the parser and
/// walked by the evaluator, together with its prefix and infix renderings.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase, each carrying enough detail to point at
///   the problem.
/// - Wraps the first failure of a batch with the statement it came from.
pub mod error;
/// Runs statements from source text to values.
///
/// This module ties together the operator registry, lexer, parser, evaluator
/// and session.
pub mod interpreter;
/// Numeric helpers shared by the evaluator and the session.
pub mod util;

/// Runs a batch of statements in a fresh session and returns its results.
///
/// This is a shortcut for [`Session::run`] when no variables need to survive
/// the call.
///
/// # Errors
/// Returns the first statement that fails to lex, parse or evaluate.
///
/// # Examples
/// ```
/// use tally::get_results;
///
/// assert_eq!(get_results("1 + 2 * 3").unwrap(), vec![7.0]);
/// assert_eq!(get_results("a = 2; b = 3; a + b; a * b").unwrap(), vec![5.0, 6.0]);
///
/// // `x` is not defined.
/// assert!(get_results("y = x + 1").is_err());
/// ```
pub fn get_results(source: &str) -> Result<Vec<f64>, StatementError> {
    Session::new().run(source)
}
