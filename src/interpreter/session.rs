use tracing::debug;

use crate::{
    ast::Expr,
    error::{Error, ParseError, StatementError},
    interpreter::{evaluator::Context, lexer::tokenize, parser::parse},
    util::num::snap_to_integer,
};

/// Separates statements within one line of input.
pub const STATEMENT_DELIMITER: char = ';';

/// A calculator session.
///
/// Owns the variable environment, which persists across every batch run
/// through the same session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    context: Context,
}

impl Session {
    /// Starts a session with no variables bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables bound so far.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Runs a batch of `;`-separated statements.
    ///
    /// Statements are trimmed and empty ones skipped. An assignment
    /// `name = expr` stores its value in the session and produces no result;
    /// any other statement appends its value, snapped to the nearest integer
    /// when within `1e-10` of it.
    ///
    /// Processing stops at the first failing statement. Statements before it
    /// have already taken effect, statements after it are not run.
    ///
    /// # Errors
    /// Returns the failing statement together with its lexing, parsing or
    /// evaluation error.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::session::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.run("x = 10; y = x / 2; y + 3").unwrap(), vec![8.0]);
    /// assert_eq!(session.run("x * y").unwrap(), vec![50.0]);
    /// assert!(session.run("1 / 0; x = 1").is_err());
    /// assert_eq!(session.context().get_variable("x"), Some(10.0));
    /// ```
    pub fn run(&mut self, line: &str) -> Result<Vec<f64>, StatementError> {
        let mut results = Vec::new();

        for (index, statement) in line.split(STATEMENT_DELIMITER).map(str::trim).enumerate() {
            if statement.is_empty() {
                continue;
            }

            let result = self.run_statement(statement)
                             .map_err(|kind| StatementError { index: index + 1,
                                                              statement: statement.to_string(),
                                                              kind })?;
            results.extend(result);
        }

        Ok(results)
    }

    /// Runs one trimmed, non-empty statement.
    ///
    /// Returns `None` for assignments and statements holding no expression.
    fn run_statement(&mut self, statement: &str) -> Result<Option<f64>, Error> {
        debug!(input = statement, "statement");

        let tokens = tokenize(statement)?;
        debug!(tokens = ?tokens.iter().map(ToString::to_string).collect::<Vec<_>>(),
               "tokens");

        let Some(expr) = parse(&tokens)? else {
            return Ok(None);
        };
        debug!(expression = %expr, "expression");

        if let Some((target, value)) = expr.as_assignment() {
            self.assign(target, value)?;
            return Ok(None);
        }

        let value = snap_to_integer(self.context.eval(&expr)?);
        debug!(value, "evaluated");
        Ok(Some(value))
    }

    /// Evaluates `value` and binds it to `target`.
    ///
    /// In a chain such as `x = y = 3` the innermost assignment is performed
    /// first and its value passed outwards.
    fn assign(&mut self, target: &Expr, value: &Expr) -> Result<f64, Error> {
        let Some(name) = target.as_variable() else {
            return Err(ParseError::InvalidAssignmentTarget { target: target.to_string() }.into());
        };

        let value = match value.as_assignment() {
            Some((inner_target, inner_value)) => self.assign(inner_target, inner_value)?,
            None => self.context.eval(value)?,
        };

        debug!(name, value, "assigned");
        self.context.set_variable(name, value);
        Ok(value)
    }
}
