/// The operator module describes every operator the calculator knows.
///
/// A single static table lists each operator's literal, fixity, binding powers,
/// lexing rule and evaluation rule. The registry built over it drives both the
/// lexer (recognising operator literals, longest first) and the parser
/// (binding powers decide precedence and associativity).
///
/// # Responsibilities
/// - Defines the `Operator` enum and the operator table.
/// - Indexes operators by literal and by leading byte.
/// - Implements the arithmetic of each operator.
pub mod operator;
/// The lexer module tokenizes statements for further parsing.
///
/// The lexer removes whitespace and produces a stream of tokens: operators,
/// numeric literals, variable names and an end marker.
///
/// # Responsibilities
/// - Recognises operators through the registry before anything else.
/// - Reads numeric literals and variable names.
/// - Reports illegal characters and malformed numbers.
pub mod lexer;
/// The parser module builds expression trees from tokens.
///
/// A precedence-climbing (Pratt) parser: every recursive step is given a
/// minimum binding power and stops at the first operator that binds more
/// weakly, which yields precedence and associativity from the operator table
/// alone.
///
/// # Responsibilities
/// - Converts tokens into `Expr` trees.
/// - Rewrites prefix `-x`/`+x` as `0 - x`/`0 + x`.
/// - Detects unbalanced parentheses and missing operands.
pub mod parser;
/// The evaluator module computes the value of expression trees.
///
/// # Responsibilities
/// - Holds the variable environment.
/// - Evaluates trees bottom-up, applying operator rules.
/// - Rejects any value that reaches the safe-integer boundary.
pub mod evaluator;
/// The session module runs whole lines of input.
///
/// # Responsibilities
/// - Splits a line into `;`-separated statements.
/// - Binds assignments in the session's environment.
/// - Collects the results of all other statements, stopping at the first error.
pub mod session;
