use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, operator::Operator},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts, counted both as parser recursion
/// (parentheses, prefix operators, right-hand sides) and as height of the
/// resulting tree.
pub const MAX_NESTING_DEPTH: usize = 512;

static END: Token = Token::End;

/// Parses a token stream into an expression tree.
///
/// This is the entry point for expression parsing. It returns `Ok(None)` when
/// the tokens hold no expression at all (an empty statement, or `()`), which
/// callers treat as "nothing to evaluate" rather than as a failure.
///
/// # Parameters
/// - `tokens`: Tokens produced by [`tokenize`](crate::interpreter::lexer::tokenize).
///   A missing trailing [`Token::End`] is implied.
///
/// # Errors
/// - `MissingLeftParenthesis` / `MissingRightParenthesis` for unbalanced
///   parentheses.
/// - `MissingPrefixOperand` / `MissingOperand` when an operator lacks an
///   operand.
/// - `UnexpectedToken` for tokens that cannot appear where they do.
/// - `NestingTooDeep` when the input nests deeper than [`MAX_NESTING_DEPTH`].
///
/// # Example
/// ```
/// use tally::interpreter::{lexer::tokenize, parser::parse};
///
/// let tree = parse(&tokenize("1 + 2 * 3").unwrap()).unwrap().unwrap();
/// assert_eq!(tree.to_string(), "(+ 1 (* 2 3))");
///
/// assert!(parse(&tokenize("").unwrap()).unwrap().is_none());
/// assert!(parse(&tokenize("(1 + 2").unwrap()).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Option<Expr>> {
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_bp(0.0)?.map(|node| node.expr);

    // A `)` consumed as a leading token without any `(` to match.
    if parser.balance < 0 {
        return Err(ParseError::MissingLeftParenthesis);
    }

    match parser.peek() {
        Token::End => {
            tracing::trace!(expr = ?expr.as_ref().map(ToString::to_string), "parsed");
            Ok(expr)
        },
        token => Err(ParseError::UnexpectedToken { token: token.to_string() }),
    }
}

/// A parsed subtree and its height.
struct Node {
    expr:   Expr,
    height: usize,
}

impl Node {
    const fn leaf(expr: Expr) -> Self {
        Self { expr, height: 1 }
    }

    /// Builds an operation node, refusing trees taller than
    /// [`MAX_NESTING_DEPTH`].
    fn operation(op: Operator, left: Self, right: Self) -> ParseResult<Self> {
        let height = 1 + left.height.max(right.height);
        if height > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
        }
        Ok(Self { expr: Expr::operation(op, left.expr, right.expr),
                  height })
    }
}

/// Precedence-climbing parser over a token slice.
///
/// Holds the read position, the parenthesis balance (incremented when a `(`
/// is consumed, decremented when a `)` is consumed) and the current recursion
/// depth.
struct Parser<'a> {
    tokens:  &'a [Token],
    cursor:  usize,
    balance: i32,
    depth:   usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               cursor: 0,
               balance: 0,
               depth: 0 }
    }

    fn peek(&self) -> &'a Token {
        self.tokens.get(self.cursor).unwrap_or(&END)
    }

    /// Consumes a token. Past the end, keeps returning `Token::End`.
    fn next(&mut self) -> &'a Token {
        let token = self.peek();
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
        token
    }

    /// Parses an expression whose operators all bind at least as tightly as
    /// `min_bp`, one recursion level deeper than the caller.
    fn parse_bp(&mut self, min_bp: f32) -> ParseResult<Option<Node>> {
        if self.depth == MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
        }

        self.depth += 1;
        let node = self.climb(min_bp);
        self.depth -= 1;
        node
    }

    /// Body of [`parse_bp`](Self::parse_bp).
    ///
    /// The first token seeds the left-hand side. Then, while the next infix
    /// operator's left binding power reaches `min_bp`, its right-hand side is
    /// parsed with the operator's right binding power and folded into the
    /// left-hand side. Weaker operators are left for an enclosing call.
    fn climb(&mut self, min_bp: f32) -> ParseResult<Option<Node>> {
        let mut lhs = match self.next() {
            Token::Number(literal) => Some(Node::leaf(Expr::Number(parse_number(literal)?))),
            Token::Variable(name) => Some(Node::leaf(Expr::Variable(name.clone()))),
            Token::Operator(Operator::LeftParen) => {
                self.balance += 1;
                let inner = self.parse_bp(0.0)?;
                if matches!(self.next(), Token::Operator(Operator::RightParen)) {
                    self.balance -= 1;
                } else if self.balance > 0 {
                    return Err(ParseError::MissingRightParenthesis);
                }
                inner
            },
            Token::Operator(Operator::RightParen) => {
                self.balance -= 1;
                None
            },
            Token::Operator(op) if op.is_prefix() => Some(self.parse_prefix(*op)?),
            Token::End => return Ok(None),
            token => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
        };

        loop {
            let op = match self.peek() {
                Token::End => break,
                Token::Operator(Operator::RightParen) => {
                    if self.balance <= 0 {
                        return Err(ParseError::MissingLeftParenthesis);
                    }
                    break;
                },
                Token::Operator(op) => *op,
                token => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
            };

            let Some((l_bp, r_bp)) = op.infix_binding_power() else {
                return Err(ParseError::UnexpectedToken { token: op.to_string() });
            };
            if l_bp < min_bp {
                break;
            }

            self.next();
            let left = lhs.take()
                          .ok_or(ParseError::MissingOperand { operator: op,
                                                              side:     "left", })?;
            let right = self.parse_bp(r_bp)?
                            .ok_or(ParseError::MissingOperand { operator: op,
                                                                side:     "right", })?;
            lhs = Some(Node::operation(op, left, right)?);
        }

        Ok(lhs)
    }

    /// Parses the operand of a prefix operator and rewrites `op x` as
    /// `0 op x`.
    ///
    /// The operand is parsed with the prefix binding power as its minimum, so
    /// it absorbs every tighter infix operator: `-2 ** 3` is `-(2 ** 3)`, while
    /// `-2 * 3` is `(-2) * 3`.
    fn parse_prefix(&mut self, op: Operator) -> ParseResult<Node> {
        let Some(r_bp) = op.prefix_binding_power() else {
            return Err(ParseError::UnexpectedToken { token: op.to_string() });
        };
        let operand = self.parse_bp(r_bp)?
                          .ok_or(ParseError::MissingPrefixOperand { operator: op })?;
        Node::operation(op, Node::leaf(Expr::Number(0.0)), operand)
    }
}

/// Converts the text of a numeric token.
///
/// The lexer only produces digit runs with at most one `.`, all of which parse.
fn parse_number(literal: &str) -> ParseResult<f64> {
    literal.parse()
           .map_err(|_| ParseError::UnexpectedToken { token: literal.to_string() })
}
