use crate::{
    ast::Expression,
    error::ParseError,
    interpreter::lexer::{Scanner, Token, TokenKind},
};

/// Handler for a token that starts an expression.
pub type PrefixParseFn<'src> = fn(&mut Parser<'src>) -> Option<Expression>;
/// Handler for a token that continues an expression, given its left operand.
pub type InfixParseFn<'src> = fn(&mut Parser<'src>, Expression) -> Option<Expression>;

/// Binding strength of operators, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that does not continue an expression.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// `-x` and `!x`
    Prefix,
    /// `f(x)` and `a[i]`
    Call,
}

impl Precedence {
    /// Returns the precedence a token has in infix position.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::{lexer::TokenKind, parser::core::Precedence};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::LBracket), Precedence::Call);
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen | TokenKind::LBracket => Self::Call,
            _ => Self::Lowest,
        }
    }
}

/// A precedence-climbing parser over a lazily scanned token stream.
///
/// The parser never stops at the first problem. Errors are recorded and
/// parsing resumes with the next statement, so callers must check
/// [`Parser::errors`] before evaluating the resulting program.
///
/// # Example
/// ```
/// use vabna::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new("let = 5; let y = 10;");
/// let program = parser.parse_program();
///
/// assert!(!parser.errors().is_empty());
/// assert_eq!(program.to_string(), "5;let y = 10;");
/// ```
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    pub(in crate::interpreter::parser) current: Token,
    pub(in crate::interpreter::parser) peek: Token,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser with its current and lookahead tokens primed.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut scanner = Scanner::new(source);
        let current = scanner.next_token();
        let peek = scanner.next_token();
        Self { scanner,
               current,
               peek,
               errors: Vec::new() }
    }

    /// Errors recorded so far, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Consumes the parser, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    /// Advances by one token.
    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        let next = self.scanner.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(in crate::interpreter::parser) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Advances if the lookahead token is `kind`; records an error otherwise.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.peek_error(kind);
            None
        }
    }

    pub(in crate::interpreter::parser) fn peek_error(&mut self, expected: TokenKind) {
        self.errors.push(ParseError::UnexpectedToken { expected,
                                                       found: self.peek.kind,
                                                       line: self.peek.line });
    }

    pub(in crate::interpreter::parser) fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub(in crate::interpreter::parser) const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) const fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    /// Parses an expression starting at the current token.
    ///
    /// The prefix handler for the current token produces the left operand.
    /// While the lookahead token binds tighter than `precedence`, the parser
    /// advances onto it and folds `left` through its infix handler. Infix
    /// handlers parse their right operand at their own precedence, which
    /// makes every binary operator left-associative.
    ///
    /// Returns `None`, with an error recorded, when no expression could be
    /// built.
    pub fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = Self::prefix_parse_fn(self.current.kind) else {
            self.push_error(ParseError::NoPrefixParseFn { kind: self.current.kind,
                                                          line: self.current.line, });
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = Self::infix_parse_fn(self.peek.kind) else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }
}
