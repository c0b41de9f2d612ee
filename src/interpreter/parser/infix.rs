use crate::{
    ast::{Expression, InfixOperator},
    interpreter::{
        lexer::TokenKind,
        parser::core::{InfixParseFn, Parser, Precedence},
    },
};

/// Maps a token to the binary operator it denotes, if any.
///
/// # Example
/// ```
/// use vabna::{
///     ast::InfixOperator,
///     interpreter::{lexer::TokenKind, parser::infix::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(TokenKind::NotEq), Some(InfixOperator::NotEqual));
/// assert_eq!(token_to_infix_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(kind: TokenKind) -> Option<InfixOperator> {
    match kind {
        TokenKind::Plus => Some(InfixOperator::Add),
        TokenKind::Minus => Some(InfixOperator::Sub),
        TokenKind::Asterisk => Some(InfixOperator::Mul),
        TokenKind::Slash => Some(InfixOperator::Div),
        TokenKind::Lt => Some(InfixOperator::Less),
        TokenKind::Gt => Some(InfixOperator::Greater),
        TokenKind::Eq => Some(InfixOperator::Equal),
        TokenKind::NotEq => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

impl<'src> Parser<'src> {
    /// Looks up the handler for a token that continues an expression.
    ///
    /// `(` and `[` are handled here too: at call precedence they turn the
    /// expression to their left into a call or an index.
    pub(in crate::interpreter::parser) fn infix_parse_fn(kind: TokenKind)
                                                         -> Option<InfixParseFn<'src>> {
        let handler: InfixParseFn<'src> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            TokenKind::LBracket => Self::parse_index_expression,
            _ => return None,
        };
        Some(handler)
    }

    /// `<left> <operator> <right>`
    ///
    /// The right operand is parsed at the operator's own precedence, so an
    /// operator of equal strength to the right ends it: `a - b - c` groups
    /// as `(a - b) - c`.
    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token_to_infix_operator(token.kind)?;
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix { token,
                                 left: Box::new(left),
                                 operator,
                                 right: Box::new(right) })
    }

    /// `<function>(<arguments>)`
    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_expression_list(TokenKind::RParen)?;

        Some(Expression::Call { token,
                                function: Box::new(function),
                                arguments })
    }

    /// `<left>[<index>]`
    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RBracket)?;

        Some(Expression::Index { token,
                                 left: Box::new(left),
                                 index: Box::new(index) })
    }
}
