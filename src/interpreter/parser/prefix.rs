use std::rc::Rc;

use crate::{
    ast::{Expression, FunctionLiteral, Identifier, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence, PrefixParseFn},
    },
};

/// Maps a token to the prefix operator it denotes, if any.
///
/// # Example
/// ```
/// use vabna::{
///     ast::PrefixOperator,
///     interpreter::{lexer::TokenKind, parser::prefix::token_to_prefix_operator},
/// };
///
/// assert_eq!(token_to_prefix_operator(TokenKind::Bang), Some(PrefixOperator::Not));
/// assert_eq!(token_to_prefix_operator(TokenKind::Plus), None);
/// ```
#[must_use]
pub const fn token_to_prefix_operator(kind: TokenKind) -> Option<PrefixOperator> {
    match kind {
        TokenKind::Bang => Some(PrefixOperator::Not),
        TokenKind::Minus => Some(PrefixOperator::Negate),
        _ => None,
    }
}

impl<'src> Parser<'src> {
    /// Looks up the handler for a token that starts an expression.
    pub(in crate::interpreter::parser) fn prefix_parse_fn(kind: TokenKind)
                                                          -> Option<PrefixParseFn<'src>> {
        let handler: PrefixParseFn<'src> = match kind {
            TokenKind::Ident => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::Str => Self::parse_string_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            TokenKind::LBracket => Self::parse_array_literal,
            _ => return None,
        };
        Some(handler)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier { token: self.current.clone(),
                                                 name:  self.current.literal.clone(), }))
    }

    /// Digit runs that do not fit in an `i64` are rejected here rather than
    /// wrapped.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        match token.literal.parse::<i64>() {
            Ok(value) => Some(Expression::Integer { token, value }),
            Err(_) => {
                self.push_error(ParseError::InvalidInteger { literal: token.literal,
                                                             line:    token.line, });
                None
            },
        }
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let value = token.literal.clone();
        Some(Expression::String { token, value })
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean { token: self.current.clone(),
                                   value: self.current_is(TokenKind::True), })
    }

    /// `!<expression>` or `-<expression>`
    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token_to_prefix_operator(token.kind)?;

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix { token,
                                  operator,
                                  right: Box::new(right) })
    }

    /// `( <expression> )`
    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Some(expression)
    }

    /// `if (<condition>) { ... }` with an optional `else { ... }`.
    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If { token,
                              condition: Box::new(condition),
                              consequence,
                              alternative })
    }

    /// `fn(<parameters>) { <body> }`
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Some(Expression::Function(Rc::new(FunctionLiteral { token,
                                                            parameters,
                                                            body })))
    }

    /// `[<elements>]`
    fn parse_array_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expression::Array { token, elements })
    }
}
