use crate::{
    ast::{Expression, Identifier},
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses comma-separated expressions up to and including `end`.
    ///
    /// # Parameters
    /// - `end`: The token closing the list, `)` for arguments or `]` for
    ///   array elements.
    ///
    /// # Returns
    /// The expressions in source order, or `None` if any of them failed or
    /// the list was not closed by `end`.
    pub(in crate::interpreter::parser) fn parse_expression_list(&mut self,
                                                                end: TokenKind)
                                                                -> Option<Vec<Expression>> {
        let mut list = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(list)
    }

    /// Parses `<ident>, <ident>, ... )` after a function's opening `(`.
    pub(in crate::interpreter::parser) fn parse_function_parameters(&mut self)
                                                                    -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Ident)?;
        parameters.push(self.current_identifier());

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Ident)?;
            parameters.push(self.current_identifier());
        }

        self.expect_peek(TokenKind::RParen)?;
        Some(parameters)
    }

    pub(in crate::interpreter::parser) fn current_identifier(&self) -> Identifier {
        Identifier { token: self.current.clone(),
                     name:  self.current.literal.clone(), }
    }
}
