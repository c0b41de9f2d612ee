use crate::{
    ast::{BlockStatement, Program, Statement},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses statements until the end of input.
    ///
    /// Statements that fail to parse are left out of the program and an
    /// error is recorded for each; parsing always continues with the token
    /// after the failure.
    ///
    /// # Returns
    /// The statements that were parsed successfully. Check
    /// [`Parser::errors`] before evaluating them.
    ///
    /// # Example
    /// ```
    /// use vabna::interpreter::parser::core::Parser;
    ///
    /// let mut parser = Parser::new("ধরি x = 5; x * 2");
    /// let program = parser.parse_program();
    ///
    /// assert!(parser.errors().is_empty());
    /// assert_eq!(program.statements.len(), 2);
    /// assert_eq!(program.to_string(), "ধরি x = 5;(x * 2);");
    /// ```
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        tracing::debug!(statements = program.statements.len(),
                        errors = self.errors().len(),
                        "parsed program");
        program
    }

    /// Parses one statement, dispatching on the current token.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// `let <identifier> = <expression>;`
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::Ident)?;
        let name = self.current_identifier();

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_statement_end();

        Some(Statement::Let { token, name, value })
    }

    /// `return <expression>;`
    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;
        self.expect_statement_end();

        Some(Statement::Return { token, value })
    }

    /// An expression with an optional trailing `;`.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Some(Statement::Expression { token, expression })
    }

    /// Consumes the `;` ending a `let` or `return`.
    ///
    /// The terminator may be left out right before a closing `}` or the end
    /// of input. Anywhere else its absence is reported, but the statement
    /// itself is kept.
    fn expect_statement_end(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        } else if !self.peek_is(TokenKind::RBrace) && !self.peek_is(TokenKind::Eof) {
            self.peek_error(TokenKind::Semicolon);
        }
    }

    /// Parses `{ <statements> }` with the current token on the `{`.
    ///
    /// Leaves the current token on the closing `}`. A block still open at
    /// the end of input is an error.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self)
                                                                -> Option<BlockStatement> {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.current_is(TokenKind::RBrace) && !self.current_is(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        if self.current_is(TokenKind::Eof) {
            self.push_error(ParseError::UnexpectedToken { expected: TokenKind::RBrace,
                                                          found:    TokenKind::Eof,
                                                          line:     self.current.line, });
            return None;
        }

        Some(BlockStatement { token, statements })
    }
}
