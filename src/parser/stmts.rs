/// Statement parsing for `execute { ... }` blocks.
///
/// Statements recover individually: an unrecognized token inside an execute
/// block is logged and skipped, so one stray token never drops the remaining
/// statements. Structural failures inside a statement (a missing brace, a bad
/// expression) still fail the enclosing declaration.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    /// Parse statements up to the closing `}` of an execute block.
    ///
    /// The caller consumes the braces; this parses the interior.
    fn execute_block(&mut self) -> Result<ExecuteBlock, ParseError> {
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.check(TokenKind::RightBrace) {
            if let Some(statement) = self.statement()? {
                statements.push(statement);
            }
        }
        Ok(ExecuteBlock::new(statements))
    }

    /// Parse one statement, or skip one token and return `Ok(None)`.
    fn statement(&mut self) -> Result<Option<Statement>, ParseError> {
        match self.peek().kind {
            TokenKind::Send => {
                self.advance();
                let message = self.expression()?;
                let target = if self.match_kind(TokenKind::To) {
                    Some(self.expression()?)
                } else {
                    None
                };
                Ok(Some(Statement::Send { message, target }))
            }
            TokenKind::Teleport => {
                self.advance();
                let entity = self.expression()?;
                self.expect(TokenKind::To, "Expected 'to' in teleport command")?;
                let target = self.expression()?;
                Ok(Some(Statement::Teleport { entity, target }))
            }
            TokenKind::Halt => {
                self.advance();
                Ok(Some(Statement::Halt))
            }
            TokenKind::Cancel => {
                self.advance();
                self.expect(TokenKind::Event, "Expected 'event' after 'cancel'")?;
                Ok(Some(Statement::CancelEvent))
            }
            TokenKind::Set => {
                self.advance();
                self.assignment().map(Some)
            }
            TokenKind::If => {
                self.advance();
                self.if_statement().map(Some)
            }
            TokenKind::LeftBrace => {
                self.advance();
                self.block_statement().map(Some)
            }
            _ => {
                let token = self.advance();
                tracing::warn!(
                    kind = ?token.kind,
                    line = token.line,
                    "skipping unexpected token in execute block"
                );
                Ok(None)
            }
        }
    }

    /// Parse `set <path> to <expr>` (keyword consumed).
    fn assignment(&mut self) -> Result<Statement, ParseError> {
        let path = self.property_path("Expected variable name after 'set'")?;
        self.expect(TokenKind::To, "Expected 'to' after property name")?;
        let value = self.expression()?;
        Ok(Statement::Assign { path, value })
    }

    /// Parse an `if` statement (keyword consumed).
    ///
    /// `else if` chains recurse, producing right-nested `If` statements.
    fn if_statement(&mut self) -> Result<Statement, ParseError> {
        let condition = self.expression()?;
        self.expect(TokenKind::LeftBrace, "Expected '{' after if condition")?;
        let then_branch = Box::new(self.block_statement()?);

        let else_branch = if self.match_kind(TokenKind::Else) {
            if self.match_kind(TokenKind::If) {
                // Each chain link is one nesting level, so a linear `else if`
                // chain cannot recurse past MAX_NESTING_DEPTH.
                self.enter_nested()?;
                let chained = self.if_statement()?;
                self.exit_nested();
                Some(Box::new(chained))
            } else if self.match_kind(TokenKind::LeftBrace) {
                Some(Box::new(self.block_statement()?))
            } else {
                return Err(ParseError::syntax(
                    format!("Expected '{{' or 'if' after 'else', found {:?}", self.peek().kind),
                    self.peek(),
                ));
            }
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse a `{ ... }` block statement (opening brace consumed).
    fn block_statement(&mut self) -> Result<Statement, ParseError> {
        self.enter_nested()?;
        let mut statements = Vec::new();
        while !self.is_at_end() && !self.check(TokenKind::RightBrace) {
            if let Some(statement) = self.statement()? {
                statements.push(statement);
            }
        }
        self.expect(TokenKind::RightBrace, "Expected '}' to close block")?;
        self.exit_nested();
        Ok(Statement::Block { statements })
    }
}
