/// Event declaration parsing.
impl<'a> Parser<'a> {
    // ========================================================================
    // Event declarations
    // ========================================================================

    /// Parse one `event` declaration.
    ///
    /// Events are named by a bare identifier (the handler hooks an engine event
    /// of that name) and carry two properties: an integer `priority` (default
    /// 0) and an `execute { ... }` block.
    fn event_declaration(&mut self) -> Result<Event, ParseError> {
        self.expect(TokenKind::Event, "Expected 'event' keyword")?;
        let name = self
            .expect(TokenKind::Identifier, "Expected event name")?
            .lexeme
            .clone();
        self.expect(TokenKind::LeftBrace, "Expected '{' after event name")?;

        let mut event = Event::new(name);

        while !self.is_at_end() && !self.check(TokenKind::RightBrace) {
            if self.check(TokenKind::Identifier) {
                let prop = self.advance().clone();
                match prop.lexeme.as_str() {
                    "priority" => {
                        self.expect(TokenKind::Colon, "Expected ':' after 'priority'")?;
                        let number = self
                            .expect(TokenKind::Number, "Expected integer literal for 'priority'")?
                            .clone();
                        event.priority = number.lexeme.parse::<i32>().map_err(|_| {
                            ParseError::syntax(
                                format!("Invalid integer priority '{}'", number.lexeme),
                                &number,
                            )
                        })?;
                    }
                    "execute" => {
                        self.expect(TokenKind::LeftBrace, "Expected '{' after 'execute'")?;
                        let block = self.execute_block()?;
                        self.expect(TokenKind::RightBrace, "Expected '}' to close execute block")?;
                        event.execute_block = Some(block);
                    }
                    other => {
                        return Err(ParseError::unknown_property(other, "event", &prop));
                    }
                }
            } else {
                self.advance();
            }
        }

        self.expect(TokenKind::RightBrace, "Expected '}' to close event definition")?;
        Ok(event)
    }
}
