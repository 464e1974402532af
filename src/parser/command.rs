/// Command declaration parsing.
///
/// A `command` declaration names one or more commands (alias list) and attaches
/// a property body: `permission`, `description`, an `arguments { ... }` block of
/// typed variable declarations, and an `execute { ... }` block of statements.
/// Alias lists share a single body, which is re-parsed once per name so every
/// alias gets its own independent AST.
impl<'a> Parser<'a> {
    // ========================================================================
    // Command declarations
    // ========================================================================

    /// Parse one `command` declaration, fanning an alias list out into one
    /// [`Command`] per name.
    fn command_declaration(&mut self) -> Result<Vec<Command>, ParseError> {
        self.expect(TokenKind::Command, "Expected 'command' keyword")?;

        // Alias list: `command "tp", "teleport"` (a repeated `command` keyword
        // between names is tolerated).
        let mut names = Vec::new();
        loop {
            let name = self
                .expect(TokenKind::StringLit, "Expected command name as string literal")?
                .lexeme
                .clone();
            names.push(name);
            if self.match_kind(TokenKind::Comma) {
                self.match_kind(TokenKind::Command);
            } else {
                break;
            }
        }

        if !self.check(TokenKind::LeftBrace) {
            return Err(ParseError::syntax(
                format!("Expected '{{' after command name(s), found {:?}", self.peek().kind),
                self.peek(),
            ));
        }

        // Re-parse the shared body once per alias.
        let body_start = self.pos;
        let body_end = self.matching_brace(body_start);
        let mut commands = Vec::with_capacity(names.len());
        for name in names {
            self.pos = body_start;
            commands.push(self.command_body(name)?);
        }
        self.pos = (body_end + 1).min(self.tokens.len());

        Ok(commands)
    }

    /// Parse the `{ ... }` body of a command declaration.
    ///
    /// Properties may appear in any order; a repeated property takes the last
    /// value. An unknown property name fails the whole declaration.
    fn command_body(&mut self, name: String) -> Result<Command, ParseError> {
        self.expect(TokenKind::LeftBrace, "Expected '{' to open command definition")?;
        let mut command = Command::new(name);

        while !self.is_at_end() && !self.check(TokenKind::RightBrace) {
            if self.check(TokenKind::Identifier) {
                let prop = self.advance().clone();
                match prop.lexeme.as_str() {
                    "permission" => {
                        self.expect(TokenKind::Colon, "Expected ':' after 'permission'")?;
                        command.permission = self
                            .expect(TokenKind::StringLit, "Expected string literal for 'permission'")?
                            .lexeme
                            .clone();
                    }
                    "description" => {
                        self.expect(TokenKind::Colon, "Expected ':' after 'description'")?;
                        command.description = self
                            .expect(TokenKind::StringLit, "Expected string literal for 'description'")?
                            .lexeme
                            .clone();
                    }
                    "arguments" => self.arguments_block(&mut command)?,
                    "execute" => self.execute_property(&mut command)?,
                    other => {
                        return Err(ParseError::unknown_property(other, "command", &prop));
                    }
                }
            } else {
                // Stray punctuation between properties is skipped.
                self.advance();
            }
        }

        self.expect(TokenKind::RightBrace, "Expected '}' to close command definition")?;
        Ok(command)
    }

    /// Parse an `arguments { ... }` block into [`Variable`] declarations.
    ///
    /// The block is split into per-argument token groups using layout: a new
    /// argument starts at an identifier on a later line whose column does not
    /// exceed the first argument's column. Groups that fail to parse are
    /// skipped individually, so one bad argument never loses its neighbors.
    fn arguments_block(&mut self, command: &mut Command) -> Result<(), ParseError> {
        self.expect(TokenKind::LeftBrace, "Expected '{' after 'arguments'")?;
        let start = self.pos;
        let end = self.block_end(start);
        command
            .raw_blocks
            .insert("arguments".to_string(), reconstruct_source(&self.tokens[start..end]));

        let mut i = start;
        while i < end {
            if self.tokens[i].kind != TokenKind::Identifier {
                tracing::warn!(
                    line = self.tokens[i].line,
                    "skipping stray token in arguments block"
                );
                i += 1;
                continue;
            }
            let anchor_column = self.tokens[i].column;
            let mut j = i + 1;
            while j < end && j - i < MAX_ARGUMENT_TOKENS {
                let token = &self.tokens[j];
                if token.kind == TokenKind::Identifier
                    && token.line > self.tokens[j - 1].line
                    && token.column <= anchor_column
                {
                    break;
                }
                j += 1;
            }
            match Parser::new(&self.tokens[i..j]).variable_declaration() {
                Ok(variable) => command.arguments.push(variable),
                Err(error) => {
                    tracing::warn!(%error, "skipping malformed argument declaration");
                }
            }
            i = j;
        }

        self.pos = end;
        self.expect(TokenKind::RightBrace, "Expected '}' to close arguments block")?;
        Ok(())
    }

    /// Parse an `execute { ... }` block and capture its raw source text.
    fn execute_property(&mut self, command: &mut Command) -> Result<(), ParseError> {
        self.expect(TokenKind::LeftBrace, "Expected '{' after 'execute'")?;
        let start = self.pos;
        let block = self.execute_block()?;
        let end = self.pos;
        command
            .raw_blocks
            .insert("execute".to_string(), reconstruct_source(&self.tokens[start..end]));
        self.expect(TokenKind::RightBrace, "Expected '}' to close execute block")?;
        command.execute_block = Some(block);
        Ok(())
    }
}
