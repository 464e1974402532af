/// Typed variable declarations (`name: Type` / `name: Type = default`).
impl<'a> Parser<'a> {
    // ========================================================================
    // Variable declarations
    // ========================================================================

    /// Parse a single variable declaration from this parser's span.
    ///
    /// Used on per-argument token groups sliced out of an `arguments` block.
    /// The type portion runs to the `=` of a default value or to the end of
    /// the span, with `<`/`>` balanced so `either<...>` subtypes never end the
    /// type early.
    fn variable_declaration(&mut self) -> Result<Variable, ParseError> {
        let name = self
            .expect(TokenKind::Identifier, "Expected variable name")?
            .lexeme
            .clone();
        self.expect(TokenKind::Colon, "Expected ':' after variable name")?;

        let ty_start = self.pos;
        let ty_end = self.type_span_end(ty_start);
        if ty_end == ty_start {
            return Err(ParseError::syntax(
                format!("Expected type after ':', found {:?}", self.peek().kind),
                self.peek(),
            ));
        }
        let ty = Parser::new(&self.tokens[ty_start..ty_end]).type_expr()?;
        self.pos = ty_end;
        let mut variable = Variable::new(name, ty);

        if self.match_kind(TokenKind::Equals) {
            if matches!(
                self.peek().kind,
                TokenKind::Identifier | TokenKind::StringLit | TokenKind::Number
            ) {
                variable.default_value = Some(self.advance().lexeme.clone());
            } else {
                return Err(ParseError::syntax(
                    format!("Expected default value after '=', found {:?}", self.peek().kind),
                    self.peek(),
                ));
            }
        }

        Ok(variable)
    }

    /// Index one past the last token of the type starting at `start`.
    ///
    /// Scans to an `=` at angle-bracket depth zero, a `}` at depth zero, or
    /// the end of the span.
    fn type_span_end(&self, start: usize) -> usize {
        let mut angle_depth = 0usize;
        let mut i = start;
        while i < self.tokens.len() {
            match self.tokens[i].kind {
                TokenKind::Less => angle_depth += 1,
                TokenKind::Greater => angle_depth = angle_depth.saturating_sub(1),
                TokenKind::Equals | TokenKind::RightBrace if angle_depth == 0 => return i,
                TokenKind::Eof => return i,
                _ => {}
            }
            i += 1;
        }
        i
    }
}
