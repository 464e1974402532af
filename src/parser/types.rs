/// Type expressions: named types and recursive `either<A|B>` unions.
impl<'a> Parser<'a> {
    // ========================================================================
    // Type expressions
    // ========================================================================

    /// Parse a type expression.
    ///
    /// A bare identifier maps through [`DataType::from_name`]; unrecognized
    /// names resolve to [`DataType::Unknown`] rather than failing, leaving the
    /// decision to later semantic phases.
    fn type_expr(&mut self) -> Result<DataType, ParseError> {
        if self.match_kind(TokenKind::Either) {
            return self.either_type();
        }
        if self.check(TokenKind::Identifier) {
            return Ok(DataType::from_name(&self.advance().lexeme));
        }
        Err(ParseError::syntax(
            format!("Expected type name, found {:?}", self.peek().kind),
            self.peek(),
        ))
    }

    /// Parse the `<A|B|...>` tail of an `either` union (keyword consumed).
    ///
    /// Subtypes may themselves be `either<>` unions, so depth is bounded by
    /// [`MAX_NESTING_DEPTH`].
    fn either_type(&mut self) -> Result<DataType, ParseError> {
        self.expect(TokenKind::Less, "Expected '<' after 'either'")?;
        self.enter_nested()?;
        let mut subtypes = vec![self.type_expr()?];
        while self.match_kind(TokenKind::Pipe) {
            subtypes.push(self.type_expr()?);
        }
        self.expect(TokenKind::Greater, "Expected '>' to close 'either<>' type")?;
        self.exit_nested();
        Ok(DataType::Either(subtypes))
    }
}
