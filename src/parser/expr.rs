/// Expression parsing.
///
/// Precedence ladder, loosest first:
///
/// ```text
/// or        ||
/// and       &&
/// compare   == != < > <= >=
/// additive  +
/// contains  contains
/// is        is [not] a TYPE
/// primary   string, path, ${path}, ( expr )
/// ```
///
/// All binary operators are left-associative except `is`, which binds once to
/// the primary on its left.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Expression, ParseError> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.and_expr()?;
        while self.match_kind(TokenKind::Or) {
            let right = self.and_expr()?;
            expr = Expression::binary(expr, BinaryOp::Or, right);
        }
        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.comparison()?;
        while self.match_kind(TokenKind::And) {
            let right = self.comparison()?;
            expr = Expression::binary(expr, BinaryOp::And, right);
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.additive()?;
        loop {
            let operator = match self.peek().kind {
                TokenKind::DoubleEquals => BinaryOp::Equals,
                TokenKind::NotEquals => BinaryOp::NotEquals,
                TokenKind::Less => BinaryOp::LessThan,
                TokenKind::Greater => BinaryOp::GreaterThan,
                TokenKind::LessEquals => BinaryOp::LessEquals,
                TokenKind::GreaterEquals => BinaryOp::GreaterEquals,
                _ => break,
            };
            self.advance();
            let right = self.additive()?;
            expr = Expression::binary(expr, operator, right);
        }
        Ok(expr)
    }

    /// `+` is string concatenation; there is no arithmetic in the language.
    fn additive(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.contains_expr()?;
        while self.match_kind(TokenKind::Plus) {
            let right = self.contains_expr()?;
            expr = Expression::binary(expr, BinaryOp::Concatenate, right);
        }
        Ok(expr)
    }

    fn contains_expr(&mut self) -> Result<Expression, ParseError> {
        let mut expr = self.is_expr()?;
        while self.match_kind(TokenKind::Contains) {
            let right = self.is_expr()?;
            expr = Expression::binary(expr, BinaryOp::Contains, right);
        }
        Ok(expr)
    }

    /// `<primary> is [not] a <Type>` — the right side is a type name, carried
    /// as a [`Expression::TypeLiteral`].
    fn is_expr(&mut self) -> Result<Expression, ParseError> {
        let expr = self.primary()?;
        if self.match_kind(TokenKind::Is) {
            let negated = self.match_kind(TokenKind::Not);
            let article = self
                .expect(TokenKind::Identifier, "Expected 'a' after 'is' (e.g. 'is a Player')")?
                .clone();
            if article.lexeme != "a" {
                return Err(ParseError::syntax(
                    format!("Expected 'a' after 'is', found '{}'", article.lexeme),
                    &article,
                ));
            }
            let type_name = self
                .expect(TokenKind::Identifier, "Expected type name after 'is a'")?
                .lexeme
                .clone();
            let operator = if negated { BinaryOp::IsNotType } else { BinaryOp::IsType };
            return Ok(Expression::binary(
                expr,
                operator,
                Expression::TypeLiteral { type_name },
            ));
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expression, ParseError> {
        if self.check(TokenKind::StringLit) {
            let value = self.advance().lexeme.clone();
            return Ok(Expression::StringLiteral { value });
        }

        // `${path}` interpolation desugars to a plain variable reference.
        if self.match_kind(TokenKind::Dollar) {
            self.expect(TokenKind::LeftBrace, "Expected '{' after '$' in interpolation")?;
            let name = self.property_path("Expected variable name in interpolation")?;
            self.expect(TokenKind::RightBrace, "Expected '}' after variable name in interpolation")?;
            return Ok(Expression::VariableReference { name });
        }

        if self.peek().kind.is_identifier_like() {
            let name = self.property_path("Expected variable name")?;
            return Ok(Expression::VariableReference { name });
        }

        if self.match_kind(TokenKind::LeftParen) {
            self.enter_nested()?;
            let expr = self.expression()?;
            self.expect(TokenKind::RightParen, "Expected ')' after expression")?;
            self.exit_nested();
            return Ok(expr);
        }

        Err(ParseError::syntax(
            format!("Expected expression, found {:?}", self.peek().kind),
            self.peek(),
        ))
    }

    // ========================================================================
    // Property paths
    // ========================================================================

    /// Parse a dotted property path (`event.player.name`) into its joined
    /// string form.
    ///
    /// Keywords are valid path components after the first dot (`player.event`),
    /// since path position is unambiguous.
    fn property_path(&mut self, msg: &str) -> Result<String, ParseError> {
        let mut path = self.path_component(msg)?;
        while self.match_kind(TokenKind::Dot) {
            path.push('.');
            path.push_str(&self.path_component("Expected property name after '.'")?);
        }
        Ok(path)
    }

    fn path_component(&mut self, msg: &str) -> Result<String, ParseError> {
        if self.peek().kind.is_identifier_like() {
            Ok(self.advance().lexeme.clone())
        } else {
            Err(ParseError::syntax(
                format!("{}, found {:?}", msg, self.peek().kind),
                self.peek(),
            ))
        }
    }
}
