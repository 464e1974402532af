/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting token kinds
/// - Balanced-brace span scanning
/// - Nesting-depth accounting and declaration-level recovery
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the cursor is at the end of this parser's span.
    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len() || self.tokens[self.pos].kind == TokenKind::Eof
    }

    /// Return the current token without consuming it.
    ///
    /// Past the end of a sub-span this returns a synthetic Eof token, so
    /// callers never have to bounds-check.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        if self.pos == 0 {
            return &self.eof;
        }
        self.tokens.get(self.pos - 1).unwrap_or(&self.eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// If the current token matches `kind`, consume it and return `true`.
    fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, msg: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::syntax(
                format!("{}, found {:?}", msg, self.peek().kind),
                self.peek(),
            ))
        }
    }

    // ========================================================================
    // Nesting depth
    // ========================================================================

    /// Enter one nesting level (paren, block, `either<>`), failing once the
    /// input nests deeper than [`MAX_NESTING_DEPTH`].
    fn enter_nested(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::syntax(
                format!("Nesting exceeds the maximum depth of {}", MAX_NESTING_DEPTH),
                self.peek(),
            ));
        }
        Ok(())
    }

    fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    // ========================================================================
    // Span scanning and recovery
    // ========================================================================

    /// Index of the `}` that closes the block whose `{` sits at `open`.
    ///
    /// Returns the length of the token span when the brace is never matched;
    /// the declaration parser will then run into Eof and report the error.
    fn matching_brace(&self, open: usize) -> usize {
        let mut depth = 0usize;
        let mut i = open;
        while i < self.tokens.len() {
            match self.tokens[i].kind {
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return i;
                    }
                }
                TokenKind::Eof => break,
                _ => {}
            }
            i += 1;
        }
        self.tokens.len()
    }

    /// Index of the `}` closing the block whose `{` has already been consumed,
    /// i.e. scanning from `start` at depth 1.
    fn block_end(&self, start: usize) -> usize {
        let mut depth = 1usize;
        let mut i = start;
        while i < self.tokens.len() {
            match self.tokens[i].kind {
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return i;
                    }
                }
                TokenKind::Eof => break,
                _ => {}
            }
            i += 1;
        }
        self.tokens.len()
    }

    /// Advance past the failed declaration to the next `command`/`event` keyword.
    fn recover_to_next_declaration(&mut self) {
        self.advance();
        while !self.is_at_end() {
            if matches!(self.peek().kind, TokenKind::Command | TokenKind::Event) {
                return;
            }
            self.advance();
        }
    }
}
