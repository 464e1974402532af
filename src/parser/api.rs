// ============================================================================
// Public API
// ============================================================================

/// Parse a token stream into a [`Script`].
///
/// Best-effort: malformed declarations land in [`Script::errors`] instead of
/// failing the call.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Script {
    Parser::new(tokens).parse()
}

/// Lex and parse SwoftLang source in one step.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn parse_source(source: &str) -> Script {
    let tokens = crate::lexer::lex(source);
    Parser::new(&tokens).parse()
}
