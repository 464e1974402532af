/// Raw block text reconstruction.
///
/// Brace-delimited blocks (`arguments`, `execute`) keep their source text on
/// the AST for diagnostics. The lexer does not carry original source spans, so
/// the text is rebuilt from token line/column positions: line deltas become
/// newlines, columns become left padding, and string literals are re-quoted.

/// Rebuild approximate source text for a token span.
fn reconstruct_source(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut prev: Option<&Token> = None;

    for token in tokens {
        if token.kind == TokenKind::Eof {
            break;
        }
        let rendered = rendered_lexeme(token);
        match prev {
            // The first token starts flush; only its own lines get indentation.
            None => {}
            Some(prev_token) if token.line > prev_token.line => {
                out.push_str(&"\n".repeat(token.line - prev_token.line));
                out.push_str(&" ".repeat(token.column.saturating_sub(1)));
            }
            // Same line: pad out to the recorded column. Adjacent tokens
            // (`a.b`, `${`) keep no separator.
            Some(prev_token) => {
                let prev_end = prev_token.column + rendered_lexeme(prev_token).chars().count();
                if token.column > prev_end {
                    out.push_str(&" ".repeat(token.column - prev_end));
                }
            }
        }
        out.push_str(&rendered);
        prev = Some(token);
    }

    out
}

/// Source rendering of a token: string literals are re-quoted and re-escaped,
/// everything else is the lexeme as scanned.
fn rendered_lexeme(token: &Token) -> String {
    if token.kind != TokenKind::StringLit {
        return token.lexeme.clone();
    }
    let mut out = String::with_capacity(token.lexeme.len() + 2);
    out.push('"');
    for c in token.lexeme.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}
