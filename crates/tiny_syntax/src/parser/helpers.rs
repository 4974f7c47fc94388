/// Token-stream helpers, error reporting and the nesting guard.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`peek`, `advance`)
/// - Matching / expecting token kinds
/// - Diagnostics (`report`) and node ids (`next_id`)
/// - Depth accounting (`enter_nesting`, `leave_nesting`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Return the current token without consuming it, or `None` at end of input.
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Advance past the current token (no-op at end of input).
    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// If the current token is `kind`, consume it and return `true`.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind` and return its lexeme.
    ///
    /// On mismatch an `expected ..., found ...` diagnostic is recorded and the cursor stays put;
    /// recovery is the caller's job.
    fn expect(&mut self, kind: TokenKind) -> Option<&'a str> {
        if self.check(kind) {
            self.advance().map(|t| t.lexeme.as_str())
        } else {
            self.report(SyntaxError::Expected {
                expected: Expectation::Token(kind),
                found: self.peek_kind(),
                index: self.pos,
            });
            None
        }
    }

    /// If the current token is a binary operator of `level`, return it without consuming.
    fn peek_op(&self, level: Precedence) -> Option<BinOp> {
        self.peek_kind()
            .and_then(BinOp::from_token)
            .filter(|op| op.precedence() == level)
    }

    fn report(&mut self, error: SyntaxError) {
        if self.abandoned {
            return;
        }
        tracing::debug!(%error, "syntax error");
        self.errors.push(error);
    }

    fn next_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Enter one nesting level. Returns `false` (after reporting once and abandoning the rest of
    /// the input) when the configured bound is exceeded; in that case do not call
    /// [`Self::leave_nesting`].
    fn enter_nesting(&mut self) -> bool {
        if self.depth >= self.config.max_depth {
            self.report(SyntaxError::NestingTooDeep {
                max: self.config.max_depth,
                index: self.pos,
            });
            self.abandoned = true;
            self.pos = self.tokens.len();
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave_nesting(&mut self) {
        debug_assert!(self.depth > 0, "leave_nesting called without matching enter_nesting");
        self.depth = self.depth.saturating_sub(1);
    }
}
