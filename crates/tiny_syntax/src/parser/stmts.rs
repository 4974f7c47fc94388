/// Statement parsing.
///
/// `statement` is one of the two panic-mode recovery points: an unexpected leading token is
/// reported and skipped so that `stmt-sequence` always makes progress.
impl<'a> Parser<'a> {
    // ========================================================================
    // Statements
    // ========================================================================

    fn program(&mut self) -> Sequence {
        self.stmt_sequence()
    }

    /// `stmt-sequence -> statement { ';' statement }`
    ///
    /// Statements that fail outright are dropped; the ones after them are still collected.
    fn stmt_sequence(&mut self) -> Sequence {
        if !self.enter_nesting() {
            return Sequence::default();
        }

        let mut stmts = Vec::new();
        stmts.extend(self.statement());
        while self.match_token(TokenKind::Semicolon) {
            stmts.extend(self.statement());
        }

        self.leave_nesting();
        Sequence::new(stmts)
    }

    fn statement(&mut self) -> Option<Stmt> {
        let Some(token) = self.peek() else {
            self.report(SyntaxError::Expected {
                expected: Expectation::Statement,
                found: None,
                index: self.pos,
            });
            return None;
        };

        match token.kind {
            TokenKind::If => Some(self.if_stmt()),
            TokenKind::Repeat => Some(self.repeat_stmt()),
            TokenKind::Identifier => Some(self.assign_stmt()),
            TokenKind::Read => Some(self.read_stmt()),
            TokenKind::Write => Some(self.write_stmt()),
            _ => {
                self.report(SyntaxError::UnexpectedStatementStart {
                    lexeme: token.lexeme.clone(),
                    index: self.pos,
                });
                // Panic mode: always consume the offending token.
                self.advance();
                None
            }
        }
    }

    /// `if-stmt -> 'if' exp 'then' stmt-sequence [ 'else' stmt-sequence ] 'end'`
    fn if_stmt(&mut self) -> Stmt {
        self.expect(TokenKind::If);
        let id = self.next_id();

        let cond = self.exp();
        self.expect(TokenKind::Then);
        let then_branch = self.stmt_sequence();
        let else_branch = if self.match_token(TokenKind::Else) {
            Some(self.stmt_sequence())
        } else {
            None
        };
        self.expect(TokenKind::End);

        Stmt {
            id,
            kind: StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
        }
    }

    /// `repeat-stmt -> 'repeat' stmt-sequence 'until' exp`
    fn repeat_stmt(&mut self) -> Stmt {
        self.expect(TokenKind::Repeat);
        let id = self.next_id();

        let body = self.stmt_sequence();
        self.expect(TokenKind::Until);
        let until = self.exp();

        Stmt {
            id,
            kind: StmtKind::Repeat { body, until },
        }
    }

    /// `assign-stmt -> identifier ':=' exp`
    fn assign_stmt(&mut self) -> Stmt {
        let name = self.expect(TokenKind::Identifier).map(str::to_owned);
        self.expect(TokenKind::Assign);
        let id = self.next_id();

        let value = self.exp();

        Stmt {
            id,
            kind: StmtKind::Assign { name, value },
        }
    }

    /// `read-stmt -> 'read' identifier`
    fn read_stmt(&mut self) -> Stmt {
        self.expect(TokenKind::Read);
        let name = self.expect(TokenKind::Identifier).map(str::to_owned);

        Stmt {
            id: self.next_id(),
            kind: StmtKind::Read { name },
        }
    }

    /// `write-stmt -> 'write' exp`
    fn write_stmt(&mut self) -> Stmt {
        self.expect(TokenKind::Write);
        let id = self.next_id();

        let value = self.exp();

        Stmt {
            id,
            kind: StmtKind::Write { value },
        }
    }
}
