/// Expression parsing.
///
/// Precedence climbs from `exp` (one optional, non-chainable comparison) through `simple-exp`
/// (`+ -`) and `term` (`* /`) down to `factor`. The additive and multiplicative levels loop,
/// folding each new operator node over the previous left-hand side, which makes them
/// left-associative: `8-3-2` is `(8-3)-2`.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// `exp -> simple-exp [ ('<'|'=') simple-exp ]`
    fn exp(&mut self) -> Option<Expr> {
        if !self.enter_nesting() {
            return None;
        }

        let lhs = self.simple_exp();
        let result = match self.peek_op(Precedence::Comparison) {
            Some(op) => {
                self.advance();
                let id = self.next_id();
                let rhs = self.simple_exp();
                Some(Expr::binary(id, op, lhs, rhs))
            }
            None => lhs,
        };

        self.leave_nesting();
        result
    }

    /// `simple-exp -> term { ('+'|'-') term }`
    fn simple_exp(&mut self) -> Option<Expr> {
        let mut lhs = self.term();
        while let Some(op) = self.peek_op(Precedence::Additive) {
            self.advance();
            let id = self.next_id();
            let rhs = self.term();
            lhs = Some(Expr::binary(id, op, lhs, rhs));
        }
        lhs
    }

    /// `term -> factor { ('*'|'/') factor }`
    fn term(&mut self) -> Option<Expr> {
        let mut lhs = self.factor();
        while let Some(op) = self.peek_op(Precedence::Multiplicative) {
            self.advance();
            let id = self.next_id();
            let rhs = self.factor();
            lhs = Some(Expr::binary(id, op, lhs, rhs));
        }
        lhs
    }

    /// `factor -> '(' exp ')' | number | identifier`
    ///
    /// The second panic-mode recovery point: an unexpected token is reported and skipped.
    fn factor(&mut self) -> Option<Expr> {
        let Some(token) = self.peek() else {
            self.report(SyntaxError::Expected {
                expected: Expectation::Expression,
                found: None,
                index: self.pos,
            });
            return None;
        };

        match token.kind {
            TokenKind::OpenParen => {
                self.advance();
                let inner = self.exp();
                self.expect(TokenKind::CloseParen);
                inner
            }
            TokenKind::Number => {
                self.advance();
                Some(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Const(token.lexeme.clone()),
                })
            }
            TokenKind::Identifier => {
                self.advance();
                Some(Expr {
                    id: self.next_id(),
                    kind: ExprKind::Id(token.lexeme.clone()),
                })
            }
            _ => {
                self.report(SyntaxError::UnexpectedInExpression {
                    lexeme: token.lexeme.clone(),
                    index: self.pos,
                });
                self.advance();
                None
            }
        }
    }
}
