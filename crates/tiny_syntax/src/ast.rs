//! Abstract Syntax Tree for TINY.
//!
//! The tree is fully owned. A statement sequence is an explicit ordered container ([`Sequence`])
//! rather than a chain of sibling pointers; the chained form only exists in the interchange record
//! (see [`crate::interchange::record`]).
//!
//! ## Notes
//! - Parts that failed to parse are `None`, so a rejected parse can still hand back a usable,
//!   partial tree.
//! - Node ids come from a per-parse counter and are assigned in construction order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexer::TokenKind;

// ============================================================================
// Ids and tags
// ============================================================================

/// Stable node identifier, unique within one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node type tag, as written in the `type` field of parse records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    If,
    Repeat,
    Assign,
    Read,
    Write,
    Op,
    Const,
    Id,
}

/// Rendering hint for tree viewers: statements are drawn as rectangles, expressions as ovals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rect,
    Oval,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::If => "if",
            NodeKind::Repeat => "repeat",
            NodeKind::Assign => "assign",
            NodeKind::Read => "read",
            NodeKind::Write => "write",
            NodeKind::Op => "op",
            NodeKind::Const => "const",
            NodeKind::Id => "id",
        }
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            NodeKind::If | NodeKind::Repeat | NodeKind::Assign | NodeKind::Read | NodeKind::Write
        )
    }

    pub fn shape(self) -> Shape {
        if self.is_statement() { Shape::Rect } else { Shape::Oval }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Program / statements
// ============================================================================

/// A parsed program: the top-level statement sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub body: Sequence,
}

impl Program {
    /// Number of top-level statements.
    pub fn statement_count(&self) -> usize {
        self.body.len()
    }
}

/// Consecutive statements produced by one `stmt-sequence` parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    pub stmts: Vec<Stmt>,
}

impl Sequence {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }

    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub id: NodeId,
    pub kind: StmtKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    If {
        cond: Option<Expr>,
        then_branch: Sequence,
        else_branch: Option<Sequence>,
    },
    Repeat {
        body: Sequence,
        until: Option<Expr>,
    },
    Assign {
        name: Option<String>,
        value: Option<Expr>,
    },
    Read {
        name: Option<String>,
    },
    Write {
        value: Option<Expr>,
    },
}

/// A child of a statement, in record order.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    Expr(&'a Expr),
    Block(&'a Sequence),
}

impl Stmt {
    pub fn node_kind(&self) -> NodeKind {
        match self.kind {
            StmtKind::If { .. } => NodeKind::If,
            StmtKind::Repeat { .. } => NodeKind::Repeat,
            StmtKind::Assign { .. } => NodeKind::Assign,
            StmtKind::Read { .. } => NodeKind::Read,
            StmtKind::Write { .. } => NodeKind::Write,
        }
    }

    /// Literal value: the variable name for `assign`/`read`, otherwise none.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            StmtKind::Assign { name, .. } | StmtKind::Read { name } => name.as_deref(),
            _ => None,
        }
    }

    /// Present children in order: `if` → [condition, then, else], `repeat` → [body, until],
    /// `assign`/`write` → [value]. Missing parts and empty blocks are skipped.
    pub fn children(&self) -> Vec<Child<'_>> {
        let mut children = Vec::new();
        match &self.kind {
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                children.extend(cond.as_ref().map(Child::Expr));
                push_block(&mut children, Some(then_branch));
                push_block(&mut children, else_branch.as_ref());
            }
            StmtKind::Repeat { body, until } => {
                push_block(&mut children, Some(body));
                children.extend(until.as_ref().map(Child::Expr));
            }
            StmtKind::Assign { value, .. } | StmtKind::Write { value } => {
                children.extend(value.as_ref().map(Child::Expr));
            }
            StmtKind::Read { .. } => {}
        }
        children
    }
}

fn push_block<'a>(children: &mut Vec<Child<'a>>, block: Option<&'a Sequence>) {
    if let Some(block) = block.filter(|b| !b.is_empty()) {
        children.push(Child::Block(block));
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    pub id: NodeId,
    pub kind: ExprKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// Child 0 is the left operand, child 1 the right.
    Binary {
        op: BinOp,
        lhs: Option<Box<Expr>>,
        rhs: Option<Box<Expr>>,
    },
    /// Numeric literal text.
    Const(String),
    /// Variable reference.
    Id(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Lt,
    Eq,
    Add,
    Sub,
    Mul,
    Div,
}

/// Binding strength of a binary operator, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Comparison,
    Additive,
    Multiplicative,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Lt => "<",
            BinOp::Eq => "=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<BinOp> {
        match symbol {
            "<" => Some(BinOp::Lt),
            "=" => Some(BinOp::Eq),
            "+" => Some(BinOp::Add),
            "-" => Some(BinOp::Sub),
            "*" => Some(BinOp::Mul),
            "/" => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn from_token(kind: TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::LessThan => Some(BinOp::Lt),
            TokenKind::Equal => Some(BinOp::Eq),
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Mult => Some(BinOp::Mul),
            TokenKind::Div => Some(BinOp::Div),
            _ => None,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            BinOp::Lt | BinOp::Eq => Precedence::Comparison,
            BinOp::Add | BinOp::Sub => Precedence::Additive,
            BinOp::Mul | BinOp::Div => Precedence::Multiplicative,
        }
    }
}

impl Expr {
    pub fn binary(id: NodeId, op: BinOp, lhs: Option<Expr>, rhs: Option<Expr>) -> Self {
        Self {
            id,
            kind: ExprKind::Binary {
                op,
                lhs: lhs.map(Box::new),
                rhs: rhs.map(Box::new),
            },
        }
    }

    pub fn node_kind(&self) -> NodeKind {
        match self.kind {
            ExprKind::Binary { .. } => NodeKind::Op,
            ExprKind::Const(_) => NodeKind::Const,
            ExprKind::Id(_) => NodeKind::Id,
        }
    }

    /// Operator symbol, numeric text or variable name.
    pub fn value(&self) -> &str {
        match &self.kind {
            ExprKind::Binary { op, .. } => op.symbol(),
            ExprKind::Const(text) | ExprKind::Id(text) => text,
        }
    }

    /// Present operands, left first.
    pub fn operands(&self) -> Vec<&Expr> {
        match &self.kind {
            ExprKind::Binary { lhs, rhs, .. } => lhs.iter().chain(rhs.iter()).map(Box::as_ref).collect(),
            _ => Vec::new(),
        }
    }
}

// ============================================================================
// Tree dump
// ============================================================================

/// Indented tree dump: statements as `[kind value]`, expressions as `(kind value)`, with the
/// blocks of compound statements introduced by a `then`/`else`/`body` label.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(f, &self.body, 0)
    }
}

fn write_sequence(f: &mut fmt::Formatter<'_>, seq: &Sequence, depth: usize) -> fmt::Result {
    for stmt in &seq.stmts {
        write_stmt(f, stmt, depth)?;
    }
    Ok(())
}

fn write_stmt(f: &mut fmt::Formatter<'_>, stmt: &Stmt, depth: usize) -> fmt::Result {
    write_label(f, stmt.node_kind(), stmt.value(), depth)?;
    match &stmt.kind {
        StmtKind::If {
            cond,
            then_branch,
            else_branch,
        } => {
            if let Some(cond) = cond {
                write_expr(f, cond, depth + 1)?;
            }
            write_block(f, "then", then_branch, depth + 1)?;
            if let Some(else_branch) = else_branch {
                write_block(f, "else", else_branch, depth + 1)?;
            }
        }
        StmtKind::Repeat { body, until } => {
            write_block(f, "body", body, depth + 1)?;
            if let Some(until) = until {
                write_expr(f, until, depth + 1)?;
            }
        }
        StmtKind::Assign { value, .. } | StmtKind::Write { value } => {
            if let Some(value) = value {
                write_expr(f, value, depth + 1)?;
            }
        }
        StmtKind::Read { .. } => {}
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, label: &str, seq: &Sequence, depth: usize) -> fmt::Result {
    writeln!(f, "{:indent$}{label}", "", indent = depth * 2)?;
    write_sequence(f, seq, depth + 1)
}

fn write_expr(f: &mut fmt::Formatter<'_>, expr: &Expr, depth: usize) -> fmt::Result {
    write_label(f, expr.node_kind(), Some(expr.value()), depth)?;
    for operand in expr.operands() {
        write_expr(f, operand, depth + 1)?;
    }
    Ok(())
}

fn write_label(f: &mut fmt::Formatter<'_>, kind: NodeKind, value: Option<&str>, depth: usize) -> fmt::Result {
    let (open, close) = match kind.shape() {
        Shape::Rect => ('[', ']'),
        Shape::Oval => ('(', ')'),
    };
    match value {
        Some(value) => writeln!(f, "{:indent$}{open}{kind} {value}{close}", "", indent = depth * 2),
        None => writeln!(f, "{:indent$}{open}{kind}{close}", "", indent = depth * 2),
    }
}
