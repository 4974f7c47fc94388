//! Parse-result interchange record.
//!
//! The typed AST keeps statement sequences in a [`Sequence`] container. The record instead
//! threads them: a block becomes its first statement, whose `sibling` field nests the next one,
//! and so on until `null`. Walking both `children` and `sibling` therefore visits later statements
//! as nested objects, which is the expected shape rather than duplication.
//!
//! ## Notes
//! - Every chained statement adds a nesting level, so a long program is a deeply nested document.
//!   Reading and writing go through `serde_stacker`, which moves the recursion onto the heap once
//!   the stack runs low, and `serde_json`'s 128-level limit is lifted for reads. Dropping, cloning
//!   and comparing a [`NodeRecord`] walk the sibling chain in a loop.
//! - Pretty output indents every level, so its size grows with the square of the chain length.
//!   Use [`ParseRecord::to_json`] for long programs.
//! - Reconstruction via [`NodeRecord::to_program`] treats statement-typed children as blocks
//!   (`then`, `else`, `body` in that order) and expression-typed children as conditions/operands.
//!   An `op` node with a single child reads it back as the left operand.

use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter};
use thiserror::Error;

use crate::ast::{BinOp, Child, Expr, ExprKind, NodeId, NodeKind, Program, Sequence, Stmt, StmtKind};
use crate::parser::{ParseResult, ParseStatus};

/// Errors while loading a record or rebuilding a tree from it.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("node {id}: `{kind}` is a statement but an expression was expected")]
    UnexpectedStatement { id: NodeId, kind: NodeKind },

    #[error("node {id}: `{kind}` is an expression but a statement was expected")]
    UnexpectedExpression { id: NodeId, kind: NodeKind },

    #[error("node {id}: `{kind}` cannot have {count} {what} children")]
    TooManyChildren {
        id: NodeId,
        kind: NodeKind,
        what: &'static str,
        count: usize,
    },

    #[error("node {id}: `{kind}` is missing its value")]
    MissingValue { id: NodeId, kind: NodeKind },

    #[error("node {id}: expression nodes cannot have a sibling")]
    SiblingOnExpression { id: NodeId },

    #[error("node {id}: unknown operator {symbol:?}")]
    UnknownOperator { id: NodeId, symbol: String },

    #[error("invalid parse record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("serialized record is not UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

/// `{status, root, errors}`: the full outcome of one parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRecord {
    pub status: ParseStatus,
    pub root: Option<NodeRecord>,
    pub errors: Vec<String>,
}

/// `{id, type, value, children, sibling}`: one node of the threaded tree.
#[derive(Debug, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub node_type: NodeKind,
    pub value: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeRecord>,
    pub sibling: Option<Box<NodeRecord>>,
}

impl ParseRecord {
    pub fn from_result(result: &ParseResult) -> Self {
        Self {
            status: result.status,
            root: result.program.as_ref().and_then(NodeRecord::from_program),
            errors: result.error_messages(),
        }
    }

    /// Two-space indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, RecordError> {
        self.write_json(PrettyFormatter::new())
    }

    /// Single-line JSON.
    pub fn to_json(&self) -> Result<String, RecordError> {
        self.write_json(CompactFormatter)
    }

    /// Load a record written by [`Self::to_json`] or [`Self::to_json_pretty`].
    ///
    /// Sibling chains of any length are accepted; trailing non-whitespace is an error.
    pub fn from_json(text: &str) -> Result<Self, RecordError> {
        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let record = Self::deserialize(serde_stacker::Deserializer::new(&mut de))?;
        de.end()?;
        Ok(record)
    }

    fn write_json<F: Formatter>(&self, formatter: F) -> Result<String, RecordError> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(serde_stacker::Serializer::new(&mut ser))?;
        Ok(String::from_utf8(buf)?)
    }
}

impl NodeRecord {
    /// Head of the top-level statement chain, or `None` for an empty program.
    pub fn from_program(program: &Program) -> Option<Self> {
        chain(&program.body)
    }

    fn from_stmt(stmt: &Stmt) -> Self {
        let children = stmt
            .children()
            .into_iter()
            .filter_map(|child| match child {
                Child::Expr(expr) => Some(Self::from_expr(expr)),
                Child::Block(block) => chain(block),
            })
            .collect();

        Self {
            id: stmt.id,
            node_type: stmt.node_kind(),
            value: stmt.value().map(str::to_owned),
            children,
            sibling: None,
        }
    }

    fn from_expr(expr: &Expr) -> Self {
        Self {
            id: expr.id,
            node_type: expr.node_kind(),
            value: Some(expr.value().to_string()),
            children: expr.operands().into_iter().map(Self::from_expr).collect(),
            sibling: None,
        }
    }

    /// Iterate over this node and every node reachable through `sibling`.
    pub fn chain(&self) -> impl Iterator<Item = &NodeRecord> {
        std::iter::successors(Some(self), |node| node.sibling.as_deref())
    }

    /// Rebuild the typed tree, treating this node as the head of the top-level chain.
    pub fn to_program(&self) -> Result<Program, RecordError> {
        Ok(Program {
            body: sequence_from(self)?,
        })
    }

    /// This node and its children, cut off from the rest of the chain.
    fn detached(&self) -> Self {
        Self {
            id: self.id,
            node_type: self.node_type,
            value: self.value.clone(),
            children: self.children.clone(),
            sibling: None,
        }
    }

    fn same_node(&self, other: &Self) -> bool {
        self.id == other.id
            && self.node_type == other.node_type
            && self.value == other.value
            && self.children == other.children
    }
}

impl Clone for NodeRecord {
    fn clone(&self) -> Self {
        let rest: Vec<NodeRecord> = self.chain().skip(1).map(Self::detached).collect();
        let mut head = self.detached();
        head.sibling = link(rest.into_iter()).map(Box::new);
        head
    }
}

impl PartialEq for NodeRecord {
    fn eq(&self, other: &Self) -> bool {
        let (mut left, mut right) = (self.chain(), other.chain());
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.same_node(b) => {}
                _ => return false,
            }
        }
    }
}

impl Drop for NodeRecord {
    fn drop(&mut self) {
        let mut next = self.sibling.take();
        while let Some(mut node) = next {
            next = node.sibling.take();
        }
    }
}

/// Thread a block into a sibling chain.
fn chain(seq: &Sequence) -> Option<NodeRecord> {
    link(seq.stmts.iter().map(NodeRecord::from_stmt))
}

/// Build from the tail so each node owns the next.
fn link(nodes: impl DoubleEndedIterator<Item = NodeRecord>) -> Option<NodeRecord> {
    nodes.rev().fold(None, |next, mut node| {
        node.sibling = next.map(Box::new);
        Some(node)
    })
}

// ============================================================================
// Reconstruction
// ============================================================================

fn sequence_from(head: &NodeRecord) -> Result<Sequence, RecordError> {
    head.chain().map(stmt_from).collect::<Result<Vec<_>, _>>().map(Sequence::new)
}

fn stmt_from(node: &NodeRecord) -> Result<Stmt, RecordError> {
    let (id, kind) = (node.id, node.node_type);
    if !kind.is_statement() {
        return Err(RecordError::UnexpectedExpression { id, kind });
    }

    let mut exprs = Vec::new();
    let mut blocks = Vec::new();
    for child in &node.children {
        if child.node_type.is_statement() {
            blocks.push(sequence_from(child)?);
        } else {
            exprs.push(expr_from(child)?);
        }
    }

    let (max_exprs, max_blocks) = match kind {
        NodeKind::If => (1, 2),
        NodeKind::Repeat => (1, 1),
        NodeKind::Assign | NodeKind::Write => (1, 0),
        _ => (0, 0),
    };
    if exprs.len() > max_exprs {
        return Err(RecordError::TooManyChildren {
            id,
            kind,
            what: "expression",
            count: exprs.len(),
        });
    }
    if blocks.len() > max_blocks {
        return Err(RecordError::TooManyChildren {
            id,
            kind,
            what: "statement",
            count: blocks.len(),
        });
    }

    let mut exprs = exprs.into_iter();
    let mut blocks = blocks.into_iter();
    let kind = match kind {
        NodeKind::If => StmtKind::If {
            cond: exprs.next(),
            then_branch: blocks.next().unwrap_or_default(),
            else_branch: blocks.next(),
        },
        NodeKind::Repeat => StmtKind::Repeat {
            body: blocks.next().unwrap_or_default(),
            until: exprs.next(),
        },
        NodeKind::Assign => StmtKind::Assign {
            name: node.value.clone(),
            value: exprs.next(),
        },
        NodeKind::Read => StmtKind::Read {
            name: node.value.clone(),
        },
        _ => StmtKind::Write { value: exprs.next() },
    };

    Ok(Stmt { id, kind })
}

fn expr_from(node: &NodeRecord) -> Result<Expr, RecordError> {
    let (id, kind) = (node.id, node.node_type);
    if kind.is_statement() {
        return Err(RecordError::UnexpectedStatement { id, kind });
    }
    if node.sibling.is_some() {
        return Err(RecordError::SiblingOnExpression { id });
    }
    let value = node.value.clone().ok_or(RecordError::MissingValue { id, kind })?;

    let max_children = if kind == NodeKind::Op { 2 } else { 0 };
    if node.children.len() > max_children {
        return Err(RecordError::TooManyChildren {
            id,
            kind,
            what: "expression",
            count: node.children.len(),
        });
    }

    let kind = match kind {
        NodeKind::Op => {
            let op = BinOp::from_symbol(&value).ok_or(RecordError::UnknownOperator { id, symbol: value })?;
            let mut operands = node.children.iter().map(expr_from);
            ExprKind::Binary {
                op,
                lhs: operands.next().transpose()?.map(Box::new),
                rhs: operands.next().transpose()?.map(Box::new),
            }
        }
        NodeKind::Const => ExprKind::Const(value),
        _ => ExprKind::Id(value),
    };

    Ok(Expr { id, kind })
}
