//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Plural expression syntax tree
//!
//! Parentheses are collapsed during parsing and not kept in the tree.

use std::fmt;

use super::token::TokenKind;
use super::PluralError;

/// Binary operators supported in plural expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
    Equals,
    NotEquals,
    Less,
    LessOrEquals,
    Greater,
    GreaterOrEquals,
    And,
    Or,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 13] = [
        BinaryOp::Plus,
        BinaryOp::Minus,
        BinaryOp::Multiply,
        BinaryOp::Divide,
        BinaryOp::Modulo,
        BinaryOp::Equals,
        BinaryOp::NotEquals,
        BinaryOp::Less,
        BinaryOp::LessOrEquals,
        BinaryOp::Greater,
        BinaryOp::GreaterOrEquals,
        BinaryOp::And,
        BinaryOp::Or,
    ];

    /// Operator for a binary token, if it is one
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => BinaryOp::Plus,
            TokenKind::Minus => BinaryOp::Minus,
            TokenKind::Multiply => BinaryOp::Multiply,
            TokenKind::Divide => BinaryOp::Divide,
            TokenKind::Modulo => BinaryOp::Modulo,
            TokenKind::Equals => BinaryOp::Equals,
            TokenKind::NotEquals => BinaryOp::NotEquals,
            TokenKind::Less => BinaryOp::Less,
            TokenKind::LessOrEquals => BinaryOp::LessOrEquals,
            TokenKind::Greater => BinaryOp::Greater,
            TokenKind::GreaterOrEquals => BinaryOp::GreaterOrEquals,
            TokenKind::And => BinaryOp::And,
            TokenKind::Or => BinaryOp::Or,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessOrEquals => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterOrEquals => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        }
    }

    /// Apply the operator to two evaluated operands
    ///
    /// Arithmetic wraps on overflow. Comparisons and logical operators yield
    /// 0 or 1. Division and modulo by zero fail.
    pub fn apply(self, l: i64, r: i64) -> Result<i64, PluralError> {
        let value = match self {
            BinaryOp::Plus => l.wrapping_add(r),
            BinaryOp::Minus => l.wrapping_sub(r),
            BinaryOp::Multiply => l.wrapping_mul(r),
            BinaryOp::Divide => {
                if r == 0 {
                    return Err(PluralError::DivisionByZero);
                }
                l.wrapping_div(r)
            }
            BinaryOp::Modulo => {
                if r == 0 {
                    return Err(PluralError::DivisionByZero);
                }
                l.wrapping_rem(r)
            }
            BinaryOp::Equals => i64::from(l == r),
            BinaryOp::NotEquals => i64::from(l != r),
            BinaryOp::Less => i64::from(l < r),
            BinaryOp::LessOrEquals => i64::from(l <= r),
            BinaryOp::Greater => i64::from(l > r),
            BinaryOp::GreaterOrEquals => i64::from(l >= r),
            BinaryOp::And => i64::from(l != 0 && r != 0),
            BinaryOp::Or => i64::from(l != 0 || r != 0),
        };
        Ok(value)
    }
}

/// A parsed plural expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A numeric literal
    Number(i64),
    /// The variable `n` (the count)
    N,
    /// Logical negation
    Not(Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    /// Ternary conditional: condition ? when_true : when_false
    Ternary(Box<Node>, Box<Node>, Box<Node>),
}

impl Node {
    pub fn not(operand: Node) -> Node {
        Node::Not(Box::new(operand))
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node) -> Node {
        Node::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn ternary(cond: Node, when_true: Node, when_false: Node) -> Node {
        Node::Ternary(Box::new(cond), Box::new(when_true), Box::new(when_false))
    }

    /// Whether the value of this subtree depends on `n`
    pub fn uses_n(&self) -> bool {
        match self {
            Node::Number(_) => false,
            Node::N => true,
            Node::Not(operand) => operand.uses_n(),
            Node::Binary(_, l, r) => l.uses_n() || r.uses_n(),
            Node::Ternary(c, t, f) => c.uses_n() || t.uses_n() || f.uses_n(),
        }
    }
}

/// Fully parenthesized rendering; parses back to an equal tree
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(v) => write!(f, "{}", v),
            Node::N => f.write_str("n"),
            Node::Not(operand) => write!(f, "!({})", operand),
            Node::Binary(op, l, r) => write!(f, "({} {} {})", l, op.symbol(), r),
            Node::Ternary(c, t, e) => write!(f, "({} ? {} : {})", c, t, e),
        }
    }
}
