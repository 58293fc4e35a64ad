//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Compiles a plural expression into a tree of closures
//!
//! The tree is walked once at load time. Subtrees that do not depend on `n`
//! are folded into constants, and the common `n <op> constant` shape gets a
//! dedicated closure, so a lookup runs without inspecting the AST.

use super::ast::{BinaryOp, Node};
use super::eval::evaluate;
use super::PluralError;

/// A compiled plural expression
pub type CompiledExpr = Box<dyn Fn(i64) -> Result<i64, PluralError> + Send + Sync>;

/// Compile an expression; the result behaves exactly like [`evaluate`]
pub fn compile(node: &Node) -> CompiledExpr {
    if !node.uses_n() {
        // A constant subtree that faults keeps faulting on every call.
        return match evaluate(node, 0) {
            Ok(value) => Box::new(move |_| Ok(value)),
            Err(e) => Box::new(move |_| Err(e.clone())),
        };
    }

    match node {
        Node::Number(v) => {
            let v = *v;
            Box::new(move |_| Ok(v))
        }
        Node::N => Box::new(|n| Ok(n)),
        Node::Not(operand) => {
            let operand = compile(operand);
            Box::new(move |n| Ok(i64::from(operand(n)? == 0)))
        }
        Node::Binary(op, left, right) => compile_binary(*op, left, right),
        Node::Ternary(cond, when_true, when_false) => {
            let cond = compile(cond);
            let when_true = compile(when_true);
            let when_false = compile(when_false);
            Box::new(move |n| {
                if cond(n)? != 0 {
                    when_true(n)
                } else {
                    when_false(n)
                }
            })
        }
    }
}

fn compile_binary(op: BinaryOp, left: &Node, right: &Node) -> CompiledExpr {
    match (left, right) {
        (Node::N, Node::Number(c)) => {
            let c = *c;
            Box::new(move |n| op.apply(n, c))
        }
        (_, Node::Number(c)) => {
            let c = *c;
            let left = compile(left);
            Box::new(move |n| op.apply(left(n)?, c))
        }
        _ => {
            let left = compile(left);
            let right = compile(right);
            Box::new(move |n| {
                let l = left(n)?;
                let r = right(n)?;
                op.apply(l, r)
            })
        }
    }
}
