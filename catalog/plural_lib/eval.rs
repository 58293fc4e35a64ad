//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Tree-walking evaluator for plural expressions

use super::ast::Node;
use super::PluralError;

/// Evaluate the expression with the given value of n
///
/// Both operands of `&&` and `||` are evaluated; only the selected branch
/// of a ternary is.
pub fn evaluate(node: &Node, n: i64) -> Result<i64, PluralError> {
    match node {
        Node::Number(v) => Ok(*v),
        Node::N => Ok(n),
        Node::Not(operand) => Ok(i64::from(evaluate(operand, n)? == 0)),
        Node::Binary(op, left, right) => {
            let l = evaluate(left, n)?;
            let r = evaluate(right, n)?;
            op.apply(l, r)
        }
        Node::Ternary(cond, when_true, when_false) => {
            if evaluate(cond, n)? != 0 {
                evaluate(when_true, n)
            } else {
                evaluate(when_false, n)
            }
        }
    }
}
