//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Plural rule: form count plus an evaluator mapping a count to a form index

use std::fmt;

use super::ast::{BinaryOp, Node};
use super::compile::{compile, CompiledExpr};
use super::eval::evaluate;
use super::parser::parse_plural_forms;
use super::PluralError;

/// How a [`PluralRule`] evaluates its expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluationStrategy {
    /// Walk the syntax tree on every call
    Interpreted,
    /// Compile the tree into closures once, at load time
    #[default]
    Compiled,
}

/// Selects the plural form for a count; immutable once built
pub struct PluralRule {
    num_plurals: usize,
    expression: Node,
    compiled: Option<CompiledExpr>,
}

impl PluralRule {
    pub fn new(num_plurals: usize, expression: Node, strategy: EvaluationStrategy) -> Self {
        let compiled = match strategy {
            EvaluationStrategy::Interpreted => None,
            EvaluationStrategy::Compiled => Some(compile(&expression)),
        };
        PluralRule {
            num_plurals,
            expression,
            compiled,
        }
    }

    /// Build a rule from a Plural-Forms header value,
    /// e.g. `nplurals=2; plural=(n != 1);`
    pub fn from_header(text: &str, strategy: EvaluationStrategy) -> Result<Self, PluralError> {
        let (num_plurals, expression) = parse_plural_forms(text)?;
        log::debug!(
            "plural: nplurals={} plural={} ({:?})",
            num_plurals,
            expression,
            strategy
        );
        Ok(PluralRule::new(num_plurals, expression, strategy))
    }

    pub fn num_plurals(&self) -> usize {
        self.num_plurals
    }

    pub fn expression(&self) -> &Node {
        &self.expression
    }

    pub fn strategy(&self) -> EvaluationStrategy {
        if self.compiled.is_some() {
            EvaluationStrategy::Compiled
        } else {
            EvaluationStrategy::Interpreted
        }
    }

    /// Plural form index for `n`, narrowed to 32 bits
    ///
    /// The value is not clamped to `0..num_plurals`; catalog lookups treat an
    /// index outside that range as a missing form.
    pub fn evaluate(&self, n: i64) -> Result<i32, PluralError> {
        let value = match &self.compiled {
            Some(compiled) => compiled(n)?,
            None => evaluate(&self.expression, n)?,
        };
        Ok(value as i32)
    }
}

/// Two forms: index 0 when n == 1, index 1 otherwise
impl Default for PluralRule {
    fn default() -> Self {
        PluralRule::new(
            2,
            Node::binary(BinaryOp::NotEquals, Node::N, Node::Number(1)),
            EvaluationStrategy::Interpreted,
        )
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluralRule")
            .field("num_plurals", &self.num_plurals)
            .field("expression", &self.expression.to_string())
            .field("strategy", &self.strategy())
            .finish()
    }
}
