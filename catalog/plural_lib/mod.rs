//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Plural-Forms expression engine
//!
//! A Plural-Forms header such as
//! `nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);`
//! is tokenized, parsed into an AST by a Pratt parser, and turned into a
//! [`PluralRule`] that maps a count to a plural form index, either by walking
//! the AST or through a precompiled closure tree.

pub mod ast;
pub mod compile;
pub mod eval;
pub mod parser;
pub mod rule;
pub mod token;

pub use ast::{BinaryOp, Node};
pub use parser::{parse_expression, parse_num_plurals, parse_plural_formula_text, parse_plural_forms};
pub use rule::{EvaluationStrategy, PluralRule};

use token::TokenKind;

/// Error type for plural expression parsing and evaluation
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PluralError {
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("expected {expected}, found '{found}' at position {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
        position: usize,
    },

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("missing '{0}' parameter")]
    MissingParameter(&'static str),

    #[error("division by zero")]
    DivisionByZero,

    #[error("expression nested deeper than {limit} levels at position {position}")]
    TooDeeplyNested { limit: usize, position: usize },
}
