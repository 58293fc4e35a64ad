//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Pratt parser for plural expressions
//!
//! Every token kind maps to a [`TokenRule`]: its left binding power plus
//! optional prefix and infix handlers. Binding powers, lowest to highest:
//!
//! | operators         | power |
//! |-------------------|-------|
//! | `? :`             | 20    |
//! | `\|\|`            | 30    |
//! | `&&`              | 40    |
//! | `== !=`           | 50    |
//! | `< <= > >=`       | 55    |
//! | `+ -`             | 60    |
//! | `* / %`           | 70    |
//! | `!` (prefix)      | 80    |

use super::ast::{BinaryOp, Node};
use super::token::{Token, TokenKind, Tokenizer};
use super::PluralError;

pub const BP_TERNARY: u8 = 20;
pub const BP_OR: u8 = 30;
pub const BP_AND: u8 = 40;
pub const BP_EQUALITY: u8 = 50;
pub const BP_RELATIONAL: u8 = 55;
pub const BP_ADDITIVE: u8 = 60;
pub const BP_MULTIPLICATIVE: u8 = 70;
pub const BP_UNARY: u8 = 80;

/// Deepest expression tree the parser accepts
///
/// Every nested sub-expression and every chained operator counts as one
/// level, so evaluating or dropping an accepted tree stays within the stack.
pub const MAX_NESTING: usize = 256;

type PrefixFn = fn(&mut Parser<'_>, Token) -> Result<Node, PluralError>;
type InfixFn = fn(&mut Parser<'_>, Node, Token) -> Result<Node, PluralError>;

/// Parse behavior of one token kind
#[derive(Clone, Copy)]
pub struct TokenRule {
    /// Left binding power; zero for tokens that never continue an expression
    pub lbp: u8,
    /// Invoked when the token starts an expression
    pub prefix: Option<PrefixFn>,
    /// Invoked when the token follows a complete left operand
    pub infix: Option<InfixFn>,
}

impl TokenRule {
    const fn new(lbp: u8, prefix: Option<PrefixFn>, infix: Option<InfixFn>) -> Self {
        TokenRule { lbp, prefix, infix }
    }
}

/// Grammar table
pub fn rule(kind: TokenKind) -> TokenRule {
    match kind {
        TokenKind::Number => TokenRule::new(0, Some(number), None),
        TokenKind::N => TokenRule::new(0, Some(variable), None),
        TokenKind::LParen => TokenRule::new(0, Some(group), None),
        TokenKind::Not => TokenRule::new(BP_UNARY, Some(not), None),
        TokenKind::Question => TokenRule::new(BP_TERNARY, None, Some(ternary)),
        TokenKind::Or => TokenRule::new(BP_OR, None, Some(binary)),
        TokenKind::And => TokenRule::new(BP_AND, None, Some(binary)),
        TokenKind::Equals | TokenKind::NotEquals => {
            TokenRule::new(BP_EQUALITY, None, Some(binary))
        }
        TokenKind::Less
        | TokenKind::LessOrEquals
        | TokenKind::Greater
        | TokenKind::GreaterOrEquals => TokenRule::new(BP_RELATIONAL, None, Some(binary)),
        TokenKind::Plus | TokenKind::Minus => TokenRule::new(BP_ADDITIVE, None, Some(binary)),
        TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo => {
            TokenRule::new(BP_MULTIPLICATIVE, None, Some(binary))
        }
        TokenKind::Colon | TokenKind::RParen | TokenKind::Eof => TokenRule::new(0, None, None),
    }
}

fn number(_: &mut Parser<'_>, token: Token) -> Result<Node, PluralError> {
    Ok(Node::Number(token.value))
}

fn variable(_: &mut Parser<'_>, _: Token) -> Result<Node, PluralError> {
    Ok(Node::N)
}

fn group(parser: &mut Parser<'_>, _: Token) -> Result<Node, PluralError> {
    let inner = parser.expression(0)?;
    parser.expect(TokenKind::RParen, "')'")?;
    Ok(inner)
}

fn not(parser: &mut Parser<'_>, _: Token) -> Result<Node, PluralError> {
    Ok(Node::not(parser.expression(BP_UNARY)?))
}

// Left-associative: the right operand binds only tighter operators.
fn binary(parser: &mut Parser<'_>, left: Node, token: Token) -> Result<Node, PluralError> {
    let op = BinaryOp::from_token(token.kind).ok_or(PluralError::UnexpectedToken {
        expected: "binary operator",
        found: token.kind,
        position: token.position,
    })?;
    let right = parser.expression(rule(token.kind).lbp)?;
    Ok(Node::binary(op, left, right))
}

fn ternary(parser: &mut Parser<'_>, cond: Node, _: Token) -> Result<Node, PluralError> {
    let when_true = parser.expression(0)?;
    parser.expect(TokenKind::Colon, "':'")?;
    let when_false = parser.expression(0)?;
    Ok(Node::ternary(cond, when_true, when_false))
}

/// Parser for plural expressions
pub struct Parser<'a> {
    tokenizer: Tokenizer<'a>,
    current: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, PluralError> {
        let mut tokenizer = Tokenizer::new(input);
        let current = tokenizer.next_token()?;
        Ok(Parser {
            tokenizer,
            current,
            depth: 0,
        })
    }

    /// Consume the current token and return it
    fn advance(&mut self) -> Result<Token, PluralError> {
        let next = self.tokenizer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, PluralError> {
        if self.current.kind == kind {
            self.advance()
        } else {
            Err(PluralError::UnexpectedToken {
                expected,
                found: self.current.kind,
                position: self.current.position,
            })
        }
    }

    fn descend(&mut self, position: usize) -> Result<(), PluralError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(PluralError::TooDeeplyNested {
                limit: MAX_NESTING,
                position,
            });
        }
        Ok(())
    }

    /// Parse an expression whose operators all bind tighter than `rbp`
    pub fn expression(&mut self, rbp: u8) -> Result<Node, PluralError> {
        let entry_depth = self.depth;
        let node = self.expression_at(rbp)?;
        self.depth = entry_depth;
        Ok(node)
    }

    fn expression_at(&mut self, rbp: u8) -> Result<Node, PluralError> {
        self.descend(self.current.position)?;
        let token = self.advance()?;
        let prefix = rule(token.kind).prefix.ok_or(PluralError::UnexpectedToken {
            expected: "n, number, '!' or '('",
            found: token.kind,
            position: token.position,
        })?;
        let mut left = prefix(self, token)?;

        while rbp < rule(self.current.kind).lbp {
            self.descend(self.current.position)?;
            let token = self.advance()?;
            let infix = rule(token.kind).infix.ok_or(PluralError::UnexpectedToken {
                expected: "operator",
                found: token.kind,
                position: token.position,
            })?;
            left = infix(self, left, token)?;
        }

        Ok(left)
    }

    /// Parse a complete expression; nothing but a terminator may follow it
    pub fn parse(mut self) -> Result<Node, PluralError> {
        let node = self.expression(0)?;
        self.expect(TokenKind::Eof, "end of expression")?;
        Ok(node)
    }
}

/// Parse a plural expression such as `n%10==1 ? 0 : 1`
pub fn parse_expression(input: &str) -> Result<Node, PluralError> {
    Parser::new(input)?.parse()
}

/// Byte offset just past `key=` in `text`, matched case-insensitively
fn find_parameter(text: &str, key: &str) -> Option<usize> {
    let lower = text.to_ascii_lowercase();
    let mut from = 0;
    while let Some(found) = lower[from..].find(key) {
        let start = from + found;
        let preceded_by_n = key == "plural=" && lower[..start].ends_with('n');
        if !preceded_by_n {
            return Some(start + key.len());
        }
        from = start + key.len();
    }
    None
}

/// Extract the `nplurals=<uint>` value of a Plural-Forms header
pub fn parse_num_plurals(text: &str) -> Result<usize, PluralError> {
    let start = find_parameter(text, "nplurals=").ok_or(PluralError::MissingParameter("nplurals"))?;
    let digits: &str = {
        let rest = &text[start..];
        let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return Err(PluralError::MissingParameter("nplurals"));
    }
    digits
        .parse()
        .map_err(|_| PluralError::InvalidNumber(digits.to_string()))
}

/// Extract the `plural=<expression>` text of a Plural-Forms header; the
/// expression runs to the next `;` or line break
pub fn parse_plural_formula_text(text: &str) -> Result<&str, PluralError> {
    let start = find_parameter(text, "plural=").ok_or(PluralError::MissingParameter("plural"))?;
    let rest = &text[start..];
    let end = rest.find([';', '\n']).unwrap_or(rest.len());
    let formula = &rest[..end];
    if formula.is_empty() {
        return Err(PluralError::MissingParameter("plural"));
    }
    Ok(formula)
}

/// Parse a full Plural-Forms header value into (nplurals, expression)
pub fn parse_plural_forms(text: &str) -> Result<(usize, Node), PluralError> {
    let nplurals = parse_num_plurals(text)?;
    let expr = parse_expression(parse_plural_formula_text(text)?)?;
    Ok((nplurals, expr))
}
