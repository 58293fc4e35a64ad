//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Tokenizer for plural expressions

use std::fmt;

use super::PluralError;

/// Token types for the plural expression grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    N,
    Not,
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
    Question,
    Colon,
    LParen,
    RParen,
    /// End of input, `;` or a line break
    Eof,
}

impl TokenKind {
    pub fn symbol(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::N => "n",
            TokenKind::Not => "!",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Multiply => "*",
            TokenKind::Divide => "/",
            TokenKind::Modulo => "%",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessOrEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterOrEquals => ">=",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Question => "?",
            TokenKind::Colon => ":",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Eof => "end of expression",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Literal value for [`TokenKind::Number`], zero otherwise
    pub value: i64,
    /// Byte offset of the token in the input
    pub position: usize,
}

/// Single pass tokenizer; once it reports `Eof` it keeps doing so
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Tokenizer { input, pos: 0 }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        Token {
            kind,
            value: 0,
            position: start,
        }
    }

    /// Consume `second` if it follows, choosing between a two-char and a one-char token
    fn pair(&mut self, start: usize, second: u8, two: TokenKind, one: TokenKind) -> Token {
        if self.peek_byte() == Some(second) {
            self.pos += 1;
            self.token(two, start)
        } else {
            self.token(one, start)
        }
    }

    /// Consume a mandatory doubled character such as `&&`
    fn doubled(&mut self, start: usize, ch: u8, kind: TokenKind) -> Result<Token, PluralError> {
        if self.peek_byte() == Some(ch) {
            self.pos += 1;
            Ok(self.token(kind, start))
        } else {
            Err(self.unexpected_char(self.pos))
        }
    }

    fn unexpected_char(&self, position: usize) -> PluralError {
        let ch = self.input[position..].chars().next().unwrap_or('\0');
        PluralError::UnexpectedChar { ch, position }
    }

    pub fn next_token(&mut self) -> Result<Token, PluralError> {
        while let Some(b' ' | b'\t' | b'\r') = self.peek_byte() {
            self.pos += 1;
        }

        let start = self.pos;
        let Some(c) = self.peek_byte() else {
            return Ok(self.token(TokenKind::Eof, start));
        };

        // Terminators are not consumed so Eof stays sticky
        if c == b';' || c == b'\n' {
            return Ok(self.token(TokenKind::Eof, start));
        }

        if c.is_ascii_digit() {
            return self.read_number();
        }

        self.pos += 1;
        let token = match c {
            b'n' => self.token(TokenKind::N, start),
            b'(' => self.token(TokenKind::LParen, start),
            b')' => self.token(TokenKind::RParen, start),
            b'?' => self.token(TokenKind::Question, start),
            b':' => self.token(TokenKind::Colon, start),
            b'+' => self.token(TokenKind::Plus, start),
            b'-' => self.token(TokenKind::Minus, start),
            b'*' => self.token(TokenKind::Multiply, start),
            b'/' => self.token(TokenKind::Divide, start),
            b'%' => self.token(TokenKind::Modulo, start),
            b'!' => self.pair(start, b'=', TokenKind::NotEquals, TokenKind::Not),
            b'<' => self.pair(start, b'=', TokenKind::LessOrEquals, TokenKind::Less),
            b'>' => self.pair(start, b'=', TokenKind::GreaterOrEquals, TokenKind::Greater),
            b'=' => self.doubled(start, b'=', TokenKind::Equals)?,
            b'&' => self.doubled(start, b'&', TokenKind::And)?,
            b'|' => self.doubled(start, b'|', TokenKind::Or)?,
            _ => return Err(self.unexpected_char(start)),
        };
        Ok(token)
    }

    fn read_number(&mut self) -> Result<Token, PluralError> {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek_byte() {
            self.pos += 1;
        }
        let text = &self.input[start..self.pos];
        let value = text
            .parse::<i64>()
            .map_err(|_| PluralError::InvalidNumber(text.to_string()))?;
        Ok(Token {
            kind: TokenKind::Number,
            value,
            position: start,
        })
    }
}
