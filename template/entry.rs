//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! One msgid block of a catalog template
//!
//! ```text
//! #. extracted comment
//! #: src/main.rs:12
//! #, c-format
//! msgctxt "context"
//! msgid "original"
//! msgid_plural "plural"
//! msgstr[0] ""
//! msgstr[1] ""
//! ```

use std::fmt;

/// Column at which long strings are wrapped
pub const WRAP_COLUMN: usize = 77;

/// Identity of an entry: trimmed context and msgid
///
/// An empty context is distinct from no context.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    pub context: Option<String>,
    pub msgid: String,
}

impl EntryKey {
    pub fn new(context: Option<&str>, msgid: &str) -> Self {
        EntryKey {
            context: context.map(|c| c.trim().to_string()),
            msgid: msgid.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    context: Option<String>,
    msgid: String,
    msgid_plural: Option<String>,
    comments: Vec<String>,
    references: Vec<String>,
    flags: Vec<String>,
}

impl CatalogEntry {
    pub fn new(context: Option<&str>, msgid: &str) -> Self {
        CatalogEntry {
            context: context.map(str::to_string),
            msgid: msgid.to_string(),
            msgid_plural: None,
            comments: Vec::new(),
            references: Vec::new(),
            flags: Vec::new(),
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(self.context.as_deref(), &self.msgid)
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn msgid(&self) -> &str {
        &self.msgid
    }

    pub fn msgid_plural(&self) -> Option<&str> {
        self.msgid_plural.as_deref()
    }

    pub fn has_plural(&self) -> bool {
        self.msgid_plural.is_some()
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Set the plural msgid unless one is already set; returns whether it was set
    pub fn set_plural(&mut self, msgid_plural: &str) -> bool {
        if msgid_plural.is_empty() {
            return false;
        }
        match &self.msgid_plural {
            Some(existing) => {
                if existing != msgid_plural {
                    log::warn!(
                        "template: \"{}\" already has plural \"{}\", ignoring \"{}\"",
                        self.msgid,
                        existing,
                        msgid_plural
                    );
                }
                false
            }
            None => {
                self.msgid_plural = Some(msgid_plural.to_string());
                true
            }
        }
    }

    pub fn add_reference(&mut self, reference: &str) {
        push_unique(&mut self.references, reference);
    }

    /// Add a flag such as `c-format`
    pub fn add_flag(&mut self, flag: &str) {
        push_unique(&mut self.flags, flag);
    }

    /// Add an extracted comment (`#.`)
    pub fn add_comment(&mut self, comment: &str) {
        push_unique(&mut self.comments, comment);
    }
}

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for comment in &self.comments {
            writeln!(f, "#. {}", comment)?;
        }
        for reference in &self.references {
            writeln!(f, "#: {}", reference)?;
        }
        if !self.flags.is_empty() {
            writeln!(f, "#, {}", self.flags.join(", "))?;
        }
        if let Some(context) = &self.context {
            write_string(f, "msgctxt", context)?;
        }
        write_string(f, "msgid", &self.msgid)?;
        match &self.msgid_plural {
            Some(plural) => {
                write_string(f, "msgid_plural", plural)?;
                write_string(f, "msgstr[0]", "")?;
                write_string(f, "msgstr[1]", "")?;
            }
            None => write_string(f, "msgstr", "")?,
        }
        writeln!(f)
    }
}

/// Escape a string for use between double quotes
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Write `prefix "value"`, wrapped to fit 80 columns
///
/// A value that fits after the prefix and has no line break stays on one
/// line. Otherwise the first line is `prefix ""` and the value follows in
/// quoted chunks, broken after a space or tab once a chunk reaches
/// [`WRAP_COLUMN`] characters, and always after a line break.
pub fn write_string<W: fmt::Write>(out: &mut W, prefix: &str, value: &str) -> fmt::Result {
    let text = escape(value);
    if prefix.chars().count() + text.chars().count() < WRAP_COLUMN && !value.contains('\n') {
        return writeln!(out, "{} \"{}\"", prefix, text);
    }

    writeln!(out, "{} \"\"", prefix)?;

    let mut line_start = 0;
    let mut break_at: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        let mut end = pos + c.len_utf8();
        let mut forced = false;

        if c == '\\' {
            if let Some((next_pos, next)) = chars.next() {
                end = next_pos + next.len_utf8();
                match next {
                    'n' => {
                        break_at = Some(end);
                        forced = true;
                    }
                    't' => break_at = Some(end),
                    _ => {}
                }
            }
        } else if c == ' ' {
            break_at = Some(end);
        }

        let line_len = text[line_start..end].chars().count();
        if let Some(at) = break_at {
            if forced || line_len >= WRAP_COLUMN {
                writeln!(out, "\"{}\"", &text[line_start..at])?;
                line_start = at;
                break_at = None;
            }
        }
    }

    if line_start < text.len() {
        writeln!(out, "\"{}\"", &text[line_start..])?;
    }
    Ok(())
}
