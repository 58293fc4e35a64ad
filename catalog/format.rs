//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Positional argument substitution for translated strings

use std::fmt::{Display, Write};

/// Replace `{0}`, `{1}`, ... in `template` with the matching argument
///
/// `{{` and `}}` produce literal braces. Placeholders that are not a plain
/// index, or whose index has no argument, are copied unchanged.
pub fn format_positional(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if let Some((arg, len)) = placeholder(tail, args) {
            // Writing to a String cannot fail
            let _ = write!(out, "{}", arg);
            rest = &tail[len..];
            continue;
        }

        out.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    out.push_str(rest);
    out
}

/// Argument for a `{N}` placeholder at the start of `text`, and its length
fn placeholder<'a>(text: &str, args: &[&'a dyn Display]) -> Option<(&'a dyn Display, usize)> {
    let inner = text.strip_prefix('{')?;
    let end = inner.find('}')?;
    let index = &inner[..end];
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let arg = *args.get(index.parse::<usize>().ok()?)?;
    Some((arg, end + 2))
}
