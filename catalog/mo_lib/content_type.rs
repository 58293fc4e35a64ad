//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! MIME Content-Type header value parsing
//!
//! The header entry of a catalog normally carries
//! `Content-Type: text/plain; charset=UTF-8`; the charset parameter selects
//! the decoder for the strings that follow.

use std::collections::HashMap;

/// A parsed `type/subtype; name=value` header value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    pub media_type: String,
    pub subtype: String,
    /// Parameters keyed by lowercased name
    parameters: HashMap<String, String>,
}

impl ContentType {
    /// Parse a Content-Type value; returns None when there is no `type/subtype`
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(';');
        let essence = parts.next()?.trim();
        let (media_type, subtype) = essence.split_once('/')?;
        let media_type = media_type.trim();
        let subtype = subtype.trim();
        if media_type.is_empty() || subtype.is_empty() {
            return None;
        }

        let mut parameters = HashMap::new();
        for part in parts {
            let Some((name, value)) = part.split_once('=') else {
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            if name.is_empty() {
                continue;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            parameters.insert(name, value.to_string());
        }

        Some(ContentType {
            media_type: media_type.to_string(),
            subtype: subtype.to_string(),
            parameters,
        })
    }

    /// Look up a parameter by case-insensitive name
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(&name.to_ascii_lowercase())
            .map(|s| s.as_str())
    }

    /// The charset parameter, if present and non-empty
    pub fn charset(&self) -> Option<&str> {
        self.parameter("charset").filter(|s| !s.is_empty())
    }
}
