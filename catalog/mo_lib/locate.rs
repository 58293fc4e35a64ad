//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Locale directory discovery
//!
//! Catalogs live at `<dir>/<locale>/LC_MESSAGES/<domain>.mo`, or directly at
//! `<dir>/<locale>/<domain>.mo`. A locale name is tried as given, then with
//! `-` turned into `_`, then progressively shortened.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Fallback names for a locale of the form `language[_territory][.codeset][@modifier]`
///
/// For "es_ES.UTF-8@valencia" this yields, in order:
/// "es_ES.UTF-8@valencia", "es_ES@valencia", "es_ES.UTF-8", "es_ES",
/// "es@valencia", "es".
pub fn locale_variants(locale: &str) -> Vec<String> {
    let (base, modifier) = match locale.split_once('@') {
        Some((base, m)) => (base, Some(m)),
        None => (locale, None),
    };
    let (lang_terr, codeset) = match base.split_once('.') {
        Some((lt, c)) => (lt, Some(c)),
        None => (base, None),
    };
    let (language, territory) = match lang_terr.split_once('_') {
        Some((l, t)) => (l, Some(t)),
        None => (lang_terr, None),
    };

    let mut variants = vec![locale.to_string()];
    if let Some(m) = modifier {
        if codeset.is_some() {
            variants.push(format!("{}@{}", lang_terr, m));
        }
    }
    if let Some(c) = codeset {
        if modifier.is_some() {
            variants.push(format!("{}.{}", lang_terr, c));
        }
    }
    if codeset.is_some() || modifier.is_some() {
        variants.push(lang_terr.to_string());
    }
    if territory.is_some() {
        if let Some(m) = modifier {
            variants.push(format!("{}@{}", language, m));
        }
        variants.push(language.to_string());
    }

    dedup(variants)
}

/// Every locale name to try for `locale`, most specific first
pub fn locale_candidates(locale: &str) -> Vec<String> {
    let normalized = locale.replace('-', "_");
    let mut candidates = vec![locale.to_string()];
    candidates.extend(locale_variants(&normalized));
    dedup(candidates)
}

fn dedup(mut names: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names.retain(|name| !name.is_empty() && seen.insert(name.clone()));
    names
}

/// Candidate catalog paths for one locale name under one directory
fn candidate_paths(dir: &Path, locale: &str, domain: &str) -> [PathBuf; 2] {
    let file_name = format!("{}.mo", domain);
    [
        dir.join(locale).join("LC_MESSAGES").join(&file_name),
        dir.join(locale).join(file_name),
    ]
}

/// Find the catalog file for `domain` and `locale` under any of `dirs`
///
/// Directories are searched in order; within a directory the most specific
/// locale name wins.
pub fn find_translation_file<P: AsRef<Path>>(
    domain: &str,
    dirs: &[P],
    locale: &str,
) -> Result<PathBuf> {
    let candidates = locale_candidates(locale);

    for dir in dirs {
        for name in &candidates {
            for path in candidate_paths(dir.as_ref(), name, domain) {
                log::trace!("locate: trying {}", path.display());
                if path.is_file() {
                    log::debug!("locate: found {}", path.display());
                    return Ok(path);
                }
            }
        }
    }

    Err(Error::MissingTranslationFile {
        domain: domain.to_string(),
        locale: locale.to_string(),
    })
}
