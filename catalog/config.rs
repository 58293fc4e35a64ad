//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Load options and environment configuration

use std::env;
use std::path::PathBuf;

use encoding_rs::Encoding;

use crate::plural_lib::EvaluationStrategy;

/// Default locale search paths for Linux
#[cfg(target_os = "linux")]
const DEFAULT_LOCALE_PATHS: &[&str] = &[
    "/usr/share/locale",
    "/usr/local/share/locale",
    "/usr/lib/locale",
];

/// Default locale search paths for macOS
#[cfg(target_os = "macos")]
const DEFAULT_LOCALE_PATHS: &[&str] = &[
    "/usr/local/share/locale",
    "/opt/homebrew/share/locale",
    "/usr/share/locale",
];

/// Default locale search paths for other platforms
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
const DEFAULT_LOCALE_PATHS: &[&str] = &["/usr/share/locale", "/usr/local/share/locale"];

/// Options controlling how a catalog file is turned into a catalog
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Encoding used until a Content-Type header says otherwise
    pub default_encoding: &'static Encoding,
    /// Honor the charset parameter of the Content-Type header
    pub auto_detect_encoding: bool,
    /// How the Plural-Forms rule is evaluated
    pub strategy: EvaluationStrategy,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            default_encoding: encoding_rs::UTF_8,
            auto_detect_encoding: true,
            strategy: EvaluationStrategy::default(),
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        LoadOptions::default()
    }

    pub fn with_default_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.default_encoding = encoding;
        self
    }

    pub fn with_auto_detect_encoding(mut self, enabled: bool) -> Self {
        self.auto_detect_encoding = enabled;
        self
    }

    pub fn with_strategy(mut self, strategy: EvaluationStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Get the message locale from the environment
///
/// `LC_ALL` overrides `LC_MESSAGES`, which overrides `LANG`. Empty values are
/// ignored. Falls back to the C locale.
pub fn current_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "C".to_string())
}

/// Directories searched for catalogs: `TEXTDOMAINDIR` first, then the
/// platform defaults
pub fn locale_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = env::var("TEXTDOMAINDIR") {
        if !dir.is_empty() {
            paths.push(PathBuf::from(dir));
        }
    }
    paths.extend(DEFAULT_LOCALE_PATHS.iter().map(PathBuf::from));
    paths
}
