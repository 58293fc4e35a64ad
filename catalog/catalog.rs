//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Runtime message catalog
//!
//! A [`Catalog`] owns one immutable [`CatalogState`] (translations, headers,
//! plural rule and locale) behind an `Arc`. Lookups work on a snapshot of the
//! state, and a reload swaps in a complete new state, so concurrent readers
//! never see the translations of one load paired with the plural rule of
//! another.

use std::collections::HashMap;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::format::format_positional;
use crate::mo_lib::locate::find_translation_file;
use crate::mo_lib::mo_file::{Headers, MoFile};
use crate::plural_lib::{EvaluationStrategy, PluralRule};

/// Separator between context and message id in catalog keys
pub const CONTEXT_SEPARATOR: char = '\x04';

/// Catalog key of a message id under a context ("msgctxt\x04msgid")
pub fn context_key(context: &str, msgid: &str) -> String {
    let mut key = String::with_capacity(context.len() + 1 + msgid.len());
    key.push_str(context);
    key.push(CONTEXT_SEPARATOR);
    key.push_str(msgid);
    key
}

/// Lookup surface of a catalog
///
/// Lookups never fail: a missing or empty translation falls back to the
/// untranslated text supplied by the caller.
pub trait Translate {
    fn get_string(&self, id: &str) -> String;

    fn get_particular_string(&self, context: &str, id: &str) -> String;

    fn get_plural_string(&self, id: &str, plural_id: &str, n: i64) -> String;

    fn get_particular_plural_string(
        &self,
        context: &str,
        id: &str,
        plural_id: &str,
        n: i64,
    ) -> String;

    /// [`get_string`](Translate::get_string) with `{0}`, `{1}`, ... substituted
    fn get_string_fmt(&self, id: &str, args: &[&dyn Display]) -> String {
        format_positional(&self.get_string(id), args)
    }

    fn get_particular_string_fmt(&self, context: &str, id: &str, args: &[&dyn Display]) -> String {
        format_positional(&self.get_particular_string(context, id), args)
    }

    fn get_plural_string_fmt(
        &self,
        id: &str,
        plural_id: &str,
        n: i64,
        args: &[&dyn Display],
    ) -> String {
        format_positional(&self.get_plural_string(id, plural_id, n), args)
    }

    fn get_particular_plural_string_fmt(
        &self,
        context: &str,
        id: &str,
        plural_id: &str,
        n: i64,
        args: &[&dyn Display],
    ) -> String {
        format_positional(
            &self.get_particular_plural_string(context, id, plural_id, n),
            args,
        )
    }
}

/// Everything one load produced
#[derive(Debug, Default)]
pub struct CatalogState {
    translations: HashMap<String, Vec<String>>,
    headers: Headers,
    plural_rule: PluralRule,
    locale: String,
    warnings: Vec<Error>,
}

impl CatalogState {
    /// Empty state: every lookup passes through
    pub fn new(locale: &str) -> Self {
        CatalogState {
            locale: locale.to_string(),
            ..CatalogState::default()
        }
    }

    /// Build the state from a parsed catalog file
    ///
    /// The `Plural-Forms` header selects the plural rule; a malformed one is
    /// recorded as a warning and replaced by the default rule. A non-empty
    /// `Language` header overrides `locale`.
    pub fn from_mo_file(mo: MoFile, locale: &str, strategy: EvaluationStrategy) -> Self {
        let mut warnings = mo.warnings;
        let plural_rule = match mo.headers.get("Plural-Forms") {
            Some(text) => PluralRule::from_header(text, strategy).unwrap_or_else(|e| {
                log::warn!("catalog: invalid Plural-Forms \"{}\": {}", text, e);
                warnings.push(Error::Plural(e));
                PluralRule::default()
            }),
            None => PluralRule::default(),
        };

        let locale = match mo.headers.get("Language") {
            Some(language) if !language.is_empty() => {
                if language != locale {
                    log::debug!("catalog: Language header {} overrides {}", language, locale);
                }
                language.to_string()
            }
            _ => locale.to_string(),
        };

        CatalogState {
            translations: mo.translations,
            headers: mo.headers,
            plural_rule,
            locale,
            warnings,
        }
    }

    pub fn translations(&self) -> &HashMap<String, Vec<String>> {
        &self.translations
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn plural_rule(&self) -> &PluralRule {
        &self.plural_rule
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Recoverable problems met while loading this state
    pub fn warnings(&self) -> &[Error] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    fn resolve_singular<'a>(&'a self, key: &str, id: &'a str) -> &'a str {
        self.translations
            .get(key)
            .and_then(|forms| forms.first())
            .filter(|s| !s.is_empty())
            .map_or(id, String::as_str)
    }

    // Indices outside 0..num_plurals, or past the stored variants, fall back.
    fn resolve_plural<'a>(&'a self, key: &str, id: &'a str, plural_id: &'a str, n: i64) -> &'a str {
        let fallback = if n == 1 { id } else { plural_id };
        let Some(forms) = self.translations.get(key) else {
            return fallback;
        };

        let index = match self.plural_rule.evaluate(n) {
            Ok(index) => index,
            Err(e) => {
                log::warn!("catalog: plural rule failed for n={}: {}", n, e);
                return fallback;
            }
        };

        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.plural_rule.num_plurals())
            .and_then(|i| forms.get(i))
            .filter(|s| !s.is_empty())
            .map_or(fallback, String::as_str)
    }
}

impl Translate for CatalogState {
    fn get_string(&self, id: &str) -> String {
        self.resolve_singular(id, id).to_string()
    }

    fn get_particular_string(&self, context: &str, id: &str) -> String {
        self.resolve_singular(&context_key(context, id), id).to_string()
    }

    fn get_plural_string(&self, id: &str, plural_id: &str, n: i64) -> String {
        self.resolve_plural(id, id, plural_id, n).to_string()
    }

    fn get_particular_plural_string(
        &self,
        context: &str,
        id: &str,
        plural_id: &str,
        n: i64,
    ) -> String {
        self.resolve_plural(&context_key(context, id), id, plural_id, n)
            .to_string()
    }
}

/// Thread-safe message catalog for one domain and locale
#[derive(Debug)]
pub struct Catalog {
    state: RwLock<Arc<CatalogState>>,
}

impl Catalog {
    /// Empty catalog for `locale`
    pub fn new(locale: &str) -> Self {
        Catalog::from_state(CatalogState::new(locale))
    }

    pub fn from_state(state: CatalogState) -> Self {
        Catalog {
            state: RwLock::new(Arc::new(state)),
        }
    }

    /// Load a catalog from a .mo stream
    pub fn from_reader<R: Read + Seek>(
        reader: R,
        locale: &str,
        options: &LoadOptions,
    ) -> Result<Self> {
        Ok(Catalog::from_state(Self::read_state(
            reader, locale, options,
        )?))
    }

    /// Load the catalog of `domain` for `locale` from the first matching file
    /// under `dirs`
    ///
    /// When no file exists for any variant of the locale the catalog is
    /// empty and every lookup passes through.
    pub fn load<P: AsRef<Path>>(
        domain: &str,
        dirs: &[P],
        locale: &str,
        options: &LoadOptions,
    ) -> Result<Self> {
        Ok(Catalog::from_state(Self::locate_state(
            domain, dirs, locale, options,
        )?))
    }

    /// Load a catalog from a .mo file path
    pub fn load_file<P: AsRef<Path>>(path: P, locale: &str, options: &LoadOptions) -> Result<Self> {
        Ok(Catalog::from_state(Self::file_state(
            path.as_ref(),
            locale,
            options,
        )?))
    }

    fn read_state<R: Read + Seek>(
        reader: R,
        locale: &str,
        options: &LoadOptions,
    ) -> Result<CatalogState> {
        let mo = MoFile::parse_with(reader, options)?;
        Ok(CatalogState::from_mo_file(mo, locale, options.strategy))
    }

    fn file_state(path: &Path, locale: &str, options: &LoadOptions) -> Result<CatalogState> {
        log::debug!("catalog: loading {}", path.display());
        let file = File::open(path)?;
        Self::read_state(BufReader::new(file), locale, options)
    }

    fn locate_state<P: AsRef<Path>>(
        domain: &str,
        dirs: &[P],
        locale: &str,
        options: &LoadOptions,
    ) -> Result<CatalogState> {
        match find_translation_file(domain, dirs, locale) {
            Ok(path) => Self::file_state(&path, locale, options),
            Err(e @ Error::MissingTranslationFile { .. }) => {
                log::warn!("catalog: {}; using an empty catalog", e);
                let mut state = CatalogState::new(locale);
                state.warnings.push(e);
                Ok(state)
            }
            Err(e) => Err(e),
        }
    }

    /// Current state; stays valid and unchanged across later reloads
    pub fn snapshot(&self) -> Arc<CatalogState> {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Atomically install a new state
    pub fn replace(&self, state: CatalogState) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(state);
    }

    /// Reload from a .mo stream; on error the current state is kept
    pub fn reload_from_reader<R: Read + Seek>(
        &self,
        reader: R,
        locale: &str,
        options: &LoadOptions,
    ) -> Result<()> {
        let state = Self::read_state(reader, locale, options)?;
        self.replace(state);
        Ok(())
    }

    /// Reload for another locale (language switch); on error the current
    /// state is kept
    pub fn reload<P: AsRef<Path>>(
        &self,
        domain: &str,
        dirs: &[P],
        locale: &str,
        options: &LoadOptions,
    ) -> Result<()> {
        let state = Self::locate_state(domain, dirs, locale, options)?;
        self.replace(state);
        Ok(())
    }

    pub fn locale(&self) -> String {
        self.snapshot().locale().to_string()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Translate for Catalog {
    fn get_string(&self, id: &str) -> String {
        self.snapshot().get_string(id)
    }

    fn get_particular_string(&self, context: &str, id: &str) -> String {
        self.snapshot().get_particular_string(context, id)
    }

    fn get_plural_string(&self, id: &str, plural_id: &str, n: i64) -> String {
        self.snapshot().get_plural_string(id, plural_id, n)
    }

    fn get_particular_plural_string(
        &self,
        context: &str,
        id: &str,
        plural_id: &str,
        n: i64,
    ) -> String {
        self.snapshot()
            .get_particular_plural_string(context, id, plural_id, n)
    }
}
