//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Per-domain catalog cache
//!
//! The cache is an ordinary value owned by the application; catalogs are
//! loaded on first use and shared as `Arc<Catalog>`. Switching the locale
//! reloads every cached catalog in place, so handed-out catalogs follow the
//! switch.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::catalog::Catalog;
use crate::config::{current_locale, locale_search_paths, LoadOptions};
use crate::error::Result;

#[derive(Debug)]
struct CacheInner {
    locale: String,
    catalogs: HashMap<String, Arc<Catalog>>,
}

/// Catalogs keyed by domain, all for one current locale
#[derive(Debug)]
pub struct CatalogCache {
    search_paths: Vec<PathBuf>,
    options: LoadOptions,
    inner: Mutex<CacheInner>,
}

impl CatalogCache {
    pub fn new(search_paths: Vec<PathBuf>, locale: &str, options: LoadOptions) -> Self {
        CatalogCache {
            search_paths,
            options,
            inner: Mutex::new(CacheInner {
                locale: locale.to_string(),
                catalogs: HashMap::new(),
            }),
        }
    }

    /// Cache for the locale and search paths given by the environment
    pub fn from_env() -> Self {
        CatalogCache::new(
            locale_search_paths(),
            &current_locale(),
            LoadOptions::default(),
        )
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    pub fn locale(&self) -> String {
        self.lock().locale.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Catalog for `domain`, loading it on first use
    ///
    /// A missing catalog file yields an empty catalog, which is cached like
    /// any other. Load failures are not cached.
    pub fn get(&self, domain: &str) -> Result<Arc<Catalog>> {
        let mut inner = self.lock();
        if let Some(catalog) = inner.catalogs.get(domain) {
            return Ok(Arc::clone(catalog));
        }

        log::debug!("cache: loading domain {} for {}", domain, inner.locale);
        let catalog = Arc::new(Catalog::load(
            domain,
            self.search_paths.as_slice(),
            &inner.locale,
            &self.options,
        )?);
        inner
            .catalogs
            .insert(domain.to_string(), Arc::clone(&catalog));
        Ok(catalog)
    }

    /// Switch every cached catalog to `locale`
    ///
    /// Each catalog is swapped atomically. A catalog that fails to reload
    /// keeps its previous state; the first such error is returned after all
    /// catalogs were tried.
    pub fn set_locale(&self, locale: &str) -> Result<()> {
        let mut inner = self.lock();
        inner.locale = locale.to_string();

        let mut first_error = None;
        for (domain, catalog) in &inner.catalogs {
            let result = catalog.reload(domain, self.search_paths.as_slice(), locale, &self.options);
            if let Err(e) = result {
                log::warn!("cache: reloading {} for {} failed: {}", domain, locale, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Drop every cached catalog
    pub fn reset(&self) {
        self.lock().catalogs.clear();
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.lock().catalogs.contains_key(domain)
    }

    pub fn len(&self) -> usize {
        self.lock().catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().catalogs.is_empty()
    }
}
