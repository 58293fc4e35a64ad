//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! gettext catalog runtime
//!
//! This library loads compiled GNU gettext message catalogs (.mo files) and
//! answers translation lookups at runtime:
//! - mo_lib: byte reader, .mo parser and writer, locale file discovery
//! - plural_lib: Plural-Forms expression parser, interpreter and compiler
//! - catalog: the thread-safe runtime catalog and its lookup surface
//! - cache: per-domain catalog cache with language switching

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod mo_lib;
pub mod plural_lib;

pub use crate::cache::CatalogCache;
pub use crate::catalog::{Catalog, CatalogState, Translate};
pub use crate::config::LoadOptions;
pub use crate::error::{Error, Result};
pub use crate::plural_lib::{EvaluationStrategy, PluralError, PluralRule};
