//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! gettext catalog source-template writer
//!
//! Collects translatable strings found by an extractor, merges repeated
//! occurrences by (context, msgid) and writes the result as a .pot file.

pub mod entry;
pub mod error;
pub mod header;
pub mod template;

pub use crate::entry::{CatalogEntry, EntryKey};
pub use crate::error::{Error, Result};
pub use crate::header::CatalogHeader;
pub use crate::template::CatalogTemplate;
