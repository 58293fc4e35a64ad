//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Catalog template (.pot) entry store

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::entry::{CatalogEntry, EntryKey};
use crate::error::{Error, Result};
use crate::header::CatalogHeader;

/// Entries merged by (context, msgid), kept in first-seen order
#[derive(Debug, Clone)]
pub struct CatalogTemplate {
    path: PathBuf,
    pub header: CatalogHeader,
    entries: Vec<CatalogEntry>,
    index: HashMap<EntryKey, usize>,
}

impl CatalogTemplate {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CatalogTemplate {
            path: path.as_ref().to_path_buf(),
            header: CatalogHeader::default(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry for the key, created on first use
    fn entry_mut(&mut self, context: Option<&str>, msgid: &str) -> &mut CatalogEntry {
        let key = EntryKey::new(context, msgid);
        let slot = match self.index.get(&key) {
            Some(&slot) => slot,
            None => {
                self.entries.push(CatalogEntry::new(key.context.as_deref(), msgid));
                self.index.insert(key, self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[slot]
    }

    /// Record an occurrence of a singular message
    ///
    /// Empty message ids are ignored.
    pub fn add_or_update_entry(&mut self, context: Option<&str>, msgid: &str, reference: &str) {
        if msgid.is_empty() {
            return;
        }
        self.entry_mut(context, msgid).add_reference(reference);
    }

    /// Record an occurrence of a message with a plural form
    ///
    /// The first plural id seen for an entry is kept.
    pub fn add_or_update_plural_entry(
        &mut self,
        context: Option<&str>,
        msgid: &str,
        msgid_plural: &str,
        reference: &str,
    ) {
        if msgid.is_empty() {
            return;
        }
        let entry = self.entry_mut(context, msgid);
        entry.set_plural(msgid_plural);
        entry.add_reference(reference);
    }

    pub fn get(&self, context: Option<&str>, msgid: &str) -> Option<&CatalogEntry> {
        self.index
            .get(&EntryKey::new(context, msgid))
            .map(|&slot| &self.entries[slot])
    }

    pub fn get_mut(&mut self, context: Option<&str>, msgid: &str) -> Option<&mut CatalogEntry> {
        let slot = *self.index.get(&EntryKey::new(context, msgid))?;
        self.entries.get_mut(slot)
    }

    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the template to its path
    ///
    /// An existing file is first moved to `<path>.bak`, replacing any older
    /// backup.
    pub fn write(&self) -> Result<()> {
        if self.path.exists() {
            let mut backup = self.path.clone().into_os_string();
            backup.push(".bak");
            let backup = PathBuf::from(backup);

            log::debug!("template: backing up {} to {}", self.path.display(), backup.display());
            if backup.exists() {
                fs::remove_file(&backup).map_err(|source| Error::Backup {
                    path: backup.clone(),
                    source,
                })?;
            }
            fs::rename(&self.path, &backup).map_err(|source| Error::Backup {
                path: backup.clone(),
                source,
            })?;
        }

        log::debug!("template: writing {} entries to {}", self.len(), self.path.display());
        fs::write(&self.path, self.to_string())?;
        Ok(())
    }
}

impl fmt::Display for CatalogTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for entry in &self.entries {
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
