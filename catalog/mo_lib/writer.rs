//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! GNU .mo file writer
//!
//! Produces compiled catalogs in either byte order. Entries keep insertion
//! order and no hash table is emitted (hash table size and offset are zero),
//! which every reader in this crate accepts.

use std::io::Write;

use crate::catalog::context_key;
use crate::mo_lib::byte_reader::Endianness;
use crate::mo_lib::mo_file::{StringDescriptor, MO_MAGIC};

/// Size of the header written by [`MoWriter`], including the hash table fields
pub const MO_WRITER_HEADER_SIZE: u32 = 28;

/// Builder for a compiled message catalog
#[derive(Debug, Clone, Default)]
pub struct MoWriter {
    endianness: Endianness,
    revision: u32,
    entries: Vec<(Vec<u8>, Vec<u8>)>,
}

impl MoWriter {
    pub fn new() -> Self {
        MoWriter::default()
    }

    /// Byte order of every integer in the output
    pub fn endianness(&mut self, endianness: Endianness) -> &mut Self {
        self.endianness = endianness;
        self
    }

    /// File format revision stored in the header
    pub fn revision(&mut self, major: u16, minor: u16) -> &mut Self {
        self.revision = ((major as u32) << 16) | minor as u32;
        self
    }

    /// Add an entry; use an empty original for the header entry
    pub fn add(&mut self, original: &str, translated: &str) -> &mut Self {
        self.add_bytes(original.as_bytes(), translated.as_bytes())
    }

    /// Add an entry whose strings are already encoded
    pub fn add_bytes(&mut self, original: &[u8], translated: &[u8]) -> &mut Self {
        self.entries.push((original.to_vec(), translated.to_vec()));
        self
    }

    /// Add a plural entry, optionally under a context
    pub fn add_plural(
        &mut self,
        context: Option<&str>,
        msgid: &str,
        msgid_plural: &str,
        forms: &[&str],
    ) -> &mut Self {
        let key = match context {
            Some(ctx) => context_key(ctx, msgid),
            None => msgid.to_string(),
        };
        let original = format!("{}\0{}", key, msgid_plural);
        self.add(&original, &forms.join("\0"))
    }

    /// Add a singular entry under a context
    pub fn add_with_context(&mut self, context: &str, msgid: &str, translated: &str) -> &mut Self {
        self.add(&context_key(context, msgid), translated)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn put_u32(&self, data: &mut Vec<u8>, value: u32) {
        let value = match self.endianness {
            Endianness::Native => value,
            Endianness::Reversed => value.swap_bytes(),
        };
        data.extend_from_slice(&value.to_ne_bytes());
    }

    /// Serialize the catalog
    pub fn to_bytes(&self) -> Vec<u8> {
        let nstrings = self.entries.len() as u32;
        let desc_size = StringDescriptor::SIZE as u32;

        let orig_tab_offset = MO_WRITER_HEADER_SIZE;
        let trans_tab_offset = orig_tab_offset + nstrings * desc_size;
        let strings_offset = trans_tab_offset + nstrings * desc_size;

        let mut orig_descriptors = Vec::with_capacity(self.entries.len());
        let mut trans_descriptors = Vec::with_capacity(self.entries.len());
        let mut string_data = Vec::new();

        for (original, translated) in &self.entries {
            orig_descriptors.push(StringDescriptor {
                length: original.len() as u32,
                offset: strings_offset + string_data.len() as u32,
            });
            string_data.extend_from_slice(original);
            string_data.push(0);

            trans_descriptors.push(StringDescriptor {
                length: translated.len() as u32,
                offset: strings_offset + string_data.len() as u32,
            });
            string_data.extend_from_slice(translated);
            string_data.push(0);
        }

        let mut data = Vec::with_capacity(strings_offset as usize + string_data.len());
        self.put_u32(&mut data, MO_MAGIC);
        self.put_u32(&mut data, self.revision);
        self.put_u32(&mut data, nstrings);
        self.put_u32(&mut data, orig_tab_offset);
        self.put_u32(&mut data, trans_tab_offset);
        self.put_u32(&mut data, 0); // hash_tab_size
        self.put_u32(&mut data, 0); // hash_tab_offset

        for desc in orig_descriptors.iter().chain(&trans_descriptors) {
            self.put_u32(&mut data, desc.length);
            self.put_u32(&mut data, desc.offset);
        }

        data.extend_from_slice(&string_data);
        data
    }

    /// Write the serialized catalog
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.to_bytes())
    }
}
