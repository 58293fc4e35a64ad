//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! GNU .mo file format reader
//!
//! The .mo (Machine Object) file format is the binary format used by GNU gettext
//! for storing translated message catalogs:
//!
//! ```text
//! offset  0: magic number 0x950412de (either byte order)
//! offset  4: file format revision (major << 16 | minor)
//! offset  8: number of strings N
//! offset 12: offset of table with original strings
//! offset 16: offset of table with translation strings
//! ```
//!
//! Each table holds N (length, offset) pairs pointing at the string data.
//! A translation blob holds the singular translation and every plural form
//! separated by NUL bytes. The entry with an empty original string carries
//! the catalog metadata (`Content-Type`, `Plural-Forms`, `Language`, ...).

use std::collections::{BTreeMap, HashMap};
use std::io::{Cursor, Read, Seek};

use encoding_rs::Encoding;

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::mo_lib::byte_reader::{ByteReader, Endianness};
use crate::mo_lib::content_type::ContentType;

/// Magic number of a .mo file, as read in the writer's byte order
pub const MO_MAGIC: u32 = 0x950412de;

/// Highest supported major file format revision
pub const MAX_SUPPORTED_REVISION: u16 = 1;

/// Size of the fixed part of the header we read (magic .. translation table offset)
pub const MO_HEADER_SIZE: u64 = 20;

/// A string descriptor (length + offset pair) in the .mo file
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDescriptor {
    /// Length of the string (excluding null terminator)
    pub length: u32,
    /// Offset of the string from the start of the file
    pub offset: u32,
}

impl StringDescriptor {
    /// Size of a string descriptor in bytes
    pub const SIZE: u64 = 8;
}

/// Metadata fields from the header entry (msgid = "")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: BTreeMap<String, String>,
}

impl Headers {
    pub fn new() -> Self {
        Headers::default()
    }

    /// Parse `Name: value` lines; lines without a named field are skipped
    pub fn parse(text: &str) -> Self {
        let mut headers = Headers::new();
        for line in text.split(['\n', '\r']) {
            let Some((name, value)) = line.split_once(':') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            headers.insert(name, value.trim());
        }
        headers
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    /// Look up a field; exact name first, then case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.fields.get(name) {
            return Some(value.as_str());
        }
        self.fields
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn extend(&mut self, other: Headers) {
        self.fields.extend(other.fields);
    }
}

/// Parsed .mo file
#[derive(Debug)]
pub struct MoFile {
    /// File format revision (major, minor)
    pub revision: (u16, u16),
    /// Byte order of the file relative to this machine
    pub endianness: Endianness,
    /// Map from msgid (singular form) to [msgstr[0], msgstr[1], ...]
    pub translations: HashMap<String, Vec<String>>,
    /// Fields of the header entry
    pub headers: Headers,
    /// Encoding in effect when parsing finished
    pub encoding: &'static Encoding,
    /// Recoverable problems met while parsing
    pub warnings: Vec<Error>,
}

impl MoFile {
    /// Parse a .mo file from bytes with default options
    pub fn read(data: &[u8]) -> Result<Self> {
        Self::parse(Cursor::new(data))
    }

    /// Parse a .mo file from a stream with default options
    pub fn parse<R: Read + Seek>(stream: R) -> Result<Self> {
        Self::parse_with(stream, &LoadOptions::default())
    }

    /// Parse a .mo file from a stream
    ///
    /// The stream is consumed and dropped before returning, whether parsing
    /// succeeds or not.
    pub fn parse_with<R: Read + Seek>(stream: R, options: &LoadOptions) -> Result<Self> {
        let mut reader = ByteReader::new(stream);
        let stream_len = reader.stream_len()?;
        if stream_len < MO_HEADER_SIZE {
            return Err(Error::UnexpectedEndOfData);
        }

        let endianness = Self::detect_endianness(reader.read_u32()?)?;
        reader.set_endianness(endianness);
        log::debug!("mo: byte order {:?}", endianness);

        let revision = reader.read_u32()?;
        let major = (revision >> 16) as u16;
        let minor = (revision & 0xffff) as u16;
        log::debug!("mo: file revision {}.{}", major, minor);
        if major > MAX_SUPPORTED_REVISION {
            return Err(Error::UnsupportedRevision { major, minor });
        }

        let nstrings = reader.read_u32()?;
        let orig_tab_offset = reader.read_u32()?;
        let trans_tab_offset = reader.read_u32()?;
        log::debug!("mo: {} strings", nstrings);

        // Hash tables and system dependent segments are not used.
        let orig_table = Self::read_descriptors(&mut reader, orig_tab_offset, nstrings, stream_len)?;
        let trans_table =
            Self::read_descriptors(&mut reader, trans_tab_offset, nstrings, stream_len)?;

        let mut encoding = options.default_encoding;
        let mut translations = HashMap::with_capacity(orig_table.len());
        let mut headers = Headers::new();
        let mut warnings = Vec::new();

        for (orig_desc, trans_desc) in orig_table.iter().zip(&trans_table) {
            let original = Self::read_string(&mut reader, orig_desc, encoding)?;
            let translated = Self::read_string(&mut reader, trans_desc, encoding)?;

            // Plural entries carry "msgid\0msgid_plural"; only the singular is the key
            let msgid = original.split('\0').next().unwrap_or_default();

            if msgid.is_empty() {
                let text = translated.split('\0').next().unwrap_or_default();
                headers.extend(Headers::parse(text));

                if options.auto_detect_encoding {
                    if let Some(switched) = Self::header_encoding(&headers, &mut warnings) {
                        if switched != encoding {
                            log::debug!("mo: switching encoding to {}", switched.name());
                        }
                        encoding = switched;
                    }
                }
                continue;
            }

            let forms = translated.split('\0').map(String::from).collect();
            translations.insert(msgid.to_string(), forms);
        }

        log::trace!("mo: parsed {} translations", translations.len());

        Ok(MoFile {
            revision: (major, minor),
            endianness,
            translations,
            headers,
            encoding,
            warnings,
        })
    }

    /// Determine the byte order from the magic number
    fn detect_endianness(magic: u32) -> Result<Endianness> {
        if magic == MO_MAGIC {
            Ok(Endianness::Native)
        } else if magic.swap_bytes() == MO_MAGIC {
            Ok(Endianness::Reversed)
        } else {
            Err(Error::InvalidFormat(format!(
                "invalid magic number: 0x{:08x}",
                magic
            )))
        }
    }

    /// Read a table of `count` string descriptors located at `offset`
    fn read_descriptors<R: Read + Seek>(
        reader: &mut ByteReader<R>,
        offset: u32,
        count: u32,
        stream_len: u64,
    ) -> Result<Vec<StringDescriptor>> {
        let table_end = offset as u64 + count as u64 * StringDescriptor::SIZE;
        if table_end > stream_len {
            return Err(Error::UnexpectedEndOfData);
        }

        reader.seek_to(offset as u64)?;
        let mut table = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let length = reader.read_u32()?;
            let offset = reader.read_u32()?;
            table.push(StringDescriptor { length, offset });
        }
        Ok(table)
    }

    /// Read and decode the string a descriptor points at
    fn read_string<R: Read + Seek>(
        reader: &mut ByteReader<R>,
        desc: &StringDescriptor,
        encoding: &'static Encoding,
    ) -> Result<String> {
        reader.seek_to(desc.offset as u64)?;
        let bytes = reader.read_bytes(desc.length as usize)?;
        let (text, _) = encoding.decode_without_bom_handling(&bytes);
        Ok(text.into_owned())
    }

    /// Resolve the charset declared by the Content-Type header
    fn header_encoding(headers: &Headers, warnings: &mut Vec<Error>) -> Option<&'static Encoding> {
        let value = headers.get("Content-Type")?;
        let Some(content_type) = ContentType::parse(value) else {
            log::warn!("mo: unparsable Content-Type \"{}\"", value);
            warnings.push(Error::EncodingResolution(value.to_string()));
            return None;
        };
        let charset = content_type.charset()?;

        match Encoding::for_label(charset.as_bytes()) {
            Some(encoding) => Some(encoding),
            None => {
                log::warn!("mo: unknown charset \"{}\", keeping current encoding", charset);
                warnings.push(Error::EncodingResolution(charset.to_string()));
                None
            }
        }
    }

    /// Look up the translations of a msgid
    pub fn get(&self, msgid: &str) -> Option<&[String]> {
        self.translations.get(msgid).map(|v| v.as_slice())
    }
}
