//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Fixed-width integer reader with switchable byte order
//!
//! A .mo file is written in the byte order of the machine that produced it.
//! The reader starts in native order; when the parser detects a byte-swapped
//! magic number it flips the reader to reversed order for the rest of the
//! file.

use std::io::{Read, Seek, SeekFrom};

use byteorder::{ByteOrder, NativeEndian};

use crate::error::{Error, Result};

/// Byte order of the values in a stream, relative to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Same byte order as the running machine
    #[default]
    Native,
    /// Opposite byte order: every value is byte-swapped
    Reversed,
}

impl Endianness {
    /// Whether values in this order are little-endian on the current host
    pub fn is_little_endian(self) -> bool {
        match self {
            Endianness::Native => cfg!(target_endian = "little"),
            Endianness::Reversed => cfg!(target_endian = "big"),
        }
    }
}

/// Reader for fixed-width values from a seekable stream
#[derive(Debug)]
pub struct ByteReader<R> {
    inner: R,
    endianness: Endianness,
}

impl<R: Read + Seek> ByteReader<R> {
    /// Create a reader in native byte order
    pub fn new(inner: R) -> Self {
        ByteReader {
            inner,
            endianness: Endianness::Native,
        }
    }

    /// Create a reader with an explicit byte order
    pub fn with_endianness(inner: R, endianness: Endianness) -> Self {
        ByteReader { inner, endianness }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Switch byte order for all subsequent reads
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Fill `buf` completely, reversing it when reading in reversed order
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        self.inner.read_exact(buf)?;
        if self.endianness == Endianness::Reversed {
            buf.reverse();
        }
        Ok(())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_u16(&buf))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_i16(&buf))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_u32(&buf))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_i32(&buf))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_u64(&buf))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_i64(&buf))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_f32(&buf))
    }

    pub fn read_f64(&mut self) -> Result<f64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(NativeEndian::read_f64(&buf))
    }

    /// Read exactly `len` raw bytes (never byte-swapped)
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        let read = (&mut self.inner).take(len as u64).read_to_end(&mut data)?;
        if read < len {
            return Err(Error::UnexpectedEndOfData);
        }
        Ok(data)
    }

    /// Move to an absolute offset from the start of the stream
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    /// Total stream length; the read position is left unchanged
    pub fn stream_len(&mut self) -> Result<u64> {
        let pos = self.inner.stream_position()?;
        let len = self.inner.seek(SeekFrom::End(0))?;
        self.inner.seek(SeekFrom::Start(pos))?;
        Ok(len)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
