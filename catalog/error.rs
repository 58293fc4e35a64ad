//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Error types for catalog loading

use std::io;

use crate::plural_lib::PluralError;

/// Errors raised while loading a message catalog.
///
/// Lookups on a loaded [`Catalog`](crate::Catalog) never fail; these errors
/// only surface from the loader.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Magic number matched in neither byte order
    #[error("invalid catalog format: {0}")]
    InvalidFormat(String),

    /// Major revision above the supported maximum
    #[error("unsupported catalog revision {major}.{minor}")]
    UnsupportedRevision { major: u16, minor: u16 },

    /// Stream is shorter than a table or string requires
    #[error("unexpected end of catalog data")]
    UnexpectedEndOfData,

    /// Character set declared in the Content-Type header is unknown
    #[error("unable to resolve character set \"{0}\"")]
    EncodingResolution(String),

    /// Malformed Plural-Forms header
    #[error("invalid plural rule: {0}")]
    Plural(#[from] PluralError),

    /// No catalog file for any variant of the requested locale
    #[error("no translation file for domain \"{domain}\" and locale \"{locale}\"")]
    MissingTranslationFile { domain: String, locale: String },

    #[error("I/O error: {0}")]
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEndOfData
        } else {
            Error::Io(e)
        }
    }
}

impl Error {
    /// Whether the loader may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::EncodingResolution(_) | Error::Plural(_) | Error::MissingTranslationFile { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
