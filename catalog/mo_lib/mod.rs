//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! GNU .mo catalog files
//!
//! This module provides the byte-order aware reader, the .mo parser and
//! writer, and discovery of catalog files inside locale directories.

pub mod byte_reader;
pub mod content_type;
pub mod locate;
pub mod mo_file;
pub mod writer;
