//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gettext_catalog::mo_lib::byte_reader::Endianness;
use gettext_catalog::mo_lib::mo_file::MoFile;
use gettext_catalog::mo_lib::writer::MoWriter;
use gettext_catalog::{Catalog, Error, LoadOptions, Translate};
use proptest::{prop_assert_eq, test_runner::TestRunner};
use test_log::test;

const HEADER: &str = "Project-Id-Version: demo 1.0\n\
Language: ru\n\
Content-Type: text/plain; charset=UTF-8\n\
Plural-Forms: nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<10 || n%100>=20) ? 1 : 2);\n";

fn get_test_runner(cases: u32) -> TestRunner {
    TestRunner::new(proptest::test_runner::Config {
        cases,
        failure_persistence: None,

        ..proptest::test_runner::Config::default()
    })
}

fn sample_writer(endianness: Endianness) -> MoWriter {
    let mut writer = MoWriter::new();
    writer
        .endianness(endianness)
        .add("", HEADER)
        .add("Hello", "Привет")
        .add_with_context("menu", "Open", "Открыть")
        .add_plural(None, "file", "files", &["файл", "файла", "файлов"]);
    writer
}

/// Stream that records when it is dropped
struct TrackedReader {
    inner: Cursor<Vec<u8>>,
    dropped: Arc<AtomicBool>,
}

impl Read for TrackedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Seek for TrackedReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl Drop for TrackedReader {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

#[test]
fn test_native_and_reversed_parse_identically() {
    let native = MoFile::read(&sample_writer(Endianness::Native).to_bytes()).unwrap();
    let reversed = MoFile::read(&sample_writer(Endianness::Reversed).to_bytes()).unwrap();

    assert_eq!(native.endianness, Endianness::Native);
    assert_eq!(reversed.endianness, Endianness::Reversed);
    assert_eq!(native.translations, reversed.translations);
    assert_eq!(native.headers, reversed.headers);
    assert_eq!(native.translations.len(), 3);
}

#[test]
fn test_random_catalogs_round_trip() {
    let strategy = proptest::collection::hash_map("[a-z]{1,8}", "[a-zA-Z0-9 äöüß]{0,12}", 0..24);

    get_test_runner(64)
        .run(&strategy, |entries| {
            let mut native = MoWriter::new();
            let mut reversed = MoWriter::new();
            reversed.endianness(Endianness::Reversed);
            for (key, value) in &entries {
                native.add(key, value);
                reversed.add(key, value);
            }

            let a = MoFile::read(&native.to_bytes()).unwrap();
            let b = MoFile::read(&reversed.to_bytes()).unwrap();
            prop_assert_eq!(&a.translations, &b.translations);
            prop_assert_eq!(a.translations.len(), entries.len());
            for (key, value) in &entries {
                prop_assert_eq!(a.translations[key].as_slice(), &[value.clone()][..]);
            }
            Ok(())
        })
        .unwrap();
}

#[test]
fn test_header_entry_populates_headers_only() {
    let mo = MoFile::read(&sample_writer(Endianness::Native).to_bytes()).unwrap();

    assert!(!mo.translations.contains_key(""));
    assert_eq!(mo.headers.len(), 4);
    assert_eq!(mo.headers.get("Project-Id-Version"), Some("demo 1.0"));
    assert_eq!(mo.headers.get("Language"), Some("ru"));
    assert_eq!(
        mo.headers.get("Content-Type"),
        Some("text/plain; charset=UTF-8")
    );
    assert!(mo.headers.get("Plural-Forms").unwrap().starts_with("nplurals=3;"));
}

#[test]
fn test_charset_applies_to_following_entries() {
    let koi8 = encoding_rs::KOI8_R;
    let (before, _, _) = koi8.encode("до");
    let (after, _, _) = koi8.encode("после");

    let mut writer = MoWriter::new();
    writer
        .add_bytes(b"before", &before)
        .add("", "Content-Type: text/plain; charset=KOI8-R\n")
        .add_bytes(b"after", &after);

    let mo = MoFile::read(&writer.to_bytes()).unwrap();
    assert_eq!(mo.encoding, koi8);
    assert_eq!(mo.get("after").unwrap(), &["после"]);
    // decoded before the switch, with the default encoding
    assert_ne!(mo.get("before").unwrap(), &["до"]);
    assert!(mo.get("before").unwrap()[0].contains('\u{FFFD}'));
}

#[test]
fn test_default_encoding_option() {
    let (latin, _, _) = encoding_rs::WINDOWS_1252.encode("café");

    let mut writer = MoWriter::new();
    writer
        .add("", "Content-Type: text/plain; charset=UTF-8\n")
        .add_bytes(b"coffee", &latin);
    let data = writer.to_bytes();

    let options = LoadOptions::new()
        .with_default_encoding(encoding_rs::WINDOWS_1252)
        .with_auto_detect_encoding(false);
    let mo = MoFile::parse_with(Cursor::new(&data), &options).unwrap();
    assert_eq!(mo.encoding, encoding_rs::WINDOWS_1252);
    assert_eq!(mo.get("coffee").unwrap(), &["café"]);

    // with detection on, the header switches back to UTF-8
    let mo = MoFile::parse_with(Cursor::new(&data), &options.with_auto_detect_encoding(true))
        .unwrap();
    assert_eq!(mo.encoding, encoding_rs::UTF_8);
}

#[test]
fn test_bad_magic_is_fatal() {
    let mut data = sample_writer(Endianness::Native).to_bytes();
    data[..4].copy_from_slice(b"MO\0\0");

    assert!(matches!(MoFile::read(&data), Err(Error::InvalidFormat(_))));
    assert!(matches!(
        Catalog::from_reader(Cursor::new(data), "ru", &LoadOptions::default()),
        Err(Error::InvalidFormat(_))
    ));
}

#[test]
fn test_unsupported_revision_is_fatal() {
    let mut writer = sample_writer(Endianness::Reversed);
    writer.revision(3, 1);
    match MoFile::read(&writer.to_bytes()) {
        Err(Error::UnsupportedRevision { major: 3, minor: 1 }) => {}
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_truncated_tables_are_fatal() {
    let data = sample_writer(Endianness::Native).to_bytes();
    // cut into the translation descriptor table
    assert!(matches!(
        MoFile::read(&data[..40]),
        Err(Error::UnexpectedEndOfData)
    ));
    assert!(matches!(MoFile::read(&[]), Err(Error::UnexpectedEndOfData)));
}

#[test]
fn test_stream_released_on_every_path() {
    for data in [
        sample_writer(Endianness::Native).to_bytes(),
        vec![0xffu8; 64],
    ] {
        let dropped = Arc::new(AtomicBool::new(false));
        let reader = TrackedReader {
            inner: Cursor::new(data),
            dropped: Arc::clone(&dropped),
        };
        let _ = Catalog::from_reader(reader, "ru", &LoadOptions::default());
        assert!(dropped.load(Ordering::SeqCst));
    }
}

#[test]
fn test_load_from_locale_directory() {
    let dir = tempfile::tempdir().unwrap();
    let lc = dir.path().join("ru").join("LC_MESSAGES");
    fs::create_dir_all(&lc).unwrap();
    fs::write(
        lc.join("demo.mo"),
        sample_writer(Endianness::Native).to_bytes(),
    )
    .unwrap();

    let dirs = [dir.path()];
    let catalog = Catalog::load("demo", &dirs, "ru_RU.UTF-8", &LoadOptions::default()).unwrap();
    // Language header wins over the requested locale name
    assert_eq!(catalog.locale(), "ru");
    assert_eq!(catalog.get_string("Hello"), "Привет");
    assert_eq!(catalog.get_plural_string("file", "files", 21), "файл");
    assert_eq!(catalog.get_plural_string("file", "files", 3), "файла");
    assert_eq!(catalog.get_plural_string("file", "files", 11), "файлов");
}

#[test]
fn test_missing_file_loads_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let dirs = [dir.path()];

    let catalog = Catalog::load("demo", &dirs, "fr_FR", &LoadOptions::default()).unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.locale(), "fr_FR");
    assert_eq!(catalog.get_string("Hello"), "Hello");
    assert_eq!(catalog.get_plural_string("file", "files", 2), "files");
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let lc = dir.path().join("de");
    fs::create_dir_all(&lc).unwrap();
    fs::write(lc.join("demo.mo"), b"not a catalog at all, just text").unwrap();

    let dirs = [dir.path()];
    assert!(matches!(
        Catalog::load("demo", &dirs, "de", &LoadOptions::default()),
        Err(Error::InvalidFormat(_))
    ));
}
