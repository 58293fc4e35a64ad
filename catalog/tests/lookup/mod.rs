//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use gettext_catalog::mo_lib::writer::MoWriter;
use gettext_catalog::{Catalog, LoadOptions, Translate};
use test_log::test;

fn load(writer: &MoWriter, locale: &str) -> Catalog {
    Catalog::from_reader(
        Cursor::new(writer.to_bytes()),
        locale,
        &LoadOptions::default(),
    )
    .unwrap()
}

/// Catalog whose translations and plural rule are all tagged with `tag`;
/// rule "plural=0" for A and "plural=1" for B
fn tagged(tag: &str, index: usize) -> Vec<u8> {
    let mut writer = MoWriter::new();
    writer
        .add(
            "",
            &format!("Language: {}\nPlural-Forms: nplurals=2; plural={};\n", tag, index),
        )
        .add("tag", tag)
        .add_plural(
            None,
            "item",
            "items",
            &[&format!("{}0", tag), &format!("{}1", tag)],
        );
    writer.to_bytes()
}

#[test]
fn test_absent_key_passes_through() {
    let catalog = load(&MoWriter::new(), "de");
    for id in ["Hello", "", "multi\nline", "{0} items"] {
        assert_eq!(catalog.get_string(id), id);
    }
}

#[test]
fn test_context_never_collides() {
    let mut writer = MoWriter::new();
    writer
        .add("x", "plain")
        .add_with_context("ctx", "x", "with ctx")
        .add_with_context("other", "x", "with other")
        .add_with_context("", "x", "with empty ctx");
    let catalog = load(&writer, "de");

    assert_eq!(catalog.get_string("x"), "plain");
    assert_eq!(catalog.get_particular_string("ctx", "x"), "with ctx");
    assert_eq!(catalog.get_particular_string("other", "x"), "with other");
    assert_eq!(catalog.get_particular_string("", "x"), "with empty ctx");
    assert_eq!(catalog.get_particular_string("missing", "x"), "x");
}

#[test]
fn test_plural_fallback_uses_caller_forms() {
    let mut writer = MoWriter::new();
    writer.add("", "Plural-Forms: nplurals=1; plural=0;\n");
    let catalog = load(&writer, "ja");

    assert_eq!(catalog.get_plural_string("apple", "apples", 1), "apple");
    assert_eq!(catalog.get_plural_string("apple", "apples", 0), "apples");
    assert_eq!(catalog.get_plural_string("apple", "apples", -1), "apples");
    assert_eq!(
        catalog.get_particular_plural_string("fruit", "apple", "apples", 1),
        "apple"
    );
}

#[test]
fn test_positional_arguments() {
    let mut writer = MoWriter::new();
    writer
        .add("", "Plural-Forms: nplurals=2; plural=(n != 1);\n")
        .add_with_context("status", "{0} of {1} done", "{1} Aufgaben, {0} erledigt")
        .add_plural(
            Some("status"),
            "{0} task",
            "{0} tasks",
            &["{0} Aufgabe", "{0} Aufgaben"],
        );
    let catalog = load(&writer, "de");

    assert_eq!(
        catalog.get_particular_string_fmt("status", "{0} of {1} done", &[&2, &5]),
        "5 Aufgaben, 2 erledigt"
    );
    assert_eq!(
        catalog.get_particular_plural_string_fmt("status", "{0} task", "{0} tasks", 1, &[&1]),
        "1 Aufgabe"
    );
    // untranslated text is formatted too
    assert_eq!(
        catalog.get_string_fmt("{0}% complete", &[&40]),
        "40% complete"
    );
}

#[test]
fn test_reload_switches_everything() {
    let catalog = Catalog::from_reader(
        Cursor::new(tagged("A", 0)),
        "xx",
        &LoadOptions::default(),
    )
    .unwrap();
    let before = catalog.snapshot();

    catalog
        .reload_from_reader(Cursor::new(tagged("B", 1)), "xx", &LoadOptions::default())
        .unwrap();

    // an old snapshot is unaffected by the reload
    assert_eq!(before.locale(), "A");
    assert_eq!(before.get_plural_string("item", "items", 5), "A0");
    assert_eq!(catalog.locale(), "B");
    assert_eq!(catalog.get_string("tag"), "B");
    assert_eq!(catalog.get_plural_string("item", "items", 5), "B1");
}

#[test]
fn test_concurrent_readers_never_see_mixed_state() {
    let catalog = Catalog::from_reader(
        Cursor::new(tagged("A", 0)),
        "xx",
        &LoadOptions::default(),
    )
    .unwrap();
    let sources = [tagged("A", 0), tagged("B", 1)];
    let stop = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !stop.load(Ordering::Relaxed) {
                    let state = catalog.snapshot();
                    let tag = state.get_string("tag");
                    let form = state.get_plural_string("item", "items", 5);
                    let expected = if tag == "A" { "A0" } else { "B1" };
                    assert_eq!(form, expected);
                    assert_eq!(state.locale(), tag);
                }
            });
        }

        for round in 0..200 {
            let data = sources[round % 2].clone();
            catalog
                .reload_from_reader(Cursor::new(data), "xx", &LoadOptions::default())
                .unwrap();
        }
        stop.store(true, Ordering::Relaxed);
    });
}
