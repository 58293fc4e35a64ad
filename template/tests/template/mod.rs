//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;

use chrono::{FixedOffset, TimeZone};
use gettext_template::{CatalogHeader, CatalogTemplate};
use test_log::test;

fn sample(path: &std::path::Path) -> CatalogTemplate {
    let mut template = CatalogTemplate::new(path);
    template.header = CatalogHeader {
        project_id_version: "demo 0.1".to_string(),
        creation_date: FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 31, 23, 59, 0)
            .unwrap(),
        plural_forms: Some("nplurals=2; plural=(n != 1);".to_string()),
        generator: "demo".to_string(),
        ..CatalogHeader::default()
    };
    template.add_or_update_entry(None, "Hello", "src/main.rs:3");
    template.add_or_update_plural_entry(
        Some("inbox"),
        "{0} message",
        "{0} messages",
        "src/inbox.rs:40",
    );
    template.add_or_update_entry(None, "Hello", "src/lib.rs:8");
    template
}

#[test]
fn test_render() {
    let template = sample(std::path::Path::new("demo.pot"));
    assert_eq!(
        template.to_string(),
        r#"msgid ""
msgstr ""
"Project-Id-Version: demo 0.1\n"
"POT-Creation-Date: 2025-01-31 23:59+0000\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: \n"
"Language-Team: \n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=utf-8\n"
"Content-Transfer-Encoding: 8bit\n"
"Plural-Forms: nplurals=2; plural=(n != 1);\n"
"X-Generator: demo\n"

#: src/main.rs:3
#: src/lib.rs:8
msgid "Hello"
msgstr ""

#: src/inbox.rs:40
msgctxt "inbox"
msgid "{0} message"
msgid_plural "{0} messages"
msgstr[0] ""
msgstr[1] ""

"#
    );
}

#[test]
fn test_write_creates_backup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("demo.pot");
    let backup = dir.path().join("demo.pot.bak");

    let template = sample(&path);
    template.write().unwrap();
    assert!(!backup.exists());
    let first = fs::read_to_string(&path).unwrap();
    assert_eq!(first, template.to_string());

    fs::write(&path, "old contents").unwrap();
    template.write().unwrap();
    assert_eq!(fs::read_to_string(&backup).unwrap(), "old contents");
    assert_eq!(fs::read_to_string(&path).unwrap(), first);

    // an older backup is replaced
    fs::write(&path, "older contents").unwrap();
    template.write().unwrap();
    assert_eq!(fs::read_to_string(&backup).unwrap(), "older contents");
}

#[test]
fn test_empty_template_is_header_only() {
    let template = CatalogTemplate::new("empty.pot");
    let text = template.to_string();
    assert!(text.starts_with("msgid \"\"\nmsgstr \"\"\n"));
    assert!(text.ends_with("\n\n"));
    assert_eq!(text.matches("msgid ").count(), 1);
}
