//
// Copyright (c) 2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

//! Header entry of a catalog template

use std::fmt;

use chrono::{DateTime, FixedOffset, Local};

use crate::entry::escape;

/// Date format of POT-Creation-Date and PO-Revision-Date
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M%z";

/// Fields of the header entry (msgid "")
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogHeader {
    pub project_id_version: String,
    pub report_msgid_bugs_to: Option<String>,
    pub creation_date: DateTime<FixedOffset>,
    /// Rendered as the gettext placeholder when unset
    pub revision_date: Option<DateTime<FixedOffset>>,
    pub translator: Option<String>,
    pub translator_email: Option<String>,
    pub language_team: Option<String>,
    pub language_team_email: Option<String>,
    pub mime_version: String,
    pub content_type: String,
    pub transfer_encoding: String,
    pub plural_forms: Option<String>,
    pub generator: String,
}

impl Default for CatalogHeader {
    fn default() -> Self {
        CatalogHeader {
            project_id_version: "PACKAGE VERSION".to_string(),
            report_msgid_bugs_to: None,
            creation_date: Local::now().into(),
            revision_date: None,
            translator: None,
            translator_email: None,
            language_team: None,
            language_team_email: None,
            mime_version: "1.0".to_string(),
            content_type: "text/plain; charset=utf-8".to_string(),
            transfer_encoding: "8bit".to_string(),
            plural_forms: None,
            generator: format!("gettext-template {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// "Name <email>", or whichever part is present
fn person(name: Option<&str>, email: Option<&str>) -> String {
    match (name.unwrap_or_default(), email) {
        (name, Some(email)) if !email.is_empty() => {
            if name.is_empty() {
                format!("<{}>", email)
            } else {
                format!("{} <{}>", name, email)
            }
        }
        (name, _) => name.to_string(),
    }
}

impl CatalogHeader {
    pub fn new() -> Self {
        CatalogHeader::default()
    }

    /// Header fields in output order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("Project-Id-Version", self.project_id_version.clone())];
        if let Some(bugs_to) = &self.report_msgid_bugs_to {
            fields.push(("Report-Msgid-Bugs-To", bugs_to.clone()));
        }
        fields.push((
            "POT-Creation-Date",
            self.creation_date.format(DATE_FORMAT).to_string(),
        ));
        fields.push((
            "PO-Revision-Date",
            match &self.revision_date {
                Some(date) => date.format(DATE_FORMAT).to_string(),
                None => "YEAR-MO-DA HO:MI+ZONE".to_string(),
            },
        ));
        fields.push((
            "Last-Translator",
            person(self.translator.as_deref(), self.translator_email.as_deref()),
        ));
        fields.push((
            "Language-Team",
            person(
                self.language_team.as_deref(),
                self.language_team_email.as_deref(),
            ),
        ));
        fields.push(("MIME-Version", self.mime_version.clone()));
        fields.push(("Content-Type", self.content_type.clone()));
        fields.push(("Content-Transfer-Encoding", self.transfer_encoding.clone()));
        if let Some(plural_forms) = &self.plural_forms {
            fields.push(("Plural-Forms", plural_forms.clone()));
        }
        fields.push(("X-Generator", self.generator.clone()));
        fields
    }
}

/// The complete header entry, followed by a blank line
impl fmt::Display for CatalogHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "msgid \"\"")?;
        writeln!(f, "msgstr \"\"")?;
        for (name, value) in self.fields() {
            writeln!(f, "\"{}: {}\\n\"", name, escape(&value))?;
        }
        writeln!(f)
    }
}
