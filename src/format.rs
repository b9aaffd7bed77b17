//! Plain-text index format: a human-readable encoding of the index with one
//! block per file, blank line between blocks.
//!
//! ```text
//! Filename: src/app.ts
//! Language: TypeScript
//! Lines of Code: 120
//! Keywords: App, Props, render
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::models::FileRecord;

/// Matches one record block. The `Keywords:` line is optional so its absence
/// never breaks extraction of the preceding three fields.
static RECORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Filename: ([^\n]+)\nLanguage: ([^\n]+)\nLines of Code: ([^\n]+)(?:\nKeywords: ([^\n]*))?")
        .expect("static record pattern")
});

/// Serialize an index to the flat text format.
#[must_use]
pub fn serialize_index(records: &[FileRecord]) -> String {
    records
        .iter()
        .map(|r| {
            format!(
                "Filename: {}\nLanguage: {}\nLines of Code: {}\nKeywords: {}\n",
                r.path,
                r.language,
                r.lines_of_code,
                r.keywords.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse index text back into records, in order of appearance.
///
/// Tolerant by design: captured fields are trimmed, and a record whose line
/// count does not parse as a non-negative integer is dropped with a warning
/// while the rest of the document still parses.
#[must_use]
pub fn parse_index(content: &str) -> Vec<FileRecord> {
    let mut records = Vec::new();
    for caps in RECORD_RE.captures_iter(content) {
        let path = caps[1].trim().to_string();
        let language = caps[2].trim().to_string();
        let Ok(lines_of_code) = caps[3].trim().parse::<u64>() else {
            tracing::warn!(path = %path, raw = caps[3].trim(), "dropping record with unparseable line count");
            continue;
        };
        let keywords = caps
            .get(4)
            .map(|m| {
                m.as_str()
                    .split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        records.push(FileRecord {
            path,
            language,
            lines_of_code,
            keywords,
        });
    }
    records
}
