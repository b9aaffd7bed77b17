use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::error::{FindexError, Result};
use crate::format;
use crate::ingest::keywords::extract_keywords;
use crate::ingest::scanner::{ScannedFile, Scanner, SkipReason};
use crate::ingest::Language;
use crate::models::FileRecord;

/// Statistics from an indexing run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndexResult {
    pub files_scanned: usize,
    pub files_indexed: usize,
    /// Total files skipped (sum of all skip categories).
    pub files_skipped: usize,
    /// Files skipped because they exceed `max_file_size_mb`.
    pub skipped_too_large: usize,
    /// Files skipped because content is not valid UTF-8.
    pub skipped_non_utf8: usize,
    /// Files skipped due to IO errors.
    pub skipped_io_error: usize,
}

impl IndexResult {
    fn skip(&mut self, reason: SkipReason) {
        self.files_skipped += 1;
        match reason {
            SkipReason::TooLarge => self.skipped_too_large += 1,
            SkipReason::NonUtf8 => self.skipped_non_utf8 += 1,
            SkipReason::IoError => self.skipped_io_error += 1,
        }
    }
}

/// Run the indexer: walk the tree, process each eligible file, and replace
/// the index artifact wholesale.
pub fn run_index(config: &Config) -> Result<IndexResult> {
    if !config.project_root.is_dir() {
        return Err(FindexError::ProjectRootMissing {
            path: config.project_root.display().to_string(),
        });
    }

    let scanner = Scanner::new(&config.project_root, &config.ignore_path)?;
    let mut scanned = scanner.scan()?;
    // Never index our own artifacts; they live at the root as dot-files,
    // which the hidden-directory rule does not cover.
    let own = config.own_artifacts();
    scanned.retain(|f| !own.contains(&f.relative_path.as_str()));

    let mut result = IndexResult {
        files_scanned: scanned.len(),
        ..Default::default()
    };

    let max_size = config.max_file_size_bytes();
    let processed: Vec<std::result::Result<FileRecord, SkipReason>> = scanned
        .par_iter()
        .map(|file| process_file(file, max_size))
        .collect();

    let mut records = Vec::with_capacity(processed.len());
    for outcome in processed {
        match outcome {
            Ok(record) => {
                records.push(record);
                result.files_indexed += 1;
            }
            Err(reason) => result.skip(reason),
        }
    }

    write_index(config, &records)?;
    tracing::debug!(
        files_indexed = result.files_indexed,
        files_skipped = result.files_skipped,
        "index written"
    );
    Ok(result)
}

/// Turn one scanned file into a record. Failures are per-file skips; the
/// walk as a whole never aborts on them.
fn process_file(file: &ScannedFile, max_size: u64) -> std::result::Result<FileRecord, SkipReason> {
    if max_size > 0 && file.size > max_size {
        return Err(SkipReason::TooLarge);
    }
    let bytes = std::fs::read(&file.path).map_err(|_| SkipReason::IoError)?;
    let content = String::from_utf8(bytes).map_err(|_| SkipReason::NonUtf8)?;

    // A split on '\n' counts a trailing newline as one trailing empty
    // segment; empty content is a single segment.
    let lines_of_code = content.split('\n').count() as u64;
    let language = Language::from_path(&file.path).label();
    let keywords = extract_keywords(&content, language);

    Ok(FileRecord::new(
        file.relative_path.clone(),
        language.to_string(),
        lines_of_code,
        keywords,
    ))
}

/// Replace the index artifact all-or-nothing: write a sibling temp file and
/// rename it into place. Any failure surfaces as a single error for the run.
fn write_index(config: &Config, records: &[FileRecord]) -> Result<()> {
    let text = format::serialize_index(records);
    let tmp = config.index_path.with_extension("txt.tmp");
    let fail = |source: std::io::Error| FindexError::WriteIndex {
        path: config.index_path.display().to_string(),
        source,
    };
    std::fs::write(&tmp, text).map_err(fail)?;
    std::fs::rename(&tmp, &config.index_path).map_err(fail)?;
    Ok(())
}

/// Read the index artifact back into records.
pub fn read_index(config: &Config) -> Result<Vec<FileRecord>> {
    if !config.index_exists() {
        return Err(FindexError::IndexNotFound);
    }
    let content = std::fs::read_to_string(&config.index_path)?;
    Ok(format::parse_index(&content))
}

/// Ensure the index exists, creating it if necessary (auto-index).
pub fn ensure_index(config: &Config) -> Result<Vec<FileRecord>> {
    if !config.index_exists() {
        run_index(config)?;
    }
    read_index(config)
}
