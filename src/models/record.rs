use serde::Serialize;

/// Per-file metadata stored in the index artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Project-relative file path (forward slashes). Unique within one index.
    pub path: String,
    /// Language label derived from the file extension.
    pub language: String,
    /// Number of newline-delimited segments in the file content.
    /// An empty file counts as 1.
    pub lines_of_code: u64,
    /// Up to 5 extracted keyword names, priority order.
    pub keywords: Vec<String>,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: String, language: String, lines_of_code: u64, keywords: Vec<String>) -> Self {
        Self {
            path,
            language,
            lines_of_code,
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_record_fields() {
        let r = FileRecord::new(
            "src/app.ts".into(),
            "TypeScript".into(),
            42,
            vec!["App".into()],
        );
        assert_eq!(r.path, "src/app.ts");
        assert_eq!(r.language, "TypeScript");
        assert_eq!(r.lines_of_code, 42);
        assert_eq!(r.keywords, vec!["App".to_string()]);
    }
}
