use std::fs;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use serde::Serialize;

use crate::error::{FindexError, Result};

/// Reason why a file was skipped during indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// File exceeds the configured `max_file_size_mb` limit.
    TooLarge,
    /// File content is not valid UTF-8.
    NonUtf8,
    /// IO error while reading the file.
    IoError,
}

/// Discovered file with the paths needed for processing.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Relative path from project root (forward slashes).
    pub relative_path: String,
    /// File size in bytes.
    pub size: u64,
}

/// Recursive project scanner honoring the root ignore file.
///
/// Dot-prefixed directories are always skipped, regardless of ignore rules.
/// Directory entries are visited sorted by name so the traversal order is
/// deterministic for a given filesystem state.
pub struct Scanner {
    root: PathBuf,
    rules: Gitignore,
}

impl Scanner {
    /// Create a scanner with rules loaded from the ignore file at
    /// `ignore_path`, if present. An absent file means an empty rule set.
    pub fn new(root: impl Into<PathBuf>, ignore_path: &Path) -> Result<Self> {
        let root = root.into();
        let mut builder = GitignoreBuilder::new(&root);
        if let Ok(content) = fs::read_to_string(ignore_path) {
            for line in content.lines() {
                // Malformed individual patterns are dropped, not fatal.
                let _ = builder.add_line(None, line);
            }
        }
        let rules = builder.build()?;
        Ok(Self { root, rules })
    }

    /// Walk the project tree depth-first, returning every eligible file.
    ///
    /// A missing or unreadable root is the only fatal condition; unreadable
    /// subdirectories are silently excluded and the walk continues.
    pub fn scan(&self) -> Result<Vec<ScannedFile>> {
        if !self.root.is_dir() {
            return Err(FindexError::ProjectRootMissing {
                path: self.root.display().to_string(),
            });
        }
        let mut files = Vec::new();
        let entries = fs::read_dir(&self.root)?;
        self.walk_entries(entries, &mut files);
        Ok(files)
    }

    fn walk_entries(&self, entries: fs::ReadDir, out: &mut Vec<ScannedFile>) {
        let mut entries: Vec<fs::DirEntry> = entries.filter_map(std::result::Result::ok).collect();
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                if entry.file_name().to_string_lossy().starts_with('.') {
                    continue;
                }
                // Files inside an ignored directory can't be re-included,
                // so pruning here leaves the eligible set unchanged.
                if self.is_ignored(&path, true) {
                    continue;
                }
                if let Ok(children) = fs::read_dir(&path) {
                    self.walk_entries(children, out);
                }
            } else if !self.is_ignored(&path, false) {
                let Ok(meta) = entry.metadata() else {
                    continue;
                };
                out.push(ScannedFile {
                    relative_path: self.relative_path(&path),
                    path,
                    size: meta.len(),
                });
            }
        }
    }

    fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        self.rules
            .matched_path_or_any_parents(rel, is_dir)
            .is_ignore()
    }

    fn relative_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scanner(tmp: &TempDir) -> Scanner {
        Scanner::new(tmp.path(), &tmp.path().join(".gitignore")).unwrap()
    }

    fn relative_paths(tmp: &TempDir) -> Vec<String> {
        scanner(tmp)
            .scan()
            .unwrap()
            .into_iter()
            .map(|f| f.relative_path)
            .collect()
    }

    #[test]
    fn scanner_finds_files_recursively() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("src/util")).unwrap();
        fs::write(tmp.path().join("main.ts"), "let x = 1;").unwrap();
        fs::write(tmp.path().join("src/app.ts"), "let y = 2;").unwrap();
        fs::write(tmp.path().join("src/util/fmt.ts"), "let z = 3;").unwrap();

        let paths = relative_paths(&tmp);
        assert_eq!(paths, vec!["main.ts", "src/app.ts", "src/util/fmt.ts"]);
    }

    #[test]
    fn scanner_skips_dot_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".git")).unwrap();
        fs::create_dir_all(tmp.path().join(".cache/deep")).unwrap();
        fs::write(tmp.path().join(".git/config"), "[core]").unwrap();
        fs::write(tmp.path().join(".cache/deep/blob.js"), "var a;").unwrap();
        fs::write(tmp.path().join("main.js"), "var b;").unwrap();

        let paths = relative_paths(&tmp);
        assert_eq!(paths, vec!["main.js"]);
    }

    #[test]
    fn dot_files_are_still_eligible() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".env"), "KEY=1").unwrap();
        fs::write(tmp.path().join("a.js"), "var a;").unwrap();

        let paths = relative_paths(&tmp);
        assert_eq!(paths, vec![".env", "a.js"]);
    }

    #[test]
    fn ignore_rules_exclude_matched_files() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("dist")).unwrap();
        fs::write(tmp.path().join(".gitignore"), "*.log\ndist/\n").unwrap();
        fs::write(tmp.path().join("debug.log"), "x").unwrap();
        fs::write(tmp.path().join("dist/bundle.js"), "x").unwrap();
        fs::write(tmp.path().join("main.js"), "var a;").unwrap();

        let paths = relative_paths(&tmp);
        assert!(paths.contains(&".gitignore".to_string()));
        assert!(paths.contains(&"main.js".to_string()));
        assert!(!paths.iter().any(|p| p.contains("debug.log")));
        assert!(!paths.iter().any(|p| p.contains("bundle.js")));
    }

    #[test]
    fn negation_patterns_reinclude_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".gitignore"), "*.log\n!keep.log\n").unwrap();
        fs::write(tmp.path().join("drop.log"), "x").unwrap();
        fs::write(tmp.path().join("keep.log"), "x").unwrap();

        let paths = relative_paths(&tmp);
        assert!(paths.contains(&"keep.log".to_string()));
        assert!(!paths.contains(&"drop.log".to_string()));
    }

    #[test]
    fn missing_ignore_file_means_empty_rule_set() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("anything.xyz"), "x").unwrap();

        let paths = relative_paths(&tmp);
        assert_eq!(paths, vec!["anything.xyz"]);
    }

    #[test]
    fn missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("nope");
        let scanner = Scanner::new(&gone, &gone.join(".gitignore")).unwrap();
        let err = scanner.scan().unwrap_err();
        assert!(matches!(err, FindexError::ProjectRootMissing { .. }));
    }

    #[test]
    fn traversal_order_is_sorted() {
        let tmp = TempDir::new().unwrap();
        for name in ["zeta.js", "alpha.js", "mid.js"] {
            fs::write(tmp.path().join(name), "var a;").unwrap();
        }
        let paths = relative_paths(&tmp);
        assert_eq!(paths, vec!["alpha.js", "mid.js", "zeta.js"]);
    }
}
