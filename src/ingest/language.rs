use std::path::Path;

/// Languages the indexer can label. The label is derived solely from the
/// file extension; anything unrecognized is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    CSharp,
    Html,
    Css,
    Json,
    Markdown,
    ReactJsx,
    ReactTsx,
    Unknown,
}

impl Language {
    /// Map a file path to a language via its extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        Self::from_extension(&ext)
    }

    /// Map a lowercase extension (without dot) to a language.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "cs" => Language::CSharp,
            "html" => Language::Html,
            "css" => Language::Css,
            "json" => Language::Json,
            "md" => Language::Markdown,
            "jsx" => Language::ReactJsx,
            "tsx" => Language::ReactTsx,
            _ => Language::Unknown,
        }
    }

    /// Resolve a display label back to a language. Labels not produced by
    /// this table resolve to `Unknown`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "JavaScript" => Language::JavaScript,
            "TypeScript" => Language::TypeScript,
            "Python" => Language::Python,
            "Java" => Language::Java,
            "C++" => Language::Cpp,
            "C#" => Language::CSharp,
            "HTML" => Language::Html,
            "CSS" => Language::Css,
            "JSON" => Language::Json,
            "Markdown" => Language::Markdown,
            "React JSX" => Language::ReactJsx,
            "React TSX" => Language::ReactTsx,
            _ => Language::Unknown,
        }
    }

    /// Human-readable label used in the index artifact.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::ReactJsx => "React JSX",
            Language::ReactTsx => "React TSX",
            Language::Unknown => "Unknown",
        }
    }
}
