use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use crate::ingest::language::Language;

/// Maximum number of keywords reported per file.
pub const MAX_KEYWORDS: usize = 5;

/// Pattern categories, ordered by a fixed priority: type-level names first,
/// then functions, then constants, then other globals, with method and
/// arrow-function names last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Class,
    Interface,
    TypeAlias,
    Enum,
    Function,
    Component,
    Const,
    Var,
    Global,
    Let,
    Hook,
    Method,
    Arrow,
}

impl Category {
    /// Priority rank; lower sorts first. Categories sharing a rank
    /// tie-break alphabetically by captured name.
    fn rank(self) -> u8 {
        match self {
            Category::Class => 0,
            Category::Interface => 1,
            Category::TypeAlias => 2,
            Category::Enum => 3,
            Category::Function | Category::Component => 4,
            Category::Const => 5,
            Category::Var | Category::Global => 6,
            Category::Let | Category::Hook => 7,
            Category::Method | Category::Arrow => 8,
        }
    }

    /// Plain binding categories. A name also captured as an arrow function
    /// is function-like and is dropped from these.
    fn is_binding(self) -> bool {
        matches!(self, Category::Const | Category::Var | Category::Let)
    }
}

/// One compiled pattern table per supported language. Each pattern captures a
/// single identifier in group 1; languages absent from the table yield no
/// keywords.
static PATTERNS: LazyLock<HashMap<Language, Vec<(Category, Regex)>>> = LazyLock::new(|| {
    let compile = |entries: &[(Category, &str)]| -> Vec<(Category, Regex)> {
        entries
            .iter()
            .map(|(cat, pat)| (*cat, Regex::new(pat).expect("static keyword pattern")))
            .collect()
    };

    let mut map = HashMap::new();
    map.insert(
        Language::JavaScript,
        compile(&[
            (Category::Class, r"\bclass\s+(\w+)"),
            (Category::Function, r"\bfunction\s+(\w+)"),
            (Category::Const, r"\bconst\s+(\w+)"),
            (Category::Var, r"\bvar\s+(\w+)"),
            (Category::Let, r"\blet\s+(\w+)"),
            (Category::Method, r"(\w+)\s*:\s*function"),
            (Category::Arrow, r"(\w+)\s*=\s*\([^)]*\)\s*=>"),
        ]),
    );
    map.insert(
        Language::TypeScript,
        compile(&[
            (Category::Class, r"\bclass\s+(\w+)"),
            (Category::Interface, r"\binterface\s+(\w+)"),
            (Category::TypeAlias, r"\btype\s+(\w+)"),
            (Category::Enum, r"\benum\s+(\w+)"),
            (Category::Function, r"\bfunction\s+(\w+)"),
            (Category::Const, r"\bconst\s+(\w+)"),
            (Category::Var, r"\bvar\s+(\w+)"),
            (Category::Let, r"\blet\s+(\w+)"),
            (Category::Method, r"(\w+)\s*:\s*function"),
            (Category::Arrow, r"(\w+)\s*=\s*\([^)]*\)\s*=>"),
        ]),
    );
    map.insert(
        Language::ReactJsx,
        compile(&[
            (Category::Component, r"\bconst\s+(\w+)\s*=\s*\(.*?\)\s*=>"),
            (Category::Function, r"\bfunction\s+(\w+)"),
            (Category::Class, r"\bclass\s+(\w+)\s+extends\s+React\.Component"),
            (Category::Hook, r"\bconst\s+\[(\w+),\s*set\w+\]\s*=\s*useState"),
        ]),
    );
    map.insert(
        Language::ReactTsx,
        compile(&[
            (Category::Component, r"\bconst\s+(\w+):\s*React\.FC"),
            (Category::Function, r"\bfunction\s+(\w+)"),
            (Category::Interface, r"\binterface\s+(\w+)"),
            (Category::TypeAlias, r"\btype\s+(\w+)"),
            (Category::Class, r"\bclass\s+(\w+)\s+extends\s+React\.Component"),
            (Category::Hook, r"\bconst\s+\[(\w+),\s*set\w+\]\s*=\s*useState"),
        ]),
    );
    map.insert(
        Language::Python,
        compile(&[
            (Category::Class, r"\bclass\s+(\w+)"),
            (Category::Function, r"\bdef\s+(\w+)"),
            (Category::Global, r"(?m)^(\w+)\s*="),
        ]),
    );
    map
});

/// Extract up to [`MAX_KEYWORDS`] representative identifier names from file
/// content, as a cheap semantic summary for file-selection heuristics.
///
/// Pure function of `(content, language label)`: candidates from every
/// pattern are sorted by category rank then name, deduplicated keeping the
/// highest-priority occurrence, and capped. Unsupported labels and content
/// with no matches yield an empty vec.
#[must_use]
pub fn extract_keywords(content: &str, language: &str) -> Vec<String> {
    let Some(patterns) = PATTERNS.get(&Language::from_label(language)) else {
        return Vec::new();
    };

    let mut candidates: Vec<(Category, &str)> = Vec::new();
    for (category, regex) in patterns {
        for caps in regex.captures_iter(content) {
            if let Some(name) = caps.get(1) {
                candidates.push((*category, name.as_str()));
            }
        }
    }

    // Names bound to an arrow function are function-like: keep only the
    // arrow-category candidate so they rank with methods, not constants.
    let arrow_names: HashSet<&str> = candidates
        .iter()
        .filter(|(cat, _)| *cat == Category::Arrow)
        .map(|(_, name)| *name)
        .collect();
    candidates.retain(|(cat, name)| !(cat.is_binding() && arrow_names.contains(name)));

    // Stable sort: rank first, then case-sensitive lexicographic name order.
    candidates.sort_by(|a, b| a.0.rank().cmp(&b.0.rank()).then_with(|| a.1.cmp(b.1)));

    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|(_, name)| seen.insert(*name))
        .take(MAX_KEYWORDS)
        .map(|(_, name)| name.to_string())
        .collect()
}
