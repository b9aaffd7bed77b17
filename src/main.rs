// Inherit lint configuration from lib.rs for consistency
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::items_after_statements,
    clippy::similar_names
)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use findex::cli::commands::{Cli, Command};
use findex::cli::output;
use findex::config::Config;
use findex::indexer;
use findex::ingest::keywords::extract_keywords;
use findex::ingest::Language;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

type CmdResult = Result<(), Box<dyn std::fmt::Display>>;

fn run(cli: Cli) -> CmdResult {
    match cli.command {
        Command::Index { path } => cmd_index(&path),
        Command::Files { path } => cmd_files(path.as_deref()),
        Command::Keywords { path } => cmd_keywords(&path),
        Command::Stats => cmd_stats(),
    }
}

fn map_err(e: impl std::fmt::Display + 'static) -> Box<dyn std::fmt::Display> {
    Box::new(e.to_string())
}

fn get_config() -> Result<Config, Box<dyn std::fmt::Display>> {
    Config::from_cwd().map_err(map_err)
}

fn cmd_index(path: &str) -> CmdResult {
    let config = if path == "." {
        get_config()?
    } else {
        Config::new(path)
    };

    let result = indexer::run_index(&config).map_err(map_err)?;
    println!("{}", output::format_json(&result));
    Ok(())
}

fn cmd_files(path_filter: Option<&str>) -> CmdResult {
    let config = get_config()?;
    let mut records = indexer::ensure_index(&config).map_err(map_err)?;
    if let Some(prefix) = path_filter {
        records.retain(|r| r.path.starts_with(prefix));
    }

    #[derive(serde::Serialize)]
    struct FilesOutput {
        count: usize,
        files: Vec<findex::models::FileRecord>,
    }

    println!(
        "{}",
        output::format_json(&FilesOutput {
            count: records.len(),
            files: records,
        })
    );
    Ok(())
}

fn cmd_keywords(path: &str) -> CmdResult {
    let config = get_config()?;
    let full_path = config.project_root.join(path);
    let content = std::fs::read_to_string(&full_path).map_err(map_err)?;
    let language = Language::from_path(&full_path).label();

    #[derive(serde::Serialize)]
    struct KeywordsOutput {
        path: String,
        language: &'static str,
        keywords: Vec<String>,
    }

    println!(
        "{}",
        output::format_json(&KeywordsOutput {
            path: path.to_string(),
            language,
            keywords: extract_keywords(&content, language),
        })
    );
    Ok(())
}

fn cmd_stats() -> CmdResult {
    let config = get_config()?;
    let records = indexer::ensure_index(&config).map_err(map_err)?;

    let total_lines: u64 = records.iter().map(|r| r.lines_of_code).sum();
    let mut by_language: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for record in &records {
        *by_language.entry(record.language.as_str()).or_default() += 1;
    }
    let mut languages: Vec<LanguageCount> = by_language
        .into_iter()
        .map(|(language, files)| LanguageCount {
            language: language.to_string(),
            files,
        })
        .collect();
    languages.sort_by(|a, b| b.files.cmp(&a.files).then_with(|| a.language.cmp(&b.language)));

    #[derive(serde::Serialize)]
    struct LanguageCount {
        language: String,
        files: usize,
    }

    #[derive(serde::Serialize)]
    struct StatsOutput {
        files: usize,
        total_lines: u64,
        languages: Vec<LanguageCount>,
    }

    println!(
        "{}",
        output::format_json(&StatsOutput {
            files: records.len(),
            total_lines,
            languages,
        })
    );
    Ok(())
}
