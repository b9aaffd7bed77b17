use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "findex",
    version,
    about = "Project file indexer - scan a source tree and write a plain-text index of per-file metadata",
    after_help = "The index lives at .findex.txt in the project root and is \
                  replaced wholesale on every `findex index` run. Dot-prefixed \
                  directories are always skipped; other exclusions come from \
                  the root .gitignore."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan the project and write the .findex.txt index.
    ///
    /// Honors the root .gitignore and never descends into dot-prefixed
    /// directories. Unreadable or non-UTF-8 files are skipped, not fatal;
    /// the run statistics report each skip category.
    Index {
        /// Project root directory (default: current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// List indexed files from the index artifact (auto-indexes if absent)
    Files {
        /// Filter by path prefix (e.g., "src/")
        #[arg(long)]
        path: Option<String>,
    },

    /// Extract summary keywords for a single file
    Keywords {
        /// File path (project-relative)
        path: String,
    },

    /// Show index statistics (files, total lines, per-language counts)
    Stats,
}
