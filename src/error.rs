use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindexError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no project root to index: {path}")]
    ProjectRootMissing { path: String },

    #[error("index not found: run `findex index` first")]
    IndexNotFound,

    #[error("invalid ignore rules: {0}")]
    Ignore(#[from] ignore::Error),

    #[error("failed to write index {path}: {source}")]
    WriteIndex {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FindexError>;
