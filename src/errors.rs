use thiserror::Error;

/// Errors that can occur while cleaning up class declarations.
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("file error: {message} (path: {path})")]
    File { message: String, path: String },

    /// The source file backing a class declaration could not be read.
    #[error("failed to read source file '{path}': {source}")]
    SourceRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {message} (path: {path}, line: {line:?})")]
    Parse {
        message: String,
        path: String,
        line: Option<u32>,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `CleanupError`.
pub type Result<T> = std::result::Result<T, CleanupError>;
