use thiserror::Error;

#[derive(Error, Debug)]
pub enum GistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] minreq::Error),

    #[error("GitHub API error ({status}): {message}")]
    Api { status: i32, message: String },

    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience type alias for Results with GistError
pub type Result<T> = std::result::Result<T, GistError>;
