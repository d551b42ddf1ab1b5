use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("Decorative pattern must not be empty")]
    EmptyPattern,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
