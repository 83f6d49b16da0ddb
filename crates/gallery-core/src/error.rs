use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog fetch failed: {0}")]
    Fetch(String),

    #[error("Catalog format error: {0}")]
    Format(String),

    #[error("Invalid platform filter: {0}")]
    InvalidPlatform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
