use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("scene encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("invalid camera: {0}")]
    InvalidCamera(String),
}

pub type Result<T> = std::result::Result<T, Error>;
