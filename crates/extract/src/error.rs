use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Chunk error: {0}")]
    ChunkError(#[from] pngprompt_chunks::ChunkError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ExtractError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
