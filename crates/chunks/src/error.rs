use thiserror::Error;

/// Result type for chunk reading
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that abort reading a whole file
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Buffer cannot even hold the signature
    #[error("Not a PNG: {len} bytes is shorter than the 8-byte signature")]
    TooShort { len: usize },

    /// First 8 bytes are not the PNG signature
    #[error("Not a PNG: signature mismatch")]
    InvalidSignature,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ChunkError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True for the two "this is not a PNG" variants
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::TooShort { .. } | Self::InvalidSignature)
    }
}

/// Per-chunk payload failures. The offending chunk is dropped, the scan goes on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A NUL separator the layout requires is missing
    #[error("Missing NUL separator after {0}")]
    MissingSeparator(&'static str),

    /// Payload ends before the fixed header bytes
    #[error("Truncated header: missing {0}")]
    TruncatedHeader(&'static str),

    /// Compression method other than 0 (deflate)
    #[error("Unsupported compression method: {0}")]
    UnsupportedCompression(u8),

    /// Neither zlib nor raw deflate could inflate the payload
    #[error("Inflate failed: {0}")]
    Inflate(String),

    /// Inflated payload is larger than the configured cap
    #[error("Inflated payload exceeds {limit} bytes")]
    InflatedTooLarge { limit: usize },
}

impl DecodeError {
    /// Create an inflate error
    pub fn inflate(msg: impl Into<String>) -> Self {
        Self::Inflate(msg.into())
    }
}
