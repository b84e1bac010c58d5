use serde::{Deserialize, Serialize};

/// Configuration for chunk reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReaderConfig {
    /// Upper bound on the inflated size of a single zTXt/iTXt payload.
    /// Larger payloads are dropped like any other undecodable chunk.
    pub max_inflated_bytes: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_inflated_bytes: 64 * 1024 * 1024,
        }
    }
}

impl ReaderConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_inflated_bytes == 0 {
            return Err("max_inflated_bytes must be > 0".to_string());
        }
        Ok(())
    }
}
