use serde::{Deserialize, Serialize};

/// Thresholds and key lists used by the prompt heuristics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractorConfig {
    /// A metadata `prompt` field must be longer than this (in chars, trimmed)
    pub metadata_prompt_min_chars: usize,

    /// A plain blob must be longer than this to be a fallback candidate
    pub fallback_min_chars: usize,

    /// Metadata keys scanned, in order, when `prompt` does not qualify
    pub metadata_prompt_keys: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            metadata_prompt_min_chars: 50,
            fallback_min_chars: 200,
            metadata_prompt_keys: ["positive", "positive_prompt", "Prompt", "Positive prompt"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ExtractorConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(pos) = self
            .metadata_prompt_keys
            .iter()
            .position(|k| k.trim().is_empty())
        {
            return Err(format!("metadata_prompt_keys[{pos}] must not be blank"));
        }
        Ok(())
    }
}
