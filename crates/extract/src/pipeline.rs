use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};
use crate::relevance::rank_by_relevance;
use crate::selector::PromptSelector;
use crate::types::ExtractionResult;
use pngprompt_chunks::{ChunkError, ChunkReader, ReaderConfig, TextChunk};
use std::path::Path;

/// End-to-end pipeline: PNG bytes → text chunks → ranked blobs → prompt.
///
/// Holds no mutable state; one instance can serve many files concurrently.
#[derive(Debug, Clone, Default)]
pub struct PromptExtractor {
    reader: ChunkReader,
    selector: PromptSelector,
}

impl PromptExtractor {
    /// Create an extractor, rejecting invalid configuration
    pub fn new(reader: ReaderConfig, extractor: ExtractorConfig) -> Result<Self> {
        let reader = ChunkReader::new(reader).map_err(|e| match e {
            ChunkError::InvalidConfig(msg) => ExtractError::InvalidConfig(msg),
            other => other.into(),
        })?;
        Ok(Self {
            reader,
            selector: PromptSelector::new(extractor)?,
        })
    }

    /// Extract the prompt from PNG bytes. Fails only when the bytes are not a PNG.
    pub fn extract(&self, bytes: &[u8]) -> Result<ExtractionResult> {
        let chunks = self.reader.read(bytes)?;
        Ok(self.extract_from_chunks(&chunks))
    }

    /// Extract the prompt from a PNG file
    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<ExtractionResult> {
        let chunks = self.reader.read_file(path)?;
        Ok(self.extract_from_chunks(&chunks))
    }

    /// Rank decoded chunks by keyword and run the selector over their texts
    #[must_use]
    pub fn extract_from_chunks(&self, chunks: &[TextChunk]) -> ExtractionResult {
        let blobs: Vec<&str> = rank_by_relevance(chunks)
            .into_iter()
            .map(|chunk| chunk.text.as_str())
            .collect();
        log::debug!("selecting prompt from {} text chunks", blobs.len());
        self.selector.select(&blobs)
    }

    #[must_use]
    pub const fn reader(&self) -> &ChunkReader {
        &self.reader
    }
}

/// Extract the prompt from PNG bytes with default configuration
pub fn extract_from_png(bytes: &[u8]) -> Result<ExtractionResult> {
    PromptExtractor::default().extract(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PromptSource;
    use pngprompt_chunks::ChunkKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn higher_ranked_chunk_wins_within_phase() {
        let chunks = vec![
            TextChunk::new(
                ChunkKind::Plain,
                "parameters",
                r#"{"positive":"from parameters"}"#,
            ),
            TextChunk::new(ChunkKind::Plain, "prompt", r#"{"positive":"from prompt"}"#),
        ];
        let result = PromptExtractor::default().extract_from_chunks(&chunks);
        assert_eq!(result.prompt(), Some("from prompt"));
        assert_eq!(result.source(), PromptSource::MetadataJson);
    }

    #[test]
    fn rejects_invalid_configuration() {
        let err = PromptExtractor::new(
            ReaderConfig {
                max_inflated_bytes: 0,
            },
            ExtractorConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));

        let err = PromptExtractor::new(
            ReaderConfig::default(),
            ExtractorConfig {
                metadata_prompt_keys: vec!["  ".to_string()],
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn extract_file_reads_from_disk() {
        let mut png = pngprompt_chunks::PNG_SIGNATURE.to_vec();
        let data = br#"parameters{"positive":"a fox in the snow"}"#;
        let mut payload = data[..10].to_vec();
        payload.push(0);
        payload.extend_from_slice(&data[10..]);
        png.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        png.extend_from_slice(b"tEXt");
        png.extend_from_slice(&payload);
        png.extend_from_slice(&[0; 4]);

        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fox.png");
        std::fs::write(&path, png).expect("write");

        let result = PromptExtractor::default().extract_file(&path).expect("extract");
        assert_eq!(result.prompt(), Some("a fox in the snow"));
    }

    #[test]
    fn non_png_is_an_error() {
        let err = extract_from_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, ExtractError::ChunkError(ref e) if e.is_format_error()));
    }
}
