use crate::config::ReaderConfig;
use crate::decoder::PayloadDecoder;
use crate::error::{ChunkError, Result};
use crate::types::{RawChunk, TextChunk};
use std::path::Path;

/// Fixed 8-byte PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

const LENGTH_LEN: usize = 4;
const TYPE_LEN: usize = 4;
const CRC_LEN: usize = 4;
const IEND: [u8; 4] = *b"IEND";

/// Main reader interface: PNG bytes in, decoded text chunks out
#[derive(Debug, Clone, Default)]
pub struct ChunkReader {
    decoder: PayloadDecoder,
}

impl ChunkReader {
    /// Create a new reader with configuration
    pub fn new(config: ReaderConfig) -> Result<Self> {
        config.validate().map_err(ChunkError::invalid_config)?;
        Ok(Self {
            decoder: PayloadDecoder::new(&config),
        })
    }

    /// Read the text chunks of a PNG held in memory, in file order.
    ///
    /// Only a missing or wrong signature is an error. Chunks that fail to
    /// decode are dropped and a truncated tail ends the scan quietly.
    pub fn read(&self, bytes: &[u8]) -> Result<Vec<TextChunk>> {
        let chunks = Self::scan(bytes)?
            .into_iter()
            .filter_map(|raw| self.decode(&raw))
            .collect();
        Ok(chunks)
    }

    /// Read the text chunks of a PNG file
    pub fn read_file(&self, path: impl AsRef<Path>) -> Result<Vec<TextChunk>> {
        let bytes = std::fs::read(path.as_ref())?;
        self.read(&bytes)
    }

    /// Frame every chunk up to `IEND` without decoding payloads.
    ///
    /// CRC trailers are skipped, never verified.
    pub fn scan(bytes: &[u8]) -> Result<Vec<RawChunk<'_>>> {
        if bytes.len() < PNG_SIGNATURE.len() {
            return Err(ChunkError::TooShort { len: bytes.len() });
        }
        if bytes[..PNG_SIGNATURE.len()] != PNG_SIGNATURE {
            return Err(ChunkError::InvalidSignature);
        }

        let mut chunks = Vec::new();
        let mut pos = PNG_SIGNATURE.len();

        while let Some(header) = bytes.get(pos..pos + LENGTH_LEN + TYPE_LEN) {
            let length = u32::from_be_bytes([header[0], header[1], header[2], header[3]]) as usize;
            let type_code = [header[4], header[5], header[6], header[7]];
            let data_start = pos + LENGTH_LEN + TYPE_LEN;

            let Some(next) = data_start
                .checked_add(length)
                .and_then(|end| end.checked_add(CRC_LEN))
                .filter(|&end| end <= bytes.len())
            else {
                log::debug!(
                    "chunk {} at offset {pos} declares {length} bytes past end of buffer, stopping",
                    String::from_utf8_lossy(&type_code)
                );
                break;
            };

            if type_code == IEND {
                break;
            }

            chunks.push(RawChunk::new(
                type_code,
                &bytes[data_start..data_start + length],
            ));
            pos = next;
        }

        Ok(chunks)
    }

    fn decode(&self, raw: &RawChunk<'_>) -> Option<TextChunk> {
        let kind = raw.text_kind()?;
        match self.decoder.decode(kind, raw.data) {
            Ok(chunk) => Some(chunk),
            Err(e) => {
                log::debug!("dropping {} chunk: {e}", kind.as_str());
                None
            }
        }
    }
}
