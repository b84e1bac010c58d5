use crate::config::ReaderConfig;
use crate::error::DecodeError;
use crate::inflate::inflate;
use crate::types::{ChunkKind, TextChunk};

/// The only compression method PNG defines (zlib/deflate)
const COMPRESSION_DEFLATE: u8 = 0;

/// Decodes the data bytes of `tEXt`, `zTXt` and `iTXt` chunks into text
#[derive(Debug, Clone)]
pub struct PayloadDecoder {
    max_inflated_bytes: usize,
}

impl Default for PayloadDecoder {
    fn default() -> Self {
        Self::new(&ReaderConfig::default())
    }
}

impl PayloadDecoder {
    #[must_use]
    pub fn new(config: &ReaderConfig) -> Self {
        Self {
            max_inflated_bytes: config.max_inflated_bytes,
        }
    }

    /// Decode one chunk payload according to its layout
    pub fn decode(&self, kind: ChunkKind, data: &[u8]) -> Result<TextChunk, DecodeError> {
        match kind {
            ChunkKind::Plain => Self::decode_plain(data),
            ChunkKind::Compressed => self.decode_compressed(data),
            ChunkKind::International => self.decode_international(data),
        }
    }

    /// `keyword NUL text`, both Latin-1
    fn decode_plain(data: &[u8]) -> Result<TextChunk, DecodeError> {
        let (keyword, text) = split_nul(data, "keyword")?;
        Ok(TextChunk::new(
            ChunkKind::Plain,
            latin1(keyword),
            latin1(text),
        ))
    }

    /// `keyword NUL method compressed-text`
    fn decode_compressed(&self, data: &[u8]) -> Result<TextChunk, DecodeError> {
        let (keyword, rest) = split_nul(data, "keyword")?;
        let (&method, compressed) = rest
            .split_first()
            .ok_or(DecodeError::TruncatedHeader("compression method"))?;
        ensure_deflate(method)?;

        let text = inflate(compressed, self.max_inflated_bytes)?;
        Ok(TextChunk::new(
            ChunkKind::Compressed,
            latin1(keyword),
            String::from_utf8_lossy(&text),
        ))
    }

    /// `keyword NUL flag method language NUL translated NUL text`
    fn decode_international(&self, data: &[u8]) -> Result<TextChunk, DecodeError> {
        let (keyword, rest) = split_nul(data, "keyword")?;
        let [flag, method, rest @ ..] = rest else {
            return Err(DecodeError::TruncatedHeader("compression flag and method"));
        };
        let (language, rest) = split_nul(rest, "language tag")?;
        let (translated, text) = split_nul(rest, "translated keyword")?;

        let text = if *flag == 1 {
            ensure_deflate(*method)?;
            String::from_utf8_lossy(&inflate(text, self.max_inflated_bytes)?).into_owned()
        } else {
            String::from_utf8_lossy(text).into_owned()
        };

        Ok(TextChunk::new(ChunkKind::International, latin1(keyword), text)
            .language_tag(latin1(language))
            .translated_keyword(String::from_utf8_lossy(translated)))
    }
}

fn split_nul<'a>(
    bytes: &'a [u8],
    field: &'static str,
) -> Result<(&'a [u8], &'a [u8]), DecodeError> {
    let pos = bytes
        .iter()
        .position(|&b| b == 0)
        .ok_or(DecodeError::MissingSeparator(field))?;
    Ok((&bytes[..pos], &bytes[pos + 1..]))
}

const fn ensure_deflate(method: u8) -> Result<(), DecodeError> {
    if method == COMPRESSION_DEFLATE {
        Ok(())
    } else {
        Err(DecodeError::UnsupportedCompression(method))
    }
}

/// ISO 8859-1: every byte is the code point of the same value.
///
/// 0x80..=0x9F stay C1 controls; they are not remapped as windows-1252.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
