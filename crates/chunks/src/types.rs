use serde::{Deserialize, Serialize};

/// Which text chunk layout a payload used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkKind {
    /// `tEXt`: Latin-1 keyword and text
    Plain,
    /// `zTXt`: deflate-compressed text
    Compressed,
    /// `iTXt`: UTF-8 text, optionally compressed, with language metadata
    International,
}

impl ChunkKind {
    /// Map a PNG type code to a text chunk kind. Non-text chunks yield `None`.
    #[must_use]
    pub fn from_type_code(code: [u8; 4]) -> Option<Self> {
        match &code {
            b"tEXt" => Some(Self::Plain),
            b"zTXt" => Some(Self::Compressed),
            b"iTXt" => Some(Self::International),
            _ => None,
        }
    }

    #[must_use]
    pub const fn type_code(self) -> &'static [u8; 4] {
        match self {
            Self::Plain => b"tEXt",
            Self::Compressed => b"zTXt",
            Self::International => b"iTXt",
        }
    }

    /// Get human-readable name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "tEXt",
            Self::Compressed => "zTXt",
            Self::International => "iTXt",
        }
    }
}

/// One framed chunk, borrowed from the file buffer, before payload decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    /// Four ASCII bytes, e.g. `IHDR`, `tEXt`
    pub type_code: [u8; 4],

    /// Chunk data, without length, type or CRC
    pub data: &'a [u8],
}

impl<'a> RawChunk<'a> {
    #[must_use]
    pub const fn new(type_code: [u8; 4], data: &'a [u8]) -> Self {
        Self { type_code, data }
    }

    /// Text chunk kind, if this chunk carries text
    #[must_use]
    pub fn text_kind(&self) -> Option<ChunkKind> {
        ChunkKind::from_type_code(self.type_code)
    }

    /// Type code as a string (lossy for non-ASCII codes)
    #[must_use]
    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(&self.type_code).into_owned()
    }
}

/// A fully decoded text chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    /// Layout the chunk was stored in
    pub kind: ChunkKind,

    /// Chunk keyword, e.g. "parameters", "prompt", "workflow"
    pub keyword: String,

    /// Decoded text
    pub text: String,

    /// iTXt language tag (empty tags are kept as `Some("")`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_tag: Option<String>,

    /// iTXt translated keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_keyword: Option<String>,
}

impl TextChunk {
    /// Create a chunk without iTXt metadata
    pub fn new(kind: ChunkKind, keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            keyword: keyword.into(),
            text: text.into(),
            language_tag: None,
            translated_keyword: None,
        }
    }

    /// Builder: set iTXt language tag
    #[must_use]
    pub fn language_tag(mut self, tag: impl Into<String>) -> Self {
        self.language_tag = Some(tag.into());
        self
    }

    /// Builder: set iTXt translated keyword
    #[must_use]
    pub fn translated_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.translated_keyword = Some(keyword.into());
        self
    }
}
