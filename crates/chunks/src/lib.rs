//! # pngprompt chunks
//!
//! Reads the text chunks that image generators embed in PNG files.
//!
//! ## Architecture
//!
//! ```text
//! PNG bytes
//!     │
//!     ├──> Signature check (fatal on mismatch)
//!     │
//!     ├──> Framing scan → RawChunk[]
//!     │      ├─ [length][type][data][crc], crc is not verified
//!     │      ├─ stops at IEND
//!     │      └─ stops silently on a truncated chunk
//!     │
//!     └──> Payload decoding (tEXt / zTXt / iTXt only)
//!            ├─ Latin-1 or UTF-8 text
//!            ├─ inflate: zlib first, raw deflate second
//!            └─ Emit TextChunk[], undecodable chunks are dropped
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pngprompt_chunks::{ChunkReader, ReaderConfig};
//!
//! let reader = ChunkReader::new(ReaderConfig::default()).unwrap();
//! let mut png = pngprompt_chunks::PNG_SIGNATURE.to_vec();
//! png.extend_from_slice(&0u32.to_be_bytes());
//! png.extend_from_slice(b"IEND");
//! png.extend_from_slice(&[0, 0, 0, 0]);
//!
//! let chunks = reader.read(&png).unwrap();
//! assert!(chunks.is_empty());
//! ```

mod config;
mod decoder;
mod error;
mod inflate;
mod reader;
mod types;

pub use config::ReaderConfig;
pub use decoder::PayloadDecoder;
pub use error::{ChunkError, DecodeError, Result};
pub use inflate::{inflate, Framing};
pub use reader::{ChunkReader, PNG_SIGNATURE};
pub use types::{ChunkKind, RawChunk, TextChunk};
