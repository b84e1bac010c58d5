use crate::error::DecodeError;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use std::io::Read;

/// Stream framings tried when inflating a text payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// RFC 1950 stream: 2-byte header, deflate data, adler32
    Zlib,
    /// Bare RFC 1951 deflate data. Some writers drop the zlib header.
    Raw,
}

/// Attempt order for [`inflate`]
pub const ATTEMPTS: [Framing; 2] = [Framing::Zlib, Framing::Raw];

impl Framing {
    fn decode(self, bytes: &[u8], max_len: usize) -> Result<Vec<u8>, DecodeError> {
        let limit = max_len.saturating_add(1) as u64;
        let mut out = Vec::new();
        let read = match self {
            Self::Zlib => ZlibDecoder::new(bytes).take(limit).read_to_end(&mut out),
            Self::Raw => DeflateDecoder::new(bytes).take(limit).read_to_end(&mut out),
        };
        read.map_err(|e| DecodeError::inflate(format!("{self:?}: {e}")))?;
        if out.len() > max_len {
            return Err(DecodeError::InflatedTooLarge { limit: max_len });
        }
        Ok(out)
    }
}

/// Inflate a compressed text payload, trying each of [`ATTEMPTS`] in order.
///
/// Returns the first successful output. An oversized output is final: the
/// other framing would inflate the same data, so it is not retried.
pub fn inflate(bytes: &[u8], max_len: usize) -> Result<Vec<u8>, DecodeError> {
    let mut failures = Vec::with_capacity(ATTEMPTS.len());
    for framing in ATTEMPTS {
        match framing.decode(bytes, max_len) {
            Ok(out) => {
                if framing != Framing::Zlib {
                    log::debug!("inflated {} bytes via {framing:?} fallback", bytes.len());
                }
                return Ok(out);
            }
            Err(err @ DecodeError::InflatedTooLarge { .. }) => return Err(err),
            Err(err) => failures.push(err.to_string()),
        }
    }
    Err(DecodeError::inflate(failures.join("; ")))
}
