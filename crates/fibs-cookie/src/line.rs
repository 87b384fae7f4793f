//! Line-based codec for tokio.
//!
//! Splits server output into lines ready for
//! [`CookieMonster::classify`](crate::CookieMonster::classify): the
//! terminator (`\n` or `\r\n`) is stripped and nothing else is touched, so
//! leading whitespace that some patterns depend on survives.

use bytes::BytesMut;
use tokio::io::AsyncRead;
use tokio_util::codec::{Decoder, Encoder, FramedRead};

use crate::error::{CookieError, Result};

/// Default maximum line length in bytes.
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Line-based codec for server output and client commands.
#[derive(Clone, Debug)]
pub struct LineCodec {
    /// Index of next byte to check for newline
    next_index: usize,
    /// Maximum line length
    max_len: usize,
}

impl LineCodec {
    /// Create a codec with [`DEFAULT_MAX_LINE_LEN`].
    pub fn new() -> Self {
        Self::with_max_len(DEFAULT_MAX_LINE_LEN)
    }

    /// Create a new codec with custom max line length.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
        }
    }

    /// Maximum line length this codec accepts.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Wraps `reader` into a stream of lines decoded by this codec.
    pub fn framed<R: AsyncRead>(self, reader: R) -> FramedRead<R, Self> {
        FramedRead::new(reader, self)
    }

    fn finish_line(raw: &[u8]) -> String {
        let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        // FIBS speaks ASCII; anything else is replaced rather than refused.
        String::from_utf8_lossy(raw).into_owned()
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for LineCodec {
    type Item = String;
    type Error = CookieError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        // Look for newline starting from where we left off
        if let Some(offset) = src[self.next_index..].iter().position(|b| *b == b'\n') {
            let line = src.split_to(self.next_index + offset + 1);
            self.next_index = 0;

            if line.len() > self.max_len {
                return Err(CookieError::LineTooLong {
                    actual: line.len(),
                    limit: self.max_len,
                });
            }

            Ok(Some(Self::finish_line(&line)))
        } else {
            self.next_index = src.len();

            if src.len() > self.max_len {
                return Err(CookieError::LineTooLong {
                    actual: src.len(),
                    limit: self.max_len,
                });
            }

            Ok(None)
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        if let Some(line) = self.decode(src)? {
            return Ok(Some(line));
        }
        if src.is_empty() {
            return Ok(None);
        }
        // The server may close (or a capture may end) mid-line, e.g. right
        // after a `login: ` prompt.
        let rest = src.split();
        self.next_index = 0;
        Ok(Some(Self::finish_line(&rest)))
    }
}

impl Encoder<String> for LineCodec {
    type Error = CookieError;

    fn encode(&mut self, msg: String, dst: &mut BytesMut) -> Result<()> {
        <Self as Encoder<&str>>::encode(self, msg.as_str(), dst)
    }
}

impl<'a> Encoder<&'a str> for LineCodec {
    type Error = CookieError;

    fn encode(&mut self, msg: &'a str, dst: &mut BytesMut) -> Result<()> {
        let msg = msg.trim_end_matches(['\r', '\n']);
        dst.reserve(msg.len() + 2);
        dst.extend_from_slice(msg.as_bytes());
        dst.extend_from_slice(b"\r\n");
        Ok(())
    }
}
