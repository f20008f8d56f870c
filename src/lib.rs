/* src/lib.rs */

//! Lazily filled mirror buffer for scattered random-offset reads.
//!
//! [`BufferedReader`] wraps a seekable byte source of known length,
//! allocates an in-memory buffer covering the whole source up front,
//! and fills it lazily: an eager priming pull at construction, then
//! fixed-size chunked pulls whenever a read lands beyond the bytes
//! mirrored so far. Many small reads at scattered offsets collapse
//! into a handful of underlying I/O calls, while reads that fall
//! inside the already-filled prefix cost no I/O at all.
//!
//! Any `Read + Seek` value works as a source:
//!
//! ```
//! use std::io::Cursor;
//! use prefill::BufferedReader;
//!
//! let data: Vec<u8> = (0..=255).collect();
//! let mut reader = BufferedReader::with_params(Cursor::new(data), 16, 8).unwrap();
//!
//! assert_eq!(reader.read_byte(200).unwrap(), 200);
//! assert_eq!(reader.read_u32_le(4).unwrap(), u32::from_le_bytes([4, 5, 6, 7]));
//!
//! // Bad offsets are rejected with two distinguishable error kinds.
//! assert!(matches!(
//!     reader.read_byte(-1),
//!     Err(prefill::Error::OffsetOutOfRange { .. })
//! ));
//! assert!(matches!(
//!     reader.read_u32_le(253),
//!     Err(prefill::Error::WindowPastEnd { .. })
//! ));
//! ```

mod error;
mod reader;
mod source;

pub use crate::error::Error;
pub use crate::reader::{BufferedReader, DEFAULT_CHUNK_BYTES, DEFAULT_PRIME_BYTES};
pub use crate::source::Source;
