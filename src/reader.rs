/* src/reader.rs */

use log::{debug, trace};

use crate::Error;
use crate::source::Source;

/// Bytes eagerly pulled at construction when no prime size is given.
pub const DEFAULT_PRIME_BYTES: usize = 2 * 1024 * 1024;

/// Bytes pulled per fill step when no chunk size is given.
pub const DEFAULT_CHUNK_BYTES: usize = 4096;

/// Random-access reader that mirrors a growing prefix of a [`Source`]
/// in memory.
///
/// The mirror buffer is allocated once, to the source's full length,
/// and is never resized. Reads at offsets beyond the filled prefix
/// trigger chunked pulls from the source until the requested window is
/// covered; reads inside the prefix touch no I/O at all. The filled
/// prefix only grows, so repeating a read is free after the first time.
///
/// Every read takes `&mut self` because a fill mutates the buffer in
/// place; sharing a reader across threads requires external
/// synchronization.
///
/// ```
/// use std::io::Cursor;
/// use prefill::BufferedReader;
///
/// let data = vec![0x11, 0x22, 0x33, 0x44, 0x55];
/// let mut reader = BufferedReader::new(Cursor::new(data)).unwrap();
/// assert_eq!(reader.read_byte(4).unwrap(), 0x55);
/// assert_eq!(reader.read_u32_le(0).unwrap(), 0x4433_2211);
/// ```
#[derive(Debug)]
pub struct BufferedReader<S: Source> {
	source: S,
	buf: Vec<u8>,
	filled: usize,
	chunk: usize,
}

impl<S: Source> BufferedReader<S> {
	/// Create a reader with the default prime and chunk sizes
	/// ([`DEFAULT_PRIME_BYTES`], [`DEFAULT_CHUNK_BYTES`]).
	///
	/// # Errors
	///
	/// Returns [`Error::Source`] when querying the length or priming
	/// fails, or [`Error::SourceTooLarge`] when the source length does
	/// not fit in `usize`.
	pub fn new(source: S) -> Result<Self, Error> {
		Self::with_params(source, DEFAULT_PRIME_BYTES, DEFAULT_CHUNK_BYTES)
	}

	/// Create a reader with explicit sizes.
	///
	/// `prime_bytes` bytes are pulled eagerly, clamped to the source
	/// length; the priming pull may come back short without this being
	/// an error. `chunk_bytes` bounds every later pull; zero falls
	/// back to the full source length.
	///
	/// # Errors
	///
	/// Same failure cases as [`BufferedReader::new`].
	///
	/// ```
	/// use std::io::Cursor;
	/// use prefill::BufferedReader;
	///
	/// // A prime larger than the source is clamped, not an error.
	/// let mut reader = BufferedReader::with_params(Cursor::new(vec![7u8; 3]), 1024, 16).unwrap();
	/// assert_eq!(reader.filled(), 3);
	/// assert_eq!(reader.read_byte(2).unwrap(), 7);
	/// ```
	pub fn with_params(mut source: S, prime_bytes: usize, chunk_bytes: usize) -> Result<Self, Error> {
		let length = source.len()?;
		let total = usize::try_from(length).map_err(|_| Error::SourceTooLarge { length })?;
		let mut buf = vec![0u8; total];

		let prime = prime_bytes.min(total);
		let filled = if prime > 0 {
			source.read_at(0, &mut buf[..prime])?
		} else {
			0
		};

		let chunk = if chunk_bytes == 0 { total.max(1) } else { chunk_bytes };
		debug!("mirroring {total} bytes, primed {filled}, chunk {chunk}");

		Ok(Self {
			source,
			buf,
			filled,
			chunk,
		})
	}

	/// Total byte length of the source.
	#[must_use]
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Whether the source has zero length.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}

	/// Number of leading bytes currently mirrored from the source.
	///
	/// Monotonically non-decreasing over the reader's lifetime.
	#[must_use]
	pub fn filled(&self) -> usize {
		self.filled
	}

	/// Maximum bytes pulled per fill step.
	#[must_use]
	pub fn chunk_size(&self) -> usize {
		self.chunk
	}

	/// Consume the reader and hand the source back to the caller.
	#[must_use]
	pub fn into_inner(self) -> S {
		self.source
	}

	/// Read the byte at `offset`.
	///
	/// # Errors
	///
	/// [`Error::OffsetOutOfRange`] for a negative offset,
	/// [`Error::WindowPastEnd`] for `offset >= len()`, and
	/// [`Error::Source`] when a fill pull faults.
	pub fn read_byte(&mut self, offset: i64) -> Result<u8, Error> {
		let off = self.checked_window(offset, 1)?;
		self.fill_to(off + 1)?;
		self.covered(off, 1)?;
		Ok(self.buf[off])
	}

	/// Read 4 bytes at `offset` as an unsigned little-endian integer.
	///
	/// # Errors
	///
	/// [`Error::OffsetOutOfRange`] for a negative offset,
	/// [`Error::WindowPastEnd`] when the 4-byte window extends past
	/// the end, and [`Error::Source`] when a fill pull faults.
	pub fn read_u32_le(&mut self, offset: i64) -> Result<u32, Error> {
		let off = self.checked_window(offset, 4)?;
		self.fill_to(off + 4)?;
		self.covered(off, 4)?;
		Ok(u32::from_le_bytes([
			self.buf[off],
			self.buf[off + 1],
			self.buf[off + 2],
			self.buf[off + 3],
		]))
	}

	/// Read 4 bytes at `offset` as a signed little-endian integer.
	///
	/// Same bit pattern as [`BufferedReader::read_u32_le`], reinterpreted
	/// as two's complement.
	///
	/// # Errors
	///
	/// Same failure cases as [`BufferedReader::read_u32_le`].
	pub fn read_i32_le(&mut self, offset: i64) -> Result<i32, Error> {
		Ok(self.read_u32_le(offset)? as i32)
	}

	/// Validate a read window and convert its offset to an index.
	///
	/// Negative offsets and windows running past the end are rejected
	/// as two distinct error kinds.
	fn checked_window(&self, offset: i64, width: usize) -> Result<usize, Error> {
		if offset < 0 {
			return Err(Error::OffsetOutOfRange { offset });
		}
		let off = offset as u64;
		let length = self.buf.len() as u64;
		if off + width as u64 > length {
			return Err(Error::WindowPastEnd {
				offset: off,
				width,
				length,
			});
		}
		// off < length <= usize::MAX, so the cast is exact.
		Ok(off as usize)
	}

	/// Pull from the source until `filled >= need` or the source is
	/// exhausted. A zero-byte pull signals exhaustion and stops the
	/// loop; it is not an error by itself.
	fn fill_to(&mut self, need: usize) -> Result<(), Error> {
		while self.filled < need && self.filled < self.buf.len() {
			let start = self.filled;
			let pull = self.chunk.min(self.buf.len() - start);
			let read = self.source.read_at(start as u64, &mut self.buf[start..start + pull])?;
			self.filled += read;
			trace!("pulled {read} of {pull} bytes at {start}, filled {}/{}", self.filled, self.buf.len());
			if read == 0 {
				break;
			}
		}
		Ok(())
	}

	/// Reject a window the fill could not cover. Only reachable when
	/// the source turned out shorter than the length it declared.
	fn covered(&self, off: usize, width: usize) -> Result<(), Error> {
		if off + width > self.filled {
			return Err(Error::WindowPastEnd {
				offset: off as u64,
				width,
				length: self.filled as u64,
			});
		}
		Ok(())
	}
}
