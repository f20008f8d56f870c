/* src/source.rs */

use std::io;
use std::io::{Read, Seek, SeekFrom};

/// A seekable, finite byte provider of known total length.
///
/// The reader pulls from a `Source` in chunks and never assumes the
/// whole source can be read at once. Positional reads follow the
/// standard short-read contract: a call may return fewer bytes than
/// the destination holds, and returns zero at or past the end of the
/// source. Neither case is an error.
pub trait Source {
	/// Total byte length of the source.
	///
	/// Queried once when a reader is constructed; the source must not
	/// change length afterwards.
	///
	/// # Errors
	///
	/// Returns any I/O fault raised while determining the length.
	fn len(&mut self) -> io::Result<u64>;

	/// Read up to `buf.len()` bytes starting at byte position `pos`,
	/// returning how many bytes were actually read.
	///
	/// # Errors
	///
	/// Returns I/O faults only. A short or zero-length read is a
	/// success.
	fn read_at(&mut self, pos: u64, buf: &mut [u8]) -> io::Result<usize>;
}

/// Any `Read + Seek` value is a usable source; this covers `File`,
/// `Cursor`, and similar handles. The caller keeps ownership of the
/// handle's lifecycle (the reader hands it back via
/// [`BufferedReader::into_inner`](crate::BufferedReader::into_inner)).
impl<R: Read + Seek> Source for R {
	fn len(&mut self) -> io::Result<u64> {
		let pos = self.stream_position()?;
		let end = self.seek(SeekFrom::End(0))?;
		self.seek(SeekFrom::Start(pos))?;
		Ok(end)
	}

	fn read_at(&mut self, pos: u64, buf: &mut [u8]) -> io::Result<usize> {
		self.seek(SeekFrom::Start(pos))?;
		self.read(buf)
	}
}
