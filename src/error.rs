/* src/error.rs */

/// Errors produced by [`BufferedReader`](crate::BufferedReader) operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// Requested offset is negative.
	#[error("offset out of range: {offset}")]
	OffsetOutOfRange {
		/// The rejected offset.
		offset: i64,
	},

	/// Requested read window extends past the end of the source.
	///
	/// Kept distinct from [`Error::OffsetOutOfRange`] so callers can tell
	/// a negative offset apart from a window that runs past the end.
	#[error("read window exceeds source: offset {offset} + width {width} > length {length}")]
	WindowPastEnd {
		/// Starting offset of the rejected window.
		offset: u64,
		/// Width of the rejected window in bytes.
		width: usize,
		/// Total byte length of the source.
		length: u64,
	},

	/// Source length does not fit in `usize`, so the mirror buffer
	/// cannot be allocated on this target.
	#[error("source too large to mirror in memory: {length} bytes")]
	SourceTooLarge {
		/// Declared byte length of the source.
		length: u64,
	},

	/// The backing source failed with an I/O fault.
	///
	/// Short reads are not faults and never produce this variant.
	#[error("source read failed: {0}")]
	Source(#[from] std::io::Error),
}
