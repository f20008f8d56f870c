/* tests/helpers/mod.rs */

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use prefill::Source;

/// The 12-byte sample sequence used throughout the read tests.
pub(crate) fn sample() -> Vec<u8> {
	vec![
		0x11, // 0
		0x22,
		0x33,
		0x44,
		0x55,
		0x66, // 5
		0x77,
		0x88,
		0x99,
		0xAA,
		0xBB, // 10
		0xCC,
	]
}

/// In-memory source that counts every pull it serves.
///
/// Implements [`Source`] directly rather than through `Read + Seek`
/// so tests can observe how many underlying reads a fill policy
/// actually issues.
pub(crate) struct CountingSource {
	data: Vec<u8>,
	pulls: Rc<Cell<usize>>,
}

impl CountingSource {
	pub(crate) fn new(data: Vec<u8>) -> (Self, Rc<Cell<usize>>) {
		let pulls = Rc::new(Cell::new(0));
		let source = Self {
			data,
			pulls: Rc::clone(&pulls),
		};
		(source, pulls)
	}
}

impl Source for CountingSource {
	fn len(&mut self) -> io::Result<u64> {
		Ok(self.data.len() as u64)
	}

	fn read_at(&mut self, pos: u64, buf: &mut [u8]) -> io::Result<usize> {
		self.pulls.set(self.pulls.get() + 1);
		let pos = pos as usize;
		if pos >= self.data.len() {
			return Ok(0);
		}
		let n = buf.len().min(self.data.len() - pos);
		buf[..n].copy_from_slice(&self.data[pos..pos + n]);
		Ok(n)
	}
}

/// Source that declares more bytes than it can actually serve.
pub(crate) struct LyingSource {
	data: Vec<u8>,
	declared: u64,
}

impl LyingSource {
	pub(crate) fn new(data: Vec<u8>, declared: u64) -> Self {
		Self { data, declared }
	}
}

impl Source for LyingSource {
	fn len(&mut self) -> io::Result<u64> {
		Ok(self.declared)
	}

	fn read_at(&mut self, pos: u64, buf: &mut [u8]) -> io::Result<usize> {
		let pos = pos as usize;
		if pos >= self.data.len() {
			return Ok(0);
		}
		let n = buf.len().min(self.data.len() - pos);
		buf[..n].copy_from_slice(&self.data[pos..pos + n]);
		Ok(n)
	}
}

/// Source that faults on every pull past a given position.
pub(crate) struct FaultySource {
	data: Vec<u8>,
	fault_at: u64,
}

impl FaultySource {
	pub(crate) fn new(data: Vec<u8>, fault_at: u64) -> Self {
		Self { data, fault_at }
	}
}

impl Source for FaultySource {
	fn len(&mut self) -> io::Result<u64> {
		Ok(self.data.len() as u64)
	}

	fn read_at(&mut self, pos: u64, buf: &mut [u8]) -> io::Result<usize> {
		if pos >= self.fault_at {
			return Err(io::Error::other("injected fault"));
		}
		let pos = pos as usize;
		let n = buf.len().min(self.data.len() - pos);
		buf[..n].copy_from_slice(&self.data[pos..pos + n]);
		Ok(n)
	}
}
