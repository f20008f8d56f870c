/* demos/scatter.rs */
#![allow(missing_docs)]

//! Scattered random-offset reads over a generated file.
//!
//! Writes a small binary file, then reads bytes and little-endian
//! integers at arbitrary offsets through a `BufferedReader`, printing
//! how much of the file each access pattern forced into memory.

use std::fs::File;
use std::io::Write;

use prefill::BufferedReader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let path = std::env::temp_dir().join("prefill-scatter.bin");
	generate(&path, 1 << 20)?;

	let file = File::open(&path)?;
	// Small prime and chunk so the lazy fill is visible.
	let mut reader = BufferedReader::with_params(file, 4096, 1024)?;
	println!("file: {} bytes, primed: {}", reader.len(), reader.filled());

	for offset in [0, 17, 4095, 4096, 60_000, 59_999, 500_000] {
		let byte = reader.read_byte(offset)?;
		println!(
			"byte @ {offset:>7} = {byte:#04x}   filled {:>7}/{}",
			reader.filled(),
			reader.len()
		);
	}

	for offset in [0, 12_345, 999_000] {
		let value = reader.read_u32_le(offset)?;
		println!(
			"u32  @ {offset:>7} = {value:#010x} filled {:>7}/{}",
			reader.filled(),
			reader.len()
		);
	}

	std::fs::remove_file(&path)?;
	Ok(())
}

fn generate(path: &std::path::Path, len: usize) -> std::io::Result<()> {
	let mut file = File::create(path)?;
	let bytes: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
	file.write_all(&bytes)
}
