use crate::codec;
use crate::error::Result;
use crate::metrics::size_reduction;
use serde::Serialize;
use std::io::{Read, Write};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Serialize)]
pub struct CodecStats {
	pub input_size: u64,
	pub output_size: u64,
	pub reduction: f64,
	pub elapsed: Duration,
}

impl CodecStats {
	fn new(input_size: usize, output_size: usize, elapsed: Duration) -> Self {
		let (input_size, output_size) = (input_size as u64, output_size as u64);
		Self { input_size, output_size, reduction: size_reduction(input_size, output_size), elapsed }
	}
}

/// Reads the whole of `reader`, run-length encodes it and writes the result.
pub fn compress<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<CodecStats> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;

	let start = Instant::now();
	let encoded = codec::encode(&buffer);
	let elapsed = start.elapsed();

	writer.write_all(&encoded)?;
	writer.flush()?;
	Ok(CodecStats::new(buffer.len(), encoded.len(), elapsed))
}

/// Reads a whole encoded stream from `reader`, decodes it and writes the result.
///
/// Nothing is written if the stream is malformed.
pub fn decompress<R: Read, W: Write>(reader: &mut R, writer: &mut W) -> Result<CodecStats> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;

	let start = Instant::now();
	let decoded = codec::decode(&buffer)?;
	let elapsed = start.elapsed();

	writer.write_all(&decoded)?;
	writer.flush()?;
	Ok(CodecStats::new(buffer.len(), decoded.len(), elapsed))
}
