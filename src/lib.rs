//! # rlec
//!
//! A lossless run-length codec for byte streams with long runs of repeated
//! bytes, such as firmware images.
//!
//! ## Format
//!
//! The encoded stream is a flat sequence of 3-byte records,
//! `[count: u16 big-endian][value: u8]`, with no header or terminator. A run
//! longer than 65535 bytes is stored as several consecutive records.
//!
//! ## Quick Start
//!
//! ```rust
//! use rlec::{decode, encode};
//!
//! let encoded = encode(b"AAAB");
//! assert_eq!(encoded, [0x00, 0x03, b'A', 0x00, 0x01, b'B']);
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded, b"AAAB");
//! ```
//!
//! ### Measuring the reduction
//!
//! ```rust
//! use rlec::{encode, size_reduction};
//!
//! let firmware = vec![0xFFu8; 4096];
//! let encoded = encode(&firmware);
//! let reduction = size_reduction(firmware.len() as u64, encoded.len() as u64);
//! assert!(reduction > 99.0);
//! ```
//!
//! ### Working with Files
//!
//! ```rust,no_run
//! use rlec::pipeline;
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = BufReader::new(File::open("firmware.bin")?);
//! let mut writer = BufWriter::new(File::create("encoded_firmware.bin")?);
//!
//! let stats = pipeline::compress(&mut reader, &mut writer)?;
//! println!("Size reduction: {:.2}%", stats.reduction);
//! # Ok(())
//! # }
//! ```

pub mod bench;
pub mod checksum;
pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod run;

// Re-export commonly used types for convenience
pub use codec::{decode, encode};
pub use config::{ChecksumType, ReportFormat, RleConfig};
pub use error::{Result, RleError};
pub use metrics::size_reduction;
pub use pipeline::CodecStats;
pub use run::{Run, MAX_RUN, RECORD_SIZE};
