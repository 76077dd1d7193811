//! The run record shared by the encoder and the decoder.
//!
//! An encoded stream is a flat sequence of 3-byte records:
//! `[count: u16 big-endian][value: u8]`. There is no header, length prefix
//! or terminator; the stream ends where the buffer ends.

use crate::error::{Result, RleError};
use byteorder::{BigEndian, ByteOrder};

/// Size in bytes of one serialized run.
pub const RECORD_SIZE: usize = 3;

/// Largest count a single record can hold.
pub const MAX_RUN: usize = u16::MAX as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub count: u16,
    pub value: u8,
}

impl Run {
    pub fn new(count: u16, value: u8) -> Self {
        Self { count, value }
    }

    /// Number of raw bytes this run expands to.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut record = [0u8; RECORD_SIZE];
        BigEndian::write_u16(&mut record[..2], self.count);
        record[2] = self.value;
        record
    }

    pub fn from_bytes(record: &[u8; RECORD_SIZE]) -> Self {
        Self {
            count: BigEndian::read_u16(&record[..2]),
            value: record[2],
        }
    }
}

/// Rejects any buffer that is not a whole number of records.
pub(crate) fn validate(encoded: &[u8]) -> Result<()> {
    if encoded.len() % RECORD_SIZE != 0 {
        log::warn!("rejecting encoded stream of {} bytes", encoded.len());
        return Err(RleError::MalformedInput {
            len: encoded.len(),
            record_size: RECORD_SIZE,
        });
    }
    Ok(())
}

/// Iterates over the records of an already validated stream.
pub(crate) fn records(encoded: &[u8]) -> impl Iterator<Item = Run> + '_ {
    encoded
        .chunks_exact(RECORD_SIZE)
        .filter_map(|record| <&[u8; RECORD_SIZE]>::try_from(record).ok())
        .map(Run::from_bytes)
}

/// Parses an encoded stream into its runs.
pub fn runs(encoded: &[u8]) -> Result<Vec<Run>> {
    validate(encoded)?;
    Ok(records(encoded).collect())
}

/// Number of raw bytes an encoded stream expands to.
pub fn decoded_len(encoded: &[u8]) -> Result<u64> {
    validate(encoded)?;
    Ok(records(encoded).map(|run| run.count as u64).sum())
}

/// Size of the encoding of `raw`, computed without building it.
pub fn encoded_len(raw: &[u8]) -> usize {
    let mut records = 0;
    let mut i = 0;

    while i < raw.len() {
        let value = raw[i];
        let mut run_length = 1;
        while i + run_length < raw.len() && raw[i + run_length] == value {
            run_length += 1;
        }
        records += run_length.div_ceil(MAX_RUN);
        i += run_length;
    }

    records * RECORD_SIZE
}
