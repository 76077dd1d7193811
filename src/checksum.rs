//! Digests used to confirm that a decoded file matches its original.

use crate::config::ChecksumType;
use crc32fast::Hasher as Crc32Hasher;
use sha2::{Digest, Sha256};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Checksum {
    Crc32(u32),
    Sha256([u8; 32]),
}

pub fn calculate_checksum(data: &[u8], checksum_type: ChecksumType) -> Checksum {
    match checksum_type {
        ChecksumType::CRC32 => {
            let mut hasher = Crc32Hasher::new();
            hasher.update(data);
            Checksum::Crc32(hasher.finalize())
        }
        ChecksumType::SHA256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            Checksum::Sha256(hasher.finalize().into())
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checksum::Crc32(crc) => write!(f, "crc32:{:08x}", crc),
            Checksum::Sha256(hash) => {
                write!(f, "sha256:")?;
                for byte in hash {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }
    }
}
