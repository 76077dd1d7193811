//! Run-Length Encoding over 3-byte records
//! Format: [COUNT_HI][COUNT_LO][BYTE] per run, no framing
//! Runs longer than 65535 bytes are split into several records

use crate::error::Result;
use crate::run::{self, Run, MAX_RUN};

pub fn encode(data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut encoded = Vec::with_capacity(run::encoded_len(data));
    let mut i = 0;

    while i < data.len() {
        let value = data[i];
        let mut run_length = 1;

        // Count consecutive identical bytes
        while i + run_length < data.len() && data[i + run_length] == value {
            run_length += 1;
        }
        i += run_length;

        // Full chunks first, then the remainder
        while run_length > MAX_RUN {
            encoded.extend_from_slice(&Run::new(u16::MAX, value).to_bytes());
            run_length -= MAX_RUN;
        }
        encoded.extend_from_slice(&Run::new(run_length as u16, value).to_bytes());
    }

    log::debug!("encoded {} bytes into {} bytes", data.len(), encoded.len());
    encoded
}

pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let capacity = run::decoded_len(data)?;
    if capacity == 0 {
        return Ok(Vec::new());
    }

    let mut decoded = Vec::with_capacity(capacity as usize);
    for run in run::records(data) {
        decoded.resize(decoded.len() + run.len(), run.value);
    }

    log::debug!("decoded {} bytes into {} bytes", data.len(), decoded.len());
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RleError;

    #[test]
    fn test_rle_empty() {
        let data: Vec<u8> = vec![];
        let encoded = encode(&data);
        assert!(encoded.is_empty());
        assert!(decode(&encoded).unwrap().is_empty());
    }

    #[test]
    fn test_rle_known_bytes() {
        let encoded = encode(b"AAAB");
        assert_eq!(encoded, vec![0x00, 0x03, 0x41, 0x00, 0x01, 0x42]);
        assert_eq!(decode(&encoded).unwrap(), b"AAAB");
    }

    #[test]
    fn test_rle_single_byte() {
        let encoded = encode(&[0x7F]);
        assert_eq!(encoded, vec![0x00, 0x01, 0x7F]);
        assert_eq!(decode(&encoded).unwrap(), vec![0x7F]);
    }

    #[test]
    fn test_rle_no_runs() {
        let data = vec![1, 2, 3, 4, 5];
        let encoded = encode(&data);
        // Worst case: three bytes per input byte
        assert_eq!(encoded.len(), data.len() * 3);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_rle_splits_long_run() {
        let data = vec![0xFF; 70000];
        let encoded = encode(&data);
        assert_eq!(encoded, vec![0xFF, 0xFF, 0xFF, 0x11, 0x71, 0xFF]);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_rle_exact_max_run_is_one_record() {
        let data = vec![0u8; MAX_RUN];
        let encoded = encode(&data);
        assert_eq!(encoded, vec![0xFF, 0xFF, 0x00]);
        assert_eq!(decode(&encoded).unwrap(), data);
    }

    #[test]
    fn test_rle_zero_count_contributes_nothing() {
        let encoded = [0x00, 0x00, b'X', 0x00, 0x02, b'Y'];
        assert_eq!(decode(&encoded).unwrap(), b"YY");
    }

    #[test]
    fn test_rle_rejects_truncated_stream() {
        let mut encoded = encode(b"AAAB");
        encoded.pop();
        let err = decode(&encoded).unwrap_err();
        assert!(matches!(err, RleError::MalformedInput { len: 5, record_size: 3 }));
    }
}
