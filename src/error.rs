use thiserror::Error;

#[derive(Error, Debug)]
pub enum RleError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Malformed encoded stream: length {len} is not a multiple of {record_size}")]
	MalformedInput { len: usize, record_size: usize },

	#[error("Round-trip check failed for {0}: decoded data differs from the original")]
	RoundTripMismatch(String),

	#[error("Report serialization failed: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, RleError>;
