use crate::error::RleError;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumType {
    CRC32,
    SHA256,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct RleConfig {
    /// Prefix of the file written by the encode step of a benchmark.
    pub encoded_prefix: String,
    /// Prefix of the file written by the decode step of a benchmark.
    pub decoded_prefix: String,
    pub output_dir: PathBuf,
    pub checksum: ChecksumType,
    pub report_format: ReportFormat,
}

impl Default for RleConfig {
    fn default() -> Self {
        Self {
            encoded_prefix: "encoded_".to_string(),
            decoded_prefix: "decoded_".to_string(),
            output_dir: PathBuf::from("."),
            checksum: ChecksumType::CRC32,
            report_format: ReportFormat::Text,
        }
    }
}

impl RleConfig {
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_checksum(mut self, checksum: ChecksumType) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn with_report_format(mut self, report_format: ReportFormat) -> Self {
        self.report_format = report_format;
        self
    }

    pub fn with_prefixes(mut self, encoded: &str, decoded: &str) -> Self {
        self.encoded_prefix = encoded.to_string();
        self.decoded_prefix = decoded.to_string();
        self
    }
}

impl FromStr for ChecksumType {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "crc32" => Ok(ChecksumType::CRC32),
            "sha256" => Ok(ChecksumType::SHA256),
            _ => Err(RleError::ConfigError(format!("Invalid checksum: {}", s))),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = RleError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(RleError::ConfigError(format!("Invalid report format: {}", s))),
        }
    }
}
