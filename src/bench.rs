//! Encode/decode benchmark over whole files.
//!
//! Each input file is encoded to `<output_dir>/<encoded_prefix><name>`, that
//! file is read back and decoded to `<output_dir>/<decoded_prefix><name>`, and
//! the sizes reported by the file system are turned into reduction
//! percentages. Timings cover the codec calls only, not the file I/O.

use crate::checksum::calculate_checksum;
use crate::codec;
use crate::config::RleConfig;
use crate::error::{Result, RleError};
use crate::metrics::{size_reduction, ResourceMonitor, ResourceUsage};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub const LEGEND: &str = "Results:\n\
    Positive compression: reduction in size\n\
    Negative compression: increase in size\n\
    RLE works best when there are long runs of repeating data";

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub encoded_path: PathBuf,
    pub decoded_path: PathBuf,
    pub original_size: u64,
    pub encoded_size: u64,
    pub decoded_size: u64,
    /// Reduction of the encoded file relative to the original, in percent.
    pub encoding_reduction: f64,
    /// Reduction of the decoded file relative to the original; 0 when lossless.
    pub decoding_reduction: f64,
    pub reproducibility: f64,
    pub loss: f64,
    pub encoding_seconds: f64,
    pub decoding_seconds: f64,
    pub compression_usage: ResourceUsage,
    pub decompression_usage: ResourceUsage,
    pub checksum: String,
}

fn output_path(dir: &Path, prefix: &str, file_name: &str) -> PathBuf {
    dir.join(format!("{}{}", prefix, file_name))
}

fn input_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| RleError::ConfigError(format!("Not a file path: {}", path.display())))
}

/// Benchmarks a single file.
pub fn run_file(path: &Path, config: &RleConfig, monitor: &mut ResourceMonitor) -> Result<FileReport> {
    let file_name = input_name(path)?;
    log::info!("benchmarking {}", path.display());

    let data = fs::read(path)?;

    let before = monitor.sample();
    let start = Instant::now();
    let encoded = codec::encode(&data);
    let encoding_seconds = start.elapsed().as_secs_f64();
    let compression_usage = monitor.sample().delta(&before);

    let encoded_path = output_path(&config.output_dir, &config.encoded_prefix, &file_name);
    fs::write(&encoded_path, &encoded)?;
    let encoded = fs::read(&encoded_path)?;

    let before = monitor.sample();
    let start = Instant::now();
    let decoded = codec::decode(&encoded)?;
    let decoding_seconds = start.elapsed().as_secs_f64();
    let decompression_usage = monitor.sample().delta(&before);

    let decoded_path = output_path(&config.output_dir, &config.decoded_prefix, &file_name);
    fs::write(&decoded_path, &decoded)?;

    let original_size = fs::metadata(path)?.len();
    let encoded_size = fs::metadata(&encoded_path)?.len();
    let decoded_size = fs::metadata(&decoded_path)?.len();

    let checksum = calculate_checksum(&data, config.checksum);
    if calculate_checksum(&decoded, config.checksum) != checksum {
        log::warn!("{} did not survive the round trip", path.display());
        return Err(RleError::RoundTripMismatch(file_name));
    }

    let encoding_reduction = size_reduction(original_size, encoded_size);
    let decoding_reduction = size_reduction(original_size, decoded_size);
    let loss = decoding_reduction;

    Ok(FileReport {
        file: file_name,
        encoded_path,
        decoded_path,
        original_size,
        encoded_size,
        decoded_size,
        encoding_reduction,
        decoding_reduction,
        reproducibility: 100.0 - loss,
        loss,
        encoding_seconds,
        decoding_seconds,
        compression_usage,
        decompression_usage,
        checksum: checksum.to_string(),
    })
}

/// Benchmarks every file in order, stopping at the first failure.
///
/// Outputs are named after the input's file name, so two inputs sharing a
/// file name are rejected before anything is written.
pub fn run<P: AsRef<Path>>(paths: &[P], config: &RleConfig) -> Result<Vec<FileReport>> {
    let mut seen = HashSet::new();
    for path in paths {
        let name = input_name(path.as_ref())?;
        if !seen.insert(name.clone()) {
            return Err(RleError::ConfigError(format!(
                "Duplicate file name {}: outputs would overwrite each other",
                name
            )));
        }
    }

    fs::create_dir_all(&config.output_dir)?;

    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Files {pos}/{len} {msg}")
        .map_err(|e| RleError::ConfigError(e.to_string()))?
        .progress_chars("#>-")
    );

    let mut monitor = ResourceMonitor::new();
    let mut reports = Vec::with_capacity(paths.len());
    for path in paths {
        pb.set_message(path.as_ref().display().to_string());
        reports.push(run_file(path.as_ref(), config, &mut monitor)?);
        pb.inc(1);
    }

    pb.finish_with_message("Benchmark finished");
    Ok(reports)
}

impl fmt::Display for FileReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "For file {}:", self.file)?;
        writeln!(f, "  Size reduction achieved by encoding:        {:.2}%", self.encoding_reduction)?;
        writeln!(f, "  Size reduction from original after decoding: {:.2}%", self.decoding_reduction)?;
        writeln!(f, "  Reproducibility:                            {:.2}%", self.reproducibility)?;
        writeln!(f, "  Loss:                                       {:.2}%", self.loss)?;
        writeln!(f, "  Encoding time:                              {:.6} s", self.encoding_seconds)?;
        writeln!(f, "  Decoding time:                              {:.6} s", self.decoding_seconds)?;
        writeln!(f, "  CPU utilization during compression:         {:.1}%", self.compression_usage.cpu_percent)?;
        writeln!(f, "  Memory usage during compression:            {:.1}%", self.compression_usage.memory_percent)?;
        writeln!(f, "  CPU utilization during decompression:       {:.1}%", self.decompression_usage.cpu_percent)?;
        writeln!(f, "  Memory usage during decompression:          {:.1}%", self.decompression_usage.memory_percent)?;
        write!(f, "  Checksum:                                   {}", self.checksum)
    }
}
