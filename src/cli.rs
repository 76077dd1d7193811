use crate::bench::{self, LEGEND};
use crate::config::{ChecksumType, ReportFormat, RleConfig};
use crate::error::RleError;
use crate::pipeline;
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = "Lossless run-length codec for byte streams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run-length encodes a file
    Encode {
        /// Input file to encode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decodes a run-length encoded file
    Decode {
        /// Input file to decode
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Output file name
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Lists the runs stored in an encoded file
    Inspect {
        /// Encoded file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Print at most this many runs
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Encodes and decodes each file, reporting size reduction, timings and resource usage
    Bench {
        /// Files to benchmark
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Directory for the encoded_/decoded_ outputs
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Report format [text, json]
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// Round-trip checksum [crc32, sha256]
        #[arg(short, long, default_value = "crc32")]
        checksum: ChecksumType,
    },
}

pub fn run() -> Result<(), RleError> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Encode { input, output } => {
            println!("Encoding {} to {}...", input.display(), output.display());
            let mut in_file = BufReader::new(File::open(input)?);
            let mut out_file = BufWriter::new(File::create(output)?);

            let stats = pipeline::compress(&mut in_file, &mut out_file)?;

            println!("Encoding successful!");
            println!("  Original Size:  {} bytes", stats.input_size);
            println!("  Encoded Size:   {} bytes", stats.output_size);
            println!("  Reduction:      {:.2}%", stats.reduction);
            println!("  Elapsed Time:   {:.2?}", stats.elapsed);
        }
        Commands::Decode { input, output } => {
            println!("Decoding {} to {}...", input.display(), output.display());
            let mut in_file = BufReader::new(File::open(input)?);
            let mut decoded = Vec::new();

            // Output is only created once decoding succeeded
            let stats = pipeline::decompress(&mut in_file, &mut decoded)?;
            fs::write(output, &decoded)?;

            println!("Decoding successful!");
            println!("  Encoded Size:   {} bytes", stats.input_size);
            println!("  Decoded Size:   {} bytes", stats.output_size);
            println!("  Elapsed Time:   {:.2?}", stats.elapsed);
        }
        Commands::Inspect { input, limit } => {
            let data = fs::read(input)?;
            let runs = crate::run::runs(&data)?;
            let total: u64 = runs.iter().map(|r| r.count as u64).sum();

            println!("{}: {} runs, {} decoded bytes", input.display(), runs.len(), total);
            for (i, r) in runs.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
                println!("  {:>8}  count={:<5}  value=0x{:02x}", i, r.count, r.value);
            }
        }
        Commands::Bench { files, output_dir, format, checksum } => {
            let config = RleConfig::default()
                .with_output_dir(output_dir)
                .with_checksum(*checksum)
                .with_report_format(*format);

            let reports = bench::run(files.as_slice(), &config)?;

            match config.report_format {
                ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
                ReportFormat::Text => {
                    for report in &reports {
                        println!("\n{}", report);
                    }
                    println!("\n{}", LEGEND);
                }
            }
        }
    }

    Ok(())
}
