use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use resatq::{process, DriverError, Operation, ProcessOptions, ProcessReport, SampleFormat};
use std::fs::File;
use std::path::PathBuf;
use std::process::exit;

#[derive(Parser)]
#[command(name = "satq")]
#[command(version = "0.1.0")]
#[command(about = "Block-stream driver for the satq fixed-point operators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a Q15 gain to every sample
    Gain {
        /// Input sample stream (16-bit words)
        input: PathBuf,
        /// Output sample stream
        output: PathBuf,
        /// Gain in Q15 (16384 = one half)
        #[arg(short, long, default_value = "16384", allow_negative_numbers = true)]
        gain: i16,
        /// Saturating left shift applied after the gain; negative shifts right
        #[arg(short = 's', long, default_value = "0", allow_negative_numbers = true)]
        post_shift: i16,
        #[command(flatten)]
        stream: StreamArgs,
    },
    /// Scale each block so its peak fills the 16-bit range
    Normalize {
        /// Input sample stream (16-bit words)
        input: PathBuf,
        /// Output sample stream
        output: PathBuf,
        #[command(flatten)]
        stream: StreamArgs,
    },
    /// Convert between linear, A-law and u-law sample streams
    Convert {
        /// Input sample stream (16-bit words)
        input: PathBuf,
        /// Output sample stream
        output: PathBuf,
        /// Output companding: linear, alaw or ulaw
        #[arg(long, default_value = "linear")]
        to: String,
        #[command(flatten)]
        stream: StreamArgs,
    },
}

#[derive(Args)]
struct StreamArgs {
    /// Input companding: linear, alaw or ulaw
    #[arg(short, long, default_value = "linear")]
    format: String,
    /// Samples per block
    #[arg(short, long, default_value = "160")]
    block_size: usize,
    /// First block to process (1-based)
    #[arg(long, default_value = "1")]
    start_block: u64,
    /// Number of blocks to process (0 = through end of input)
    #[arg(long, default_value = "0")]
    blocks: u64,
    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("resatq: {err:#}");
        let code = err
            .downcast_ref::<DriverError>()
            .map(DriverError::exit_code)
            .unwrap_or(1);
        exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gain {
            input,
            output,
            gain,
            post_shift,
            stream,
        } => run_op(&input, &output, Operation::Gain { gain, post_shift }, stream),
        Commands::Normalize {
            input,
            output,
            stream,
        } => run_op(&input, &output, Operation::Normalize, stream),
        Commands::Convert {
            input,
            output,
            to,
            stream,
        } => {
            let to: SampleFormat = to.parse().map_err(|e: String| anyhow!(e))?;
            run_op(&input, &output, Operation::Convert { to }, stream)
        }
    }
}

fn run_op(input: &PathBuf, output: &PathBuf, op: Operation, stream: StreamArgs) -> Result<()> {
    let format: SampleFormat = stream.format.parse().map_err(|e: String| anyhow!(e))?;
    let opts = ProcessOptions {
        format,
        block_size: stream.block_size,
        start_block: stream.start_block,
        blocks: stream.blocks,
    };

    println!("Reading {}...", input.display());

    let mut infile = File::open(input).map_err(DriverError::OpenInput)?;
    let mut outfile = File::create(output).map_err(DriverError::CreateOutput)?;

    let report = process(&mut infile, &mut outfile, &op, &opts)?;

    if stream.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(output, &report);
    }

    Ok(())
}

fn print_report(output: &PathBuf, report: &ProcessReport) {
    println!("Done!");
    println!("  Output:    {}", output.display());
    println!("  Operation: {}", report.operation);
    println!("  Format:    {}", report.format);
    println!(
        "  Blocks:    {} ({} samples in, {} out)",
        report.blocks_processed, report.samples_in, report.samples_out
    );
    println!("  Clipped:   {} samples", report.clipped_samples);
}
