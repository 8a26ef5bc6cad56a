//! resatq - block-stream driver library
//!
//! Reads fixed-size blocks of 16-bit words from an input stream, runs them
//! through operators from `libsatq`, and writes the processed words back
//! out. Companded streams (G.711 A-law / µ-law) carry one code per word in
//! the 8 least significant bits and are expanded to linear before any
//! arithmetic touches them.

pub mod g711;

use std::io::{Read, Seek, SeekFrom, Write};
use std::str::FromStr;

use libsatq::{abs_s, mult_r_ovf, norm_s, shl_ovf, Flags, Word16};
use serde::Serialize;
use thiserror::Error;

/// Driver failures, one per exit code of the classic block drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot open input: {0}")]
    OpenInput(#[source] std::io::Error),
    #[error("cannot create output: {0}")]
    CreateOutput(#[source] std::io::Error),
    #[error("cannot reach the starting block: {0}")]
    Seek(#[source] std::io::Error),
    #[error("invalid processing parameters: {0}")]
    State(String),
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),
    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}

impl DriverError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::OpenInput(_) => 2,
            DriverError::CreateOutput(_) => 3,
            DriverError::Seek(_) => 4,
            DriverError::State(_) => 5,
            DriverError::Read(_) => 6,
            DriverError::Write(_) => 7,
        }
    }
}

/// Stream companding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Linear,
    ALaw,
    ULaw,
}

impl SampleFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            SampleFormat::Linear => "linear",
            SampleFormat::ALaw => "alaw",
            SampleFormat::ULaw => "ulaw",
        }
    }

    fn expand(self, word: Word16) -> Word16 {
        match self {
            SampleFormat::Linear => word,
            SampleFormat::ALaw => g711::alaw_expand((word & 0xff) as u8),
            SampleFormat::ULaw => g711::ulaw_expand((word & 0xff) as u8),
        }
    }

    fn compress(self, linear: Word16) -> Word16 {
        match self {
            SampleFormat::Linear => linear,
            SampleFormat::ALaw => g711::alaw_compress(linear) as Word16,
            SampleFormat::ULaw => g711::ulaw_compress(linear) as Word16,
        }
    }
}

impl FromStr for SampleFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "l" => Ok(SampleFormat::Linear),
            "alaw" | "a-law" | "a" => Ok(SampleFormat::ALaw),
            "ulaw" | "u-law" | "mulaw" | "u" => Ok(SampleFormat::ULaw),
            other => Err(format!(
                "unknown sample format: {}. Use: linear, alaw, ulaw",
                other
            )),
        }
    }
}

/// Block segmentation and companding of the stream.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
    /// Input (and, except for conversion, output) companding.
    pub format: SampleFormat,
    /// Samples per block.
    pub block_size: usize,
    /// First block to process, numbered from 1.
    pub start_block: u64,
    /// Number of blocks to process; 0 means through end of input.
    pub blocks: u64,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            format: SampleFormat::Linear,
            block_size: 160,
            start_block: 1,
            blocks: 0,
        }
    }
}

impl ProcessOptions {
    fn validate(&self) -> Result<(), DriverError> {
        if self.block_size == 0 {
            return Err(DriverError::State(
                "block size must be at least one sample".into(),
            ));
        }
        if self.start_block == 0 {
            return Err(DriverError::State("blocks are numbered from 1".into()));
        }
        Ok(())
    }

    /// Byte offset of the first block; streams are 16-bit word aligned.
    pub fn start_byte(&self) -> u64 {
        2 * (self.start_block - 1) * self.block_size as u64
    }
}

/// What to do with each block.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Q15 gain via rounding multiply, then a saturating post-shift.
    Gain { gain: Word16, post_shift: Word16 },
    /// Scale each block so its peak magnitude fills the normalized band.
    Normalize,
    /// Companding conversion only; samples pass through untouched.
    Convert { to: SampleFormat },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Gain { .. } => "gain",
            Operation::Normalize => "normalize",
            Operation::Convert { .. } => "convert",
        }
    }
}

/// What a run did.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessReport {
    pub operation: String,
    pub format: String,
    pub block_size: usize,
    pub blocks_processed: u64,
    pub samples_in: u64,
    pub samples_out: u64,
    /// Samples whose processed value had to be clamped.
    pub clipped_samples: u64,
    pub generated_at: String,
}

/// Run `op` over the selected block range of `input`, writing to `output`.
///
/// Follows the classic driver contract: a short final read processes what
/// arrived and ends the run; a zero-length read ends it silently.
pub fn process<R, W>(
    input: &mut R,
    output: &mut W,
    op: &Operation,
    opts: &ProcessOptions,
) -> Result<ProcessReport, DriverError>
where
    R: Read + Seek,
    W: Write,
{
    opts.validate()?;

    let start_byte = opts.start_byte();
    let stream_len = input.seek(SeekFrom::End(0)).map_err(DriverError::Seek)?;
    let block_count = if opts.blocks != 0 {
        opts.blocks
    } else {
        stream_len.saturating_sub(start_byte) / (2 * opts.block_size as u64)
    };
    input
        .seek(SeekFrom::Start(start_byte))
        .map_err(DriverError::Seek)?;

    let out_format = match op {
        Operation::Convert { to } => *to,
        _ => opts.format,
    };

    let mut report = ProcessReport {
        operation: op.name().to_string(),
        format: opts.format.as_str().to_string(),
        block_size: opts.block_size,
        blocks_processed: 0,
        samples_in: 0,
        samples_out: 0,
        clipped_samples: 0,
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    let mut words = vec![0i16; opts.block_size];
    for _ in 0..block_count {
        let got = read_block(input, &mut words)?;
        if got == 0 {
            break;
        }

        let linear: Vec<Word16> = words[..got].iter().map(|&w| opts.format.expand(w)).collect();
        let (processed, clipped) = apply(op, &linear);
        let out_words: Vec<Word16> = processed.iter().map(|&s| out_format.compress(s)).collect();
        write_block(output, &out_words)?;

        report.blocks_processed += 1;
        report.samples_in += got as u64;
        report.samples_out += out_words.len() as u64;
        report.clipped_samples += clipped;

        if got < opts.block_size {
            break;
        }
    }

    Ok(report)
}

fn apply(op: &Operation, samples: &[Word16]) -> (Vec<Word16>, u64) {
    match op {
        Operation::Convert { .. } => (samples.to_vec(), 0),
        Operation::Gain { gain, post_shift } => {
            let mut clipped = 0;
            let out = samples
                .iter()
                .map(|&x| {
                    let mut flags = Flags::new();
                    let y = shl_ovf(mult_r_ovf(x, *gain, &mut flags), *post_shift, &mut flags);
                    if flags.overflow {
                        clipped += 1;
                    }
                    y
                })
                .collect();
            (out, clipped)
        }
        Operation::Normalize => {
            let peak = samples.iter().map(|&x| abs_s(x)).max().unwrap_or(0);
            let shift = norm_s(peak);
            let mut clipped = 0;
            let out = samples
                .iter()
                .map(|&x| {
                    let mut flags = Flags::new();
                    let y = shl_ovf(x, shift, &mut flags);
                    if flags.overflow {
                        clipped += 1;
                    }
                    y
                })
                .collect();
            (out, clipped)
        }
    }
}

// Fill `words` with as many little-endian 16-bit words as the stream still
// has, returning how many arrived. A trailing odd byte is dropped, the way
// a whole-item block read drops it.
fn read_block<R: Read>(input: &mut R, words: &mut [i16]) -> Result<usize, DriverError> {
    let mut buf = vec![0u8; words.len() * 2];
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(DriverError::Read(e)),
        }
    }
    let got = filled / 2;
    for (i, word) in words.iter_mut().take(got).enumerate() {
        *word = i16::from_le_bytes([buf[2 * i], buf[2 * i + 1]]);
    }
    Ok(got)
}

fn write_block<W: Write>(output: &mut W, words: &[i16]) -> Result<(), DriverError> {
    let mut buf = Vec::with_capacity(words.len() * 2);
    for &w in words {
        buf.extend_from_slice(&w.to_le_bytes());
    }
    output.write_all(&buf).map_err(DriverError::Write)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_byte_is_word_aligned() {
        let opts = ProcessOptions {
            block_size: 160,
            start_block: 3,
            ..Default::default()
        };
        assert_eq!(opts.start_byte(), 2 * 2 * 160);
    }

    #[test]
    fn zero_block_size_is_a_state_error() {
        let opts = ProcessOptions {
            block_size: 0,
            ..Default::default()
        };
        let err = opts.validate().unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }
}
